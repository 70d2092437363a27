use crate::canvas::CanvasSurface;
use crate::constants::{MIST_CANVAS_ID, STARS_CANVAS_ID};
use crate::dom;
use crate::frame::{CanvasLayer, FrameDriver, SharedInput};
use portfolio_core::{
    Animate, FieldConfig, GateAction, MistConfig, MistLayer, StarField, Theme, ThemeGate,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// The two background canvases. Either may be absent, in which case that
/// layer stays inert.
pub struct Sky {
    stars: Option<FrameDriver<StarField>>,
    mist: Option<FrameDriver<MistLayer>>,
    mist_gate: Cell<ThemeGate>,
    input: SharedInput,
}

fn mount_layer<A: Animate + 'static>(
    document: &web::Document,
    canvas_id: &str,
    animator: A,
    input: &SharedInput,
) -> Option<FrameDriver<A>> {
    match CanvasSurface::from_element_id(document, canvas_id) {
        Ok(surface) => {
            let mut layer = CanvasLayer::new(animator, surface);
            layer.resize(input.get().theme);
            Some(FrameDriver::new(layer, input.clone()))
        }
        Err(e) => {
            log::info!("[sky] #{} disabled: {:?}", canvas_id, e);
            None
        }
    }
}

impl Sky {
    pub fn mount(document: &web::Document, input: SharedInput) -> Rc<Self> {
        let field = StarField::new(FieldConfig::default(), StdRng::from_entropy());
        let stars = mount_layer(document, STARS_CANVAS_ID, field, &input);
        if let Some(d) = &stars {
            d.start();
        }

        let mist_layer = MistLayer::new(MistConfig::default(), StdRng::from_entropy());
        let mist = mount_layer(document, MIST_CANVAS_ID, mist_layer, &input);

        let sky = Rc::new(Self {
            stars,
            mist,
            mist_gate: Cell::new(ThemeGate::new(Theme::Light)),
            input,
        });
        sky.on_theme_change(sky.input.get().theme);

        let sky_resize = sky.clone();
        if let Some(w) = web::window() {
            dom::listen(&w, "resize", move |_| sky_resize.resize());
        }
        sky
    }

    /// Regenerate both populations at the current layout size.
    pub fn resize(&self) {
        let theme = self.input.get().theme;
        if let Some(d) = &self.stars {
            d.layer().borrow_mut().resize(theme);
        }
        if let Some(d) = &self.mist {
            d.layer().borrow_mut().resize(theme);
        }
    }

    /// Start or stop the mist loop; the starfield runs under both themes.
    pub fn on_theme_change(&self, theme: Theme) {
        let mut gate = self.mist_gate.get();
        let action = gate.update(theme);
        self.mist_gate.set(gate);
        let Some(mist) = &self.mist else {
            return;
        };
        match action {
            Some(GateAction::Start) => {
                log::info!("[mist] start");
                mist.start();
            }
            Some(GateAction::Stop) => {
                log::info!("[mist] stop");
                mist.stop();
            }
            None => {}
        }
    }
}
