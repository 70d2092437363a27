use crate::canvas::CanvasSurface;
use portfolio_core::{Animate, FrameInput, FrameLoop, LoopControl, Theme};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Latest theme and pointer, written by event handlers and read once per frame.
pub type SharedInput = Rc<Cell<FrameInput>>;

/// An animated layer bound to its canvas.
pub struct CanvasLayer<A> {
    pub frame_loop: FrameLoop<A>,
    surface: CanvasSurface,
}

impl<A: Animate> CanvasLayer<A> {
    pub fn new(animator: A, surface: CanvasSurface) -> Self {
        Self {
            frame_loop: FrameLoop::new(animator),
            surface,
        }
    }

    pub fn resize(&mut self, theme: Theme) {
        let size = self.surface.sync_size();
        self.frame_loop.animator.resize(size, theme);
    }

    pub fn step(&mut self, input: &FrameInput) -> LoopControl {
        self.frame_loop.step(&mut self.surface, input)
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drives a [`CanvasLayer`] from `requestAnimationFrame`.
///
/// One closure per layer is reused across stop/start; `scheduled` guards
/// against two frame chains running at once after a quick restart.
pub struct FrameDriver<A> {
    layer: Rc<RefCell<CanvasLayer<A>>>,
    tick: TickSlot,
    scheduled: Rc<Cell<bool>>,
}

impl<A: Animate + 'static> FrameDriver<A> {
    pub fn new(layer: CanvasLayer<A>, input: SharedInput) -> Self {
        let layer = Rc::new(RefCell::new(layer));
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let scheduled = Rc::new(Cell::new(false));

        let layer_tick = layer.clone();
        let tick_clone = tick.clone();
        let scheduled_tick = scheduled.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            scheduled_tick.set(false);
            let control = layer_tick.borrow_mut().step(&input.get());
            if control == LoopControl::Continue {
                request_frame(&tick_clone, &scheduled_tick);
            }
        }) as Box<dyn FnMut()>));

        Self {
            layer,
            tick,
            scheduled,
        }
    }

    pub fn layer(&self) -> &Rc<RefCell<CanvasLayer<A>>> {
        &self.layer
    }

    pub fn start(&self) {
        self.layer.borrow_mut().frame_loop.rearm();
        if !self.scheduled.get() {
            request_frame(&self.tick, &self.scheduled);
        }
    }

    /// Takes effect at the next frame boundary.
    pub fn stop(&self) {
        self.layer.borrow().frame_loop.token().stop();
    }
}

fn request_frame(tick: &TickSlot, scheduled: &Cell<bool>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if w.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
            scheduled.set(true);
        }
    }
}
