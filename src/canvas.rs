use crate::dom;
use glam::Vec2;
use portfolio_core::{Paint, Surface, SurfaceSize};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] backed by a 2D canvas context. Draw calls are in CSS pixels;
/// the device pixel ratio lives in the context transform.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_element_id(document: &web::Document, id: &str) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id(id)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("#{} has no 2d context", id))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    /// Resize the backing store and reset the pixel-ratio transform.
    pub fn sync_size(&self) -> SurfaceSize {
        let size = dom::sync_canvas_backing_size(&self.canvas);
        let dpr = size.dpr as f64;
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        size
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint) {
        self.ctx.set_fill_style_str(&paint.to_css());
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn fill_radial(&mut self, center: Vec2, radius: f32, inner: Paint, outer: Paint) {
        if radius <= 0.0 {
            return;
        }
        let (x, y, r) = (center.x as f64, center.y as f64, radius as f64);
        let Ok(gradient) = self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
            return;
        };
        _ = gradient.add_color_stop(0.0, &inner.to_css());
        _ = gradient.add_color_stop(1.0, &outer.to_css());
        #[allow(deprecated)]
        self.ctx.set_fill_style(&gradient);
        self.ctx.begin_path();
        _ = self.ctx.arc(x, y, r, 0.0, TAU);
        self.ctx.fill();
    }
}
