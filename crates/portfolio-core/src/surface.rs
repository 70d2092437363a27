//! Minimal 2D drawing surface used by the animated layers.
//!
//! Coordinates are in CSS pixels; the implementor applies any device pixel
//! ratio transform. [`Recorder`] captures commands so frames can be inspected
//! without a browser.

use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Rgba { rgb: [u8; 3], alpha: f32 },
    Hsla { hue: f32, sat: f32, light: f32, alpha: f32 },
    Transparent,
}

impl Paint {
    #[inline]
    pub fn rgba(rgb: [u8; 3], alpha: f32) -> Self {
        Paint::Rgba { rgb, alpha }
    }

    pub fn alpha(&self) -> f32 {
        match *self {
            Paint::Rgba { alpha, .. } | Paint::Hsla { alpha, .. } => alpha,
            Paint::Transparent => 0.0,
        }
    }

    pub fn to_css(&self) -> String {
        match *self {
            Paint::Rgba { rgb, alpha } => {
                format!("rgba({}, {}, {}, {})", rgb[0], rgb[1], rgb[2], alpha)
            }
            Paint::Hsla {
                hue,
                sat,
                light,
                alpha,
            } => format!("hsla({}, {}%, {}%, {})", hue, sat, light, alpha),
            Paint::Transparent => "transparent".to_string(),
        }
    }
}

pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint);
    /// Filled disc shaded from `inner` at the center to `outer` at `radius`.
    fn fill_radial(&mut self, center: Vec2, radius: f32, inner: Paint, outer: Paint);
}

/// Layout-reported size of a canvas and the backing store it needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub css_width: f32,
    pub css_height: f32,
    pub dpr: f32,
    pub backing_width: u32,
    pub backing_height: u32,
}

impl SurfaceSize {
    pub fn from_layout(css_width: f32, css_height: f32, device_pixel_ratio: f32) -> Self {
        let dpr = if device_pixel_ratio.is_finite() {
            device_pixel_ratio.clamp(1.0, MAX_DEVICE_PIXEL_RATIO)
        } else {
            1.0
        };
        let css_width = css_width.max(0.0);
        let css_height = css_height.max(0.0);
        Self {
            css_width,
            css_height,
            dpr,
            backing_width: (css_width * dpr).floor() as u32,
            backing_height: (css_height * dpr).floor() as u32,
        }
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.css_width * self.css_height
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        paint: Paint,
    },
    Radial {
        center: Vec2,
        radius: f32,
        inner: Paint,
        outer: Paint,
    },
}

#[derive(Default, Debug)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Paint)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Circle {
                center,
                radius,
                paint,
            } => Some((center, radius, paint)),
            _ => None,
        })
    }

    pub fn radials(&self) -> impl Iterator<Item = (Vec2, f32, Paint)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Radial {
                center,
                radius,
                inner,
                ..
            } => Some((center, radius, inner)),
            _ => None,
        })
    }
}

impl Surface for Recorder {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            paint,
        });
    }

    fn fill_radial(&mut self, center: Vec2, radius: f32, inner: Paint, outer: Paint) {
        self.commands.push(DrawCommand::Radial {
            center,
            radius,
            inner,
            outer,
        });
    }
}
