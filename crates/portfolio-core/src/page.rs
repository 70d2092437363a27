//! Pure math behind the page's DOM handlers.

use crate::constants::*;
use glam::Vec2;

/// Relative paths probed, in order, for an optional profile photo.
pub const PROFILE_IMAGE_CANDIDATES: [&str; 4] = [
    "assets/img/profile.jpg",
    "assets/img/profile.png",
    "assets/img/photo.jpg",
    "assets/img/photo.png",
];

/// Existence probes only make sense over HTTP; `file://` pages skip them.
#[inline]
pub fn is_http_protocol(protocol: &str) -> bool {
    matches!(protocol, "http:" | "https:")
}

/// Client coordinates to \[0, 1\] viewport coordinates.
pub fn normalize_pointer(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> Vec2 {
    Vec2::new(
        (client_x / viewport_w.max(1.0)).clamp(0.0, 1.0),
        (client_y / viewport_h.max(1.0)).clamp(0.0, 1.0),
    )
}

/// Index of the last section whose document top has been scrolled past,
/// accounting for the sticky header.
pub fn active_section(scroll_y: f64, section_tops: &[f64]) -> Option<usize> {
    let probe = scroll_y + HEADER_SCROLL_OFFSET;
    section_tops
        .iter()
        .enumerate()
        .filter(|(_, top)| probe >= **top)
        .map(|(i, _)| i)
        .last()
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
}

impl Tilt {
    /// Tilt for a pointer at `(x, y)` relative to an element's box.
    pub fn from_pointer(x: f32, y: f32, rect_width: f32, rect_height: f32) -> Self {
        if rect_width <= 0.0 || rect_height <= 0.0 {
            return Self::default();
        }
        let px = x / rect_width;
        let py = y / rect_height;
        Self {
            rotate_x_deg: (py - 0.5) * -TILT_STRENGTH_DEG,
            rotate_y_deg: (px - 0.5) * TILT_STRENGTH_DEG,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg)",
            TILT_PERSPECTIVE_PX, self.rotate_x_deg, self.rotate_y_deg
        )
    }

    pub fn reset_css() -> String {
        format!("perspective({}px) rotateX(0) rotateY(0)", TILT_PERSPECTIVE_PX)
    }
}

/// Background offset (px) of the light theme's forest backdrop.
pub fn forest_offset(scroll_y: f32, pointer: Vec2) -> Vec2 {
    let mx = (pointer.x - 0.5) * FOREST_SWAY_X;
    let my = (pointer.y - 0.5) * FOREST_SWAY_Y;
    Vec2::new(mx, -scroll_y * FOREST_SCROLL_STRENGTH + my)
}

pub fn forest_background_position(scroll_y: f32, pointer: Vec2) -> String {
    let o = forest_offset(scroll_y, pointer);
    format!("calc(50% + {}px) calc(50% + {}px)", o.x, o.y)
}
