//! Two-state page theme.
//!
//! The body element carries the `light` class when the light theme is active;
//! its absence means dark. The choice is persisted under [`THEME_STORAGE_KEY`].

pub const THEME_STORAGE_KEY: &str = "theme";
pub const LIGHT_BODY_CLASS: &str = "light";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Anything other than a stored `"light"` falls back to dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    #[inline]
    pub fn from_light_flag(light: bool) -> Self {
        if light {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    #[inline]
    pub fn is_light(self) -> bool {
        self == Theme::Light
    }

    /// Multiplier applied to layer drift and twinkle speeds at scene init.
    pub fn speed_boost(self) -> f32 {
        match self {
            Theme::Dark => 1.35,
            Theme::Light => 1.0,
        }
    }

    /// Scales both the periodic and the pointer-driven parallax terms.
    pub fn parallax_intensity(self) -> f32 {
        match self {
            Theme::Dark => 1.4,
            Theme::Light => 0.9,
        }
    }
}
