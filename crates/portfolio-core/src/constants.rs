// Shared tuning constants for the sky background and page glue.

// Surface
pub const MAX_DEVICE_PIXEL_RATIO: f32 = 2.0;
pub const FRAME_STEP_MS: f32 = 16.0; // clock advance per drawn frame

// Starfield population
pub const STAR_DENSITY_PX: f32 = 5500.0; // surface px^2 per base star
pub const LAYER_COUNT_BIAS: f32 = 0.6; // count = base * (bias + depth)
pub const STAR_WRAP_MARGIN: f32 = 2.0;

/// Base depth layers as `(depth, twinkle multiplier, drift speed)`.
pub const BASE_LAYERS: [(f32, f32, f32); 3] = [
    (0.25, 1.0, 0.012),
    (0.6, 1.4, 0.022),
    (1.0, 1.8, 0.035),
];

// Star shape
pub const STAR_RADIUS_MIN: f32 = 0.2;
pub const STAR_RADIUS_SPAN: f32 = 1.2;
pub const STAR_ALPHA_MIN: f32 = 0.2;
pub const STAR_ALPHA_SPAN: f32 = 0.6;
pub const STAR_TWINKLE_MIN: f32 = 0.005;
pub const STAR_TWINKLE_SPAN: f32 = 0.02;
pub const TWINKLE_FLOOR: f32 = 0.6; // opacity = alpha * (floor + depth * sin)
pub const TWINKLE_DEPTH: f32 = 0.4;

// Nebula glows
pub const NEBULA_COUNT: usize = 2;
pub const NEBULA_RADIUS_MIN: f32 = 220.0;
pub const NEBULA_RADIUS_SPAN: f32 = 300.0;
pub const NEBULA_HUE_MIN: f32 = 200.0;
pub const NEBULA_HUE_SPAN: f32 = 80.0;
pub const NEBULA_ALPHA_MIN: f32 = 0.12;
pub const NEBULA_ALPHA_SPAN: f32 = 0.08;
pub const NEBULA_SATURATION: f32 = 80.0;
pub const NEBULA_LIGHTNESS: f32 = 60.0;

// Parallax (pixels, before theme intensity)
pub const PARALLAX_DRIFT_RATE: f32 = 0.00045; // radians per ms
pub const PARALLAX_DRIFT_X: f32 = 18.0;
pub const PARALLAX_DRIFT_Y: f32 = 10.0;
pub const PARALLAX_POINTER_X: f32 = 24.0;
pub const PARALLAX_POINTER_Y: f32 = 14.0;

// Mist layer
pub const FOG_BLOB_COUNT: usize = 10;
pub const FOG_PHASE_RATE: f32 = 0.0002;
pub const FOG_ALPHA_BASE: f32 = 0.08;
pub const FOG_ALPHA_SWING: f32 = 0.025;
pub const FIREFLY_MIN_COUNT: usize = 12;
pub const FIREFLY_DENSITY_PX: f32 = 60000.0;
pub const FIREFLY_PHASE_STEP: f32 = 0.02;
pub const FIREFLY_GLOW_RADIUS: f32 = 18.0;
pub const FIREFLY_DRIFT_X: f32 = 0.3;
pub const FIREFLY_DRIFT_Y: f32 = 0.2;
pub const FIREFLY_COLOR: [u8; 3] = [255, 255, 200];

// Page glue
pub const HEADER_SCROLL_OFFSET: f64 = 120.0; // sticky header height
pub const TILT_STRENGTH_DEG: f32 = 10.0;
pub const TILT_PERSPECTIVE_PX: f32 = 700.0;
pub const FOREST_SCROLL_STRENGTH: f32 = 0.15;
pub const FOREST_SWAY_X: f32 = 10.0;
pub const FOREST_SWAY_Y: f32 = 6.0;
