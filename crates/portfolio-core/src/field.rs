//! Starfield: three parallax depth layers of drifting, twinkling stars over a
//! pair of static nebula glows.

use crate::constants::*;
use crate::frame::{Animate, FrameInput};
use crate::surface::{Paint, Surface, SurfaceSize};
use crate::theme::Theme;
use glam::Vec2;
use rand::prelude::*;
use rand::rngs::StdRng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

const STAR_COLOR: [u8; 3] = [255, 255, 255];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer {
    /// 0..1, nearer layers are larger and move more under parallax.
    pub depth: f32,
    pub twinkle_mul: f32,
    pub speed: f32,
}

impl Layer {
    pub fn base_layers() -> [Layer; 3] {
        BASE_LAYERS.map(|(depth, twinkle_mul, speed)| Layer {
            depth,
            twinkle_mul,
            speed,
        })
    }

    #[inline]
    pub fn boosted(self, boost: f32) -> Self {
        Self {
            depth: self.depth,
            twinkle_mul: self.twinkle_mul * boost,
            speed: self.speed * boost,
        }
    }

    #[inline]
    pub fn star_count(&self, base: usize) -> usize {
        (base as f32 * (LAYER_COUNT_BIAS + self.depth)).floor() as usize
    }
}

#[derive(Clone, Debug)]
pub struct Star {
    pub layer: usize,
    pub pos: Vec2,
    pub radius: f32,
    pub alpha: f32,
    pub twinkle_speed: f32,
    pub phase: f32,
    pub vel: Vec2,
}

impl Star {
    /// Base opacity modulated by the twinkle phase.
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.alpha * (TWINKLE_FLOOR + TWINKLE_DEPTH * self.phase.sin())
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Nebula {
    pub pos: Vec2,
    pub radius: f32,
    pub hue: f32,
    pub alpha: f32,
}

impl Nebula {
    pub fn paint(&self) -> Paint {
        Paint::Hsla {
            hue: self.hue,
            sat: NEBULA_SATURATION,
            light: NEBULA_LIGHTNESS,
            alpha: self.alpha,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub layers: [Layer; 3],
    pub density_px: f32,
    pub nebula_count: usize,
    pub wrap_margin: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            layers: Layer::base_layers(),
            density_px: STAR_DENSITY_PX,
            nebula_count: NEBULA_COUNT,
            wrap_margin: STAR_WRAP_MARGIN,
        }
    }
}

/// Wrap a coordinate to the opposite edge once it leaves `[-margin, extent + margin]`.
#[inline]
pub fn wrap_axis(v: f32, extent: f32, margin: f32) -> f32 {
    if v < -margin {
        extent + margin
    } else if v > extent + margin {
        -margin
    } else {
        v
    }
}

pub struct StarField {
    config: FieldConfig,
    width: f32,
    height: f32,
    layers: [Layer; 3],
    stars: Vec<Star>,
    nebulas: SmallVec<[Nebula; NEBULA_COUNT]>,
    rng: StdRng,
    clock_ms: f64,
}

impl StarField {
    pub fn new(config: FieldConfig, rng: StdRng) -> Self {
        let layers = config.layers;
        Self {
            config,
            width: 0.0,
            height: 0.0,
            layers,
            stars: Vec::new(),
            nebulas: SmallVec::new(),
            rng,
            clock_ms: 0.0,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(FieldConfig::default(), StdRng::seed_from_u64(seed))
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn nebulas(&self) -> &[Nebula] {
        &self.nebulas
    }

    pub fn layers(&self) -> &[Layer; 3] {
        &self.layers
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    pub fn init_scene(&mut self, theme: Theme) {
        self.stars.clear();
        self.nebulas.clear();

        // Rescale from the configured base every time, never cumulatively.
        let boost = theme.speed_boost();
        self.layers = self.config.layers.map(|l| l.boosted(boost));

        let (w, h) = (self.width, self.height);
        let base = (w * h / self.config.density_px).floor() as usize;
        for (li, layer) in self.layers.iter().enumerate() {
            let count = layer.star_count(base);
            self.stars.reserve(count);
            for _ in 0..count {
                let rng = &mut self.rng;
                self.stars.push(Star {
                    layer: li,
                    pos: Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h),
                    radius: (rng.gen::<f32>() * STAR_RADIUS_SPAN + STAR_RADIUS_MIN)
                        * (0.7 + 0.6 * layer.depth),
                    alpha: rng.gen::<f32>() * STAR_ALPHA_SPAN + STAR_ALPHA_MIN,
                    twinkle_speed: (rng.gen::<f32>() * STAR_TWINKLE_SPAN + STAR_TWINKLE_MIN)
                        * layer.twinkle_mul,
                    phase: rng.gen::<f32>() * TAU,
                    // per-axis uniform, not a uniform direction
                    vel: Vec2::new(
                        (rng.gen::<f32>() - 0.5) * layer.speed,
                        (rng.gen::<f32>() - 0.5) * layer.speed,
                    ),
                });
            }
        }

        for _ in 0..self.config.nebula_count {
            let rng = &mut self.rng;
            self.nebulas.push(Nebula {
                pos: Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h * 0.5),
                radius: rng.gen::<f32>() * NEBULA_RADIUS_SPAN + NEBULA_RADIUS_MIN,
                hue: NEBULA_HUE_MIN + rng.gen::<f32>() * NEBULA_HUE_SPAN,
                alpha: NEBULA_ALPHA_MIN + rng.gen::<f32>() * NEBULA_ALPHA_SPAN,
            });
        }

        log::debug!(
            "[field] init {}x{} theme={} stars={} nebulas={}",
            w,
            h,
            theme.as_str(),
            self.stars.len(),
            self.nebulas.len()
        );
    }

    /// Global parallax displacement for the current clock and pointer.
    pub fn parallax(&self, input: &FrameInput) -> Vec2 {
        let f = input.theme.parallax_intensity();
        let angle = (self.clock_ms * (PARALLAX_DRIFT_RATE * f) as f64) as f32;
        let drift = Vec2::new(angle.sin() * PARALLAX_DRIFT_X, angle.cos() * PARALLAX_DRIFT_Y);
        let pointer = (input.pointer - 0.5) * Vec2::new(PARALLAX_POINTER_X, PARALLAX_POINTER_Y);
        (drift + pointer) * f
    }

    fn draw_nebulas(&self, surface: &mut dyn Surface) {
        for n in &self.nebulas {
            surface.fill_radial(n.pos, n.radius, n.paint(), Paint::Transparent);
        }
    }
}

impl Animate for StarField {
    fn resize(&mut self, size: SurfaceSize, theme: Theme) {
        self.width = size.css_width;
        self.height = size.css_height;
        self.init_scene(theme);
    }

    fn draw(&mut self, surface: &mut dyn Surface, input: &FrameInput) {
        let (w, h) = (self.width, self.height);
        surface.clear(w, h);
        self.draw_nebulas(surface);

        let parallax = self.parallax(input);
        let margin = self.config.wrap_margin;
        for s in &mut self.stars {
            s.phase += s.twinkle_speed;
            let depth = self.layers[s.layer].depth;
            surface.fill_circle(
                s.pos + parallax * depth,
                s.radius,
                Paint::rgba(STAR_COLOR, s.opacity()),
            );
            s.pos += s.vel;
            s.pos.x = wrap_axis(s.pos.x, w, margin);
            s.pos.y = wrap_axis(s.pos.y, h, margin);
        }

        self.clock_ms += FRAME_STEP_MS as f64;
    }
}
