//! Light-theme ambience: slowly drifting fog blobs and fireflies in the lower
//! half of the surface.

use crate::constants::*;
use crate::frame::{Animate, FrameInput};
use crate::surface::{Paint, Surface, SurfaceSize};
use crate::theme::Theme;
use glam::Vec2;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::f32::consts::TAU;

const FOG_COLOR: [u8; 3] = [255, 255, 255];

#[derive(Clone, Debug)]
pub struct Firefly {
    pub pos: Vec2,
    /// Constant per-frame drift added on top of the sinusoidal wander.
    pub drift: Vec2,
    pub phase: f32,
}

impl Firefly {
    pub fn step(&mut self, width: f32, height: f32) {
        self.phase += FIREFLY_PHASE_STEP;
        self.pos.x += self.phase.sin() * 0.4 + self.drift.x;
        self.pos.y += (self.phase * 1.3).cos() * 0.3 + self.drift.y;
        if self.pos.x < 0.0 {
            self.pos.x = width;
        }
        if self.pos.x > width {
            self.pos.x = 0.0;
        }
        self.pos.y = self.pos.y.clamp(height * 0.5, height.max(0.0));
    }

    /// Pulse intensity in \[0.3, 1.0\].
    #[inline]
    pub fn intensity(&self) -> f32 {
        0.3 + 0.7 * (0.5 + 0.5 * (self.phase * 2.0).sin())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FogBlob {
    pub center: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

/// Fog blob `index` at clock `t_ms` for a `width` x `height` surface.
pub fn fog_blob(index: usize, t_ms: f64, width: f32, height: f32) -> FogBlob {
    let i = index as f32;
    let phase = (t_ms * FOG_PHASE_RATE as f64) as f32 + i * 0.6;
    FogBlob {
        center: Vec2::new(
            (phase.sin() * 0.25 + 0.5) * width,
            height * 0.5 + ((phase * 0.9 + i * 0.5).cos() * 0.2 + 0.15) * height,
        ),
        radius: width.max(height) * (0.15 + i * 0.03 + (phase * 0.7).sin() * 0.02),
        alpha: FOG_ALPHA_BASE + (phase * 1.2).sin() * FOG_ALPHA_SWING,
    }
}

#[derive(Clone, Debug)]
pub struct MistConfig {
    pub blob_count: usize,
    pub firefly_min: usize,
    pub firefly_density_px: f32,
}

impl Default for MistConfig {
    fn default() -> Self {
        Self {
            blob_count: FOG_BLOB_COUNT,
            firefly_min: FIREFLY_MIN_COUNT,
            firefly_density_px: FIREFLY_DENSITY_PX,
        }
    }
}

impl MistConfig {
    #[inline]
    pub fn firefly_count(&self, width: f32, height: f32) -> usize {
        self.firefly_min
            .max((width * height / self.firefly_density_px).floor() as usize)
    }
}

pub struct MistLayer {
    config: MistConfig,
    width: f32,
    height: f32,
    fireflies: Vec<Firefly>,
    rng: StdRng,
    clock_ms: f64,
}

impl MistLayer {
    pub fn new(config: MistConfig, rng: StdRng) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            fireflies: Vec::new(),
            rng,
            clock_ms: 0.0,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(MistConfig::default(), StdRng::seed_from_u64(seed))
    }

    pub fn fireflies(&self) -> &[Firefly] {
        &self.fireflies
    }

    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    pub fn init_fireflies(&mut self) {
        let (w, h) = (self.width, self.height);
        let count = self.config.firefly_count(w, h);
        let rng = &mut self.rng;
        self.fireflies = (0..count)
            .map(|_| Firefly {
                pos: Vec2::new(rng.gen::<f32>() * w, h * 0.5 + rng.gen::<f32>() * h * 0.5),
                drift: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * FIREFLY_DRIFT_X,
                    (rng.gen::<f32>() - 0.5) * FIREFLY_DRIFT_Y,
                ),
                phase: rng.gen::<f32>() * TAU,
            })
            .collect();
        log::debug!("[mist] init {}x{} fireflies={}", w, h, count);
    }

    fn draw_fog(&self, surface: &mut dyn Surface) {
        for i in 0..self.config.blob_count {
            let blob = fog_blob(i, self.clock_ms, self.width, self.height);
            surface.fill_radial(
                blob.center,
                blob.radius,
                Paint::rgba(FOG_COLOR, blob.alpha),
                Paint::rgba(FOG_COLOR, 0.0),
            );
        }
    }
}

impl Animate for MistLayer {
    fn resize(&mut self, size: SurfaceSize, _theme: Theme) {
        self.width = size.css_width;
        self.height = size.css_height;
        self.init_fireflies();
    }

    fn draw(&mut self, surface: &mut dyn Surface, input: &FrameInput) {
        if !input.theme.is_light() {
            return;
        }
        let (w, h) = (self.width, self.height);
        surface.clear(w, h);
        self.draw_fog(surface);
        for f in &mut self.fireflies {
            f.step(w, h);
            surface.fill_radial(
                f.pos,
                FIREFLY_GLOW_RADIUS,
                Paint::rgba(FIREFLY_COLOR, 0.6 * f.intensity()),
                Paint::rgba(FIREFLY_COLOR, 0.0),
            );
        }
        self.clock_ms += FRAME_STEP_MS as f64;
    }
}
