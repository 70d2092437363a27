//! Frame stepping for the animated layers.
//!
//! The browser drives frames through `requestAnimationFrame`; everything here
//! is scheduler-agnostic so a host test can step frames one at a time.

use crate::surface::{Surface, SurfaceSize};
use crate::theme::Theme;
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

/// Snapshot of the external inputs read during one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    pub theme: Theme,
    /// Pointer position normalized to \[0, 1\] on both axes.
    pub pointer: Vec2,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            pointer: Vec2::splat(0.5),
        }
    }
}

pub trait Animate {
    /// Adopt a new layout size. Populations are regenerated, not carried over.
    fn resize(&mut self, size: SurfaceSize, theme: Theme);
    fn draw(&mut self, surface: &mut dyn Surface, input: &FrameInput);
}

/// Shared cancel flag for a running loop.
#[derive(Clone, Debug, Default)]
pub struct StopToken(Rc<Cell<bool>>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn stop(&self) {
        self.0.set(true);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

pub struct FrameLoop<A> {
    pub animator: A,
    token: StopToken,
    frames: u64,
}

impl<A: Animate> FrameLoop<A> {
    pub fn new(animator: A) -> Self {
        Self {
            animator,
            token: StopToken::new(),
            frames: 0,
        }
    }

    pub fn token(&self) -> StopToken {
        self.token.clone()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draw one frame unless the loop was stopped. The caller reschedules on
    /// [`LoopControl::Continue`].
    pub fn step(&mut self, surface: &mut dyn Surface, input: &FrameInput) -> LoopControl {
        if self.token.is_stopped() {
            return LoopControl::Stop;
        }
        self.animator.draw(surface, input);
        self.frames += 1;
        LoopControl::Continue
    }

    /// Swap in a fresh token so a stopped loop can be scheduled again.
    pub fn rearm(&mut self) -> StopToken {
        self.token = StopToken::new();
        self.token.clone()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateAction {
    Start,
    Stop,
}

/// Tracks whether a theme-specific loop should be running.
#[derive(Clone, Copy, Debug)]
pub struct ThemeGate {
    active_for: Theme,
    running: bool,
}

impl ThemeGate {
    pub fn new(active_for: Theme) -> Self {
        Self {
            active_for,
            running: false,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the transition to perform for `theme`, if any.
    pub fn update(&mut self, theme: Theme) -> Option<GateAction> {
        let want = theme == self.active_for;
        match (self.running, want) {
            (false, true) => {
                self.running = true;
                Some(GateAction::Start)
            }
            (true, false) => {
                self.running = false;
                Some(GateAction::Stop)
            }
            _ => None,
        }
    }
}
