// Host-side tests for frame stepping and theme gating.

use portfolio_core::*;

#[derive(Default)]
struct Counter {
    drawn: usize,
    last_theme: Option<Theme>,
}

impl Animate for Counter {
    fn resize(&mut self, _size: SurfaceSize, _theme: Theme) {}

    fn draw(&mut self, surface: &mut dyn Surface, input: &FrameInput) {
        surface.clear(1.0, 1.0);
        self.drawn += 1;
        self.last_theme = Some(input.theme);
    }
}

#[test]
fn loop_single_steps_until_stopped() {
    let mut frame_loop = FrameLoop::new(Counter::default());
    let mut rec = Recorder::new();
    let input = FrameInput::default();

    for _ in 0..3 {
        assert_eq!(frame_loop.step(&mut rec, &input), LoopControl::Continue);
    }
    assert_eq!(frame_loop.frames(), 3);
    assert_eq!(rec.commands.len(), 3);

    let token = frame_loop.token();
    token.stop();
    assert_eq!(frame_loop.step(&mut rec, &input), LoopControl::Stop);
    assert_eq!(frame_loop.animator.drawn, 3);
    assert_eq!(frame_loop.frames(), 3);
}

#[test]
fn rearm_resumes_a_stopped_loop() {
    let mut frame_loop = FrameLoop::new(Counter::default());
    let mut rec = Recorder::new();
    let old = frame_loop.token();
    old.stop();
    assert_eq!(frame_loop.step(&mut rec, &FrameInput::default()), LoopControl::Stop);

    let fresh = frame_loop.rearm();
    assert!(!fresh.is_stopped());
    assert!(old.is_stopped());
    assert_eq!(frame_loop.step(&mut rec, &FrameInput::default()), LoopControl::Continue);
    assert_eq!(frame_loop.animator.drawn, 1);
}

#[test]
fn input_snapshot_reaches_animator() {
    let mut frame_loop = FrameLoop::new(Counter::default());
    let mut rec = Recorder::new();
    let input = FrameInput {
        theme: Theme::Light,
        pointer: glam::Vec2::new(0.1, 0.9),
    };
    frame_loop.step(&mut rec, &input);
    assert_eq!(frame_loop.animator.last_theme, Some(Theme::Light));
}

#[test]
fn theme_gate_emits_only_real_transitions() {
    let mut gate = ThemeGate::new(Theme::Light);
    assert!(!gate.is_running());
    assert_eq!(gate.update(Theme::Dark), None);
    assert_eq!(gate.update(Theme::Light), Some(GateAction::Start));
    assert!(gate.is_running());
    assert_eq!(gate.update(Theme::Light), None);
    assert_eq!(gate.update(Theme::Dark), Some(GateAction::Stop));
    assert!(!gate.is_running());
    assert_eq!(gate.update(Theme::Dark), None);
}

#[test]
fn gated_mist_loop_matches_ticking_behavior() {
    // Starting and stopping on theme changes must draw exactly the frames the
    // light theme is active for.
    let mut mist = MistLayer::with_seed(1);
    mist.resize(SurfaceSize::from_layout(400.0, 300.0, 1.0), Theme::Light);
    let mut frame_loop = FrameLoop::new(mist);
    frame_loop.token().stop();
    let mut gate = ThemeGate::new(Theme::Light);
    let mut rec = Recorder::new();

    let themes = [Theme::Dark, Theme::Light, Theme::Light, Theme::Dark, Theme::Light];
    let mut running = false;
    for theme in themes {
        match gate.update(theme) {
            Some(GateAction::Start) => {
                frame_loop.rearm();
                running = true;
            }
            Some(GateAction::Stop) => {
                frame_loop.token().stop();
                running = false;
            }
            None => {}
        }
        let input = FrameInput {
            theme,
            ..FrameInput::default()
        };
        let control = frame_loop.step(&mut rec, &input);
        assert_eq!(control == LoopControl::Continue, running);
    }
    // three light frames drawn at 16 ms each
    assert_eq!(frame_loop.frames(), 3);
    assert_eq!(frame_loop.animator.clock_ms(), 48.0);
}
