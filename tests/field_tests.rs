// Host-side tests for the starfield renderer.

use glam::Vec2;
use portfolio_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const EPS: f32 = 1e-4;

fn field_at(w: f32, h: f32, theme: Theme, seed: u64) -> StarField {
    let mut field = StarField::with_seed(seed);
    field.resize(SurfaceSize::from_layout(w, h, 1.0), theme);
    field
}

fn per_layer_counts(field: &StarField) -> [usize; 3] {
    let mut counts = [0usize; 3];
    for s in field.stars() {
        counts[s.layer] += 1;
    }
    counts
}

#[test]
fn dark_800x600_scene_has_expected_layer_counts() {
    let field = field_at(800.0, 600.0, Theme::Dark, 7);
    // base = floor(480000 / 5500) = 87; count = floor(87 * (0.6 + depth))
    assert_eq!(per_layer_counts(&field), [73, 104, 139]);
    assert_eq!(field.stars().len(), 316);
    assert_eq!(field.nebulas().len(), 2);
}

#[test]
fn star_count_scales_with_area() {
    let small = field_at(400.0, 300.0, Theme::Dark, 1);
    let large = field_at(1600.0, 1200.0, Theme::Dark, 1);
    let ratio = large.stars().len() as f32 / small.stars().len() as f32;
    // floors make the ratio a little noisy around 16
    assert!(ratio > 15.0 && ratio < 18.0, "ratio {ratio}");

    let tiny = field_at(10.0, 10.0, Theme::Dark, 1);
    assert!(tiny.stars().is_empty());
}

#[test]
fn initial_positions_lie_inside_surface() {
    for (w, h) in [(800.0, 600.0), (321.0, 1234.0), (1920.0, 1080.0)] {
        let field = field_at(w, h, Theme::Light, 99);
        for s in field.stars() {
            assert!(s.pos.x >= 0.0 && s.pos.x < w, "x {} outside {}", s.pos.x, w);
            assert!(s.pos.y >= 0.0 && s.pos.y < h, "y {} outside {}", s.pos.y, h);
            assert!(s.alpha >= 0.2 && s.alpha <= 0.8);
            assert!(s.radius > 0.0);
        }
    }
}

#[test]
fn nebulas_sit_in_upper_half_with_bounded_style() {
    let field = field_at(1000.0, 800.0, Theme::Dark, 3);
    for n in field.nebulas() {
        assert!(n.pos.y >= 0.0 && n.pos.y < 400.0);
        assert!(n.radius >= 220.0 && n.radius <= 520.0);
        assert!(n.hue >= 200.0 && n.hue <= 280.0);
        assert!(n.alpha >= 0.12 && n.alpha <= 0.2 + EPS);
    }
}

#[test]
fn velocity_is_bounded_per_axis_by_layer_speed() {
    let field = field_at(800.0, 600.0, Theme::Dark, 11);
    for s in field.stars() {
        let speed = field.layers()[s.layer].speed;
        assert!(s.vel.x.abs() <= speed * 0.5 + EPS);
        assert!(s.vel.y.abs() <= speed * 0.5 + EPS);
    }
}

#[test]
fn rendered_opacity_stays_within_twinkle_bounds() {
    let mut field = field_at(600.0, 400.0, Theme::Dark, 5);
    let mut rec = Recorder::new();
    let input = FrameInput::default();
    for _ in 0..200 {
        let before: Vec<f32> = field.stars().iter().map(|s| s.alpha).collect();
        field.draw(&mut rec, &input);
        let alphas: Vec<f32> = rec.circles().map(|(_, _, p)| p.alpha()).collect();
        assert_eq!(alphas.len(), before.len());
        for (rendered, base) in alphas.iter().zip(&before) {
            assert!(*rendered >= base * 0.2 - EPS && *rendered <= base + EPS);
            assert!((0.0..=1.0).contains(rendered));
        }
        rec.take();
    }
}

#[test]
fn positions_stay_within_wrap_margin_across_many_frames() {
    // Small surface so drifting stars actually cross the edges.
    let (w, h) = (40.0, 30.0);
    let config = FieldConfig {
        density_px: 4.0,
        ..FieldConfig::default()
    };
    let mut field = StarField::new(config, StdRng::seed_from_u64(21));
    field.resize(SurfaceSize::from_layout(w, h, 1.0), Theme::Dark);
    assert!(!field.stars().is_empty());

    let mut rec = Recorder::new();
    let input = FrameInput::default();
    for _ in 0..3000 {
        field.draw(&mut rec, &input);
        rec.take();
        for s in field.stars() {
            assert!(s.pos.x >= -2.0 && s.pos.x <= w + 2.0);
            assert!(s.pos.y >= -2.0 && s.pos.y <= h + 2.0);
        }
    }
}

#[test]
fn wrap_axis_jumps_to_opposite_edge() {
    assert_eq!(wrap_axis(52.5, 50.0, 2.0), -2.0);
    assert_eq!(wrap_axis(-2.1, 50.0, 2.0), 52.0);
    assert_eq!(wrap_axis(52.0, 50.0, 2.0), 52.0);
    assert_eq!(wrap_axis(-2.0, 50.0, 2.0), -2.0);
    assert_eq!(wrap_axis(25.0, 50.0, 2.0), 25.0);
}

#[test]
fn resize_with_same_size_regenerates_same_count() {
    let mut field = field_at(800.0, 600.0, Theme::Dark, 8);
    let first_count = field.stars().len();
    let first_pos = field.stars()[0].pos;

    field.resize(SurfaceSize::from_layout(800.0, 600.0, 1.0), Theme::Dark);
    assert_eq!(field.stars().len(), first_count);
    assert_ne!(field.stars()[0].pos, first_pos);
}

#[test]
fn same_seed_gives_identical_scene() {
    let a = field_at(640.0, 480.0, Theme::Dark, 42);
    let b = field_at(640.0, 480.0, Theme::Dark, 42);
    assert_eq!(a.stars().len(), b.stars().len());
    for (sa, sb) in a.stars().iter().zip(b.stars()) {
        assert_eq!(sa.pos, sb.pos);
        assert_eq!(sa.vel, sb.vel);
    }
}

#[test]
fn layer_boost_is_rescaled_from_base_not_accumulated() {
    let mut field = field_at(800.0, 600.0, Theme::Dark, 2);
    field.init_scene(Theme::Dark);
    field.init_scene(Theme::Dark);
    let base = Layer::base_layers();
    for (l, b) in field.layers().iter().zip(base.iter()) {
        assert!((l.speed - b.speed * 1.35).abs() < EPS);
        assert!((l.twinkle_mul - b.twinkle_mul * 1.35).abs() < EPS);
        assert_eq!(l.depth, b.depth);
    }

    field.init_scene(Theme::Light);
    assert_eq!(field.layers(), &base);
}

#[test]
fn theme_switch_does_not_touch_running_population() {
    let mut field = field_at(800.0, 600.0, Theme::Dark, 4);
    let vels: Vec<Vec2> = field.stars().iter().map(|s| s.vel).collect();
    let twinkles: Vec<f32> = field.stars().iter().map(|s| s.twinkle_speed).collect();
    let layers = *field.layers();

    let light = FrameInput {
        theme: Theme::Light,
        ..FrameInput::default()
    };
    let mut rec = Recorder::new();
    for _ in 0..10 {
        field.draw(&mut rec, &light);
    }
    assert_eq!(field.layers(), &layers);
    for ((s, v), t) in field.stars().iter().zip(&vels).zip(&twinkles) {
        assert_eq!(s.vel, *v);
        assert_eq!(s.twinkle_speed, *t);
    }

    field.resize(SurfaceSize::from_layout(800.0, 600.0, 1.0), Theme::Light);
    assert_eq!(field.layers(), &Layer::base_layers());
}

#[test]
fn frame_clears_then_draws_nebulas_then_stars() {
    let mut field = field_at(800.0, 600.0, Theme::Dark, 6);
    let mut rec = Recorder::new();
    field.draw(&mut rec, &FrameInput::default());

    assert_eq!(
        rec.commands[0],
        DrawCommand::Clear {
            width: 800.0,
            height: 600.0
        }
    );
    assert!(matches!(rec.commands[1], DrawCommand::Radial { outer: Paint::Transparent, .. }));
    assert!(matches!(rec.commands[2], DrawCommand::Radial { .. }));
    assert_eq!(rec.circles().count(), field.stars().len());
    assert_eq!(field.clock_ms(), 16.0);
}

#[test]
fn parallax_offsets_stars_by_layer_depth() {
    let mut field = field_at(800.0, 600.0, Theme::Dark, 12);
    let before: Vec<(usize, Vec2)> = field.stars().iter().map(|s| (s.layer, s.pos)).collect();

    // clock 0, centered pointer: drift term only, (sin 0, cos 0) = (0, 1)
    let input = FrameInput::default();
    let p = field.parallax(&input);
    assert!(p.x.abs() < EPS);
    assert!((p.y - 14.0).abs() < EPS);

    let mut rec = Recorder::new();
    field.draw(&mut rec, &input);
    for ((layer, pos), (center, _, _)) in before.iter().zip(rec.circles()) {
        let depth = field.layers()[*layer].depth;
        let expected = *pos + p * depth;
        assert!((center - expected).length() < EPS);
    }
}

#[test]
fn pointer_parallax_is_stronger_in_dark_theme() {
    let field = field_at(800.0, 600.0, Theme::Dark, 1);
    let corner = Vec2::new(1.0, 1.0);
    let dark = field.parallax(&FrameInput {
        theme: Theme::Dark,
        pointer: corner,
    });
    let light = field.parallax(&FrameInput {
        theme: Theme::Light,
        pointer: corner,
    });
    // (0.5 * 24 * f, 10 f + 0.5 * 14 * f)
    assert!((dark.x - 12.0 * 1.4).abs() < EPS);
    assert!((light.x - 12.0 * 0.9).abs() < EPS);
    assert!((dark.y - 17.0 * 1.4).abs() < EPS);
}
