// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use portfolio_core::constants as core_constants;

#[test]
#[allow(clippy::assertions_on_constants)]
fn twinkle_modulation_spans_fifth_to_full() {
    assert!((core_constants::TWINKLE_FLOOR - core_constants::TWINKLE_DEPTH - 0.2).abs() < 1e-6);
    assert!((core_constants::TWINKLE_FLOOR + core_constants::TWINKLE_DEPTH - 1.0).abs() < 1e-6);
}

#[test]
fn layers_are_ordered_far_to_near() {
    let depths: Vec<f32> = core_constants::BASE_LAYERS.iter().map(|l| l.0).collect();
    assert!(depths.windows(2).all(|w| w[0] < w[1]));
    assert!(depths.iter().all(|d| *d > 0.0 && *d <= 1.0));
    // nearer layers drift and twinkle faster
    assert!(core_constants::BASE_LAYERS.windows(2).all(|w| w[0].1 < w[1].1 && w[0].2 < w[1].2));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn surface_constants_are_sane() {
    assert!(core_constants::MAX_DEVICE_PIXEL_RATIO >= 1.0);
    assert!(core_constants::STAR_WRAP_MARGIN > 0.0);
    assert!(core_constants::STAR_DENSITY_PX > 0.0);
    assert!(core_constants::FIREFLY_DENSITY_PX > core_constants::STAR_DENSITY_PX);
    assert!(core_constants::FRAME_STEP_MS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_timings_and_ids() {
    assert!(STATUS_CLEAR_MS > COPY_LABEL_RESET_MS);
    assert_eq!(EMAILJS_OK_STATUS, 200.0);
    for id in [STARS_CANVAS_ID, MIST_CANVAS_ID, CONTACT_FORM_ID, FORM_STATUS_ID, NAV_LIST_ID] {
        assert!(!id.is_empty() && !id.starts_with('#'));
    }
    assert!(CONTACT_EMAIL.contains('@'));
}
