// Host-side tests for tuning constants and configuration defaults.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod config {
        include!("../src/core/config.rs");
    }
}

use constants::*;
use crate::core::config::*;
use std::time::Duration;

#[test]
#[allow(clippy::assertions_on_constants)]
fn analyser_resolution_is_32_bins() {
    assert!(ANALYSER_FFT_SIZE.is_power_of_two());
    assert_eq!(ANALYSER_FFT_SIZE / 2, 32);
    assert!((0.0..1.0).contains(&ANALYSER_SMOOTHING));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_and_audio_constants_are_within_reasonable_bounds() {
    assert_eq!(MAX_PIXEL_RATIO, 2.0);
    assert_eq!(LOADER_HIDE_MS, 800);
    assert!(DRONE_GAIN > 0.0 && DRONE_GAIN < 0.2, "drone should sit under the mix");
    assert!(DRONE_FADE_IN_SEC > 0.0);
    assert!(FOG_DENSITY > 0.0 && FOG_DENSITY < 0.1);
    assert!(BLOOM_THRESHOLD >= 0.0 && BLOOM_THRESHOLD < 1.0);
}

#[test]
fn palette_channels_are_normalized() {
    for c in SECONDARY_RGB.iter().chain(DIM_RGB.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
}

#[test]
fn config_defaults_match_observed_behaviour() {
    let cfg = ShowcaseConfig::default();
    assert_eq!(cfg.mood_period, Duration::from_secs(15));
    assert_eq!(cfg.drone_ramp, Duration::from_secs(2));
    assert_eq!(cfg.lite_fps_threshold, 25);
    assert_eq!(cfg.warmup_windows, 5);
    assert_eq!(cfg.bloom_base, 1.2);
    assert_eq!(cfg.bloom_audio_gain, 2.0);
    assert_eq!(cfg.pointer_look_scale, 0.5);
    assert_eq!(cfg.amplitude, AmplitudeReduction::Mean);
    assert!(cfg.camera_linked_z < cfg.camera_start_z);
}

#[test]
fn per_call_config_only_changes_smoothing() {
    let legacy = ShowcaseConfig::per_call();
    let default = ShowcaseConfig::default();
    assert_eq!(legacy.smoothing, Smoothing::PerCall { factor: 0.05 });
    assert_eq!(legacy.mood_period, default.mood_period);
    assert_eq!(legacy.amplitude, default.amplitude);
}
