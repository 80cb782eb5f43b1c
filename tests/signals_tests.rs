// Host-side tests for input signals, sensor links and amplitude reduction.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod signals {
        include!("../src/core/signals.rs");
    }
}

use crate::core::config::*;
use crate::core::signals::*;
use glam::Vec2;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn amplitude_stays_in_unit_range_for_any_bytes() {
    let buffers: [Vec<u8>; 4] = [
        vec![0; 32],
        vec![255; 32],
        (0..32).map(|i| (i * 8) as u8).collect(),
        vec![255, 0, 128, 64],
    ];
    for buf in buffers.iter() {
        for mode in [AmplitudeReduction::FirstBin, AmplitudeReduction::Mean] {
            let a = reduce_amplitude(buf, mode);
            assert!((0.0..=1.0).contains(&a), "{a} out of range for {mode:?}");
        }
    }
    assert_eq!(reduce_amplitude(&[255; 32], AmplitudeReduction::Mean), 1.0);
    assert_eq!(reduce_amplitude(&[0; 32], AmplitudeReduction::Mean), 0.0);
}

#[test]
fn first_bin_and_mean_disagree_on_bass_heavy_input() {
    let mut bins = [0u8; 32];
    bins[0] = 255;
    assert_eq!(reduce_amplitude(&bins, AmplitudeReduction::FirstBin), 1.0);
    assert!(approx(
        reduce_amplitude(&bins, AmplitudeReduction::Mean),
        1.0 / 32.0
    ));
}

#[test]
fn empty_spectrum_reads_as_silence() {
    assert_eq!(reduce_amplitude(&[], AmplitudeReduction::FirstBin), 0.0);
    assert_eq!(reduce_amplitude(&[], AmplitudeReduction::Mean), 0.0);
}

#[test]
fn unlinked_audio_is_zero_and_linked_is_clamped() {
    let mut s = InputSignals::default();
    assert!(!s.audio.is_linked());
    assert_eq!(s.audio_amplitude(), 0.0);
    s.audio = Capability::Linked(0.4);
    assert!(approx(s.audio_amplitude(), 0.4));
    s.audio = Capability::Linked(3.0);
    assert_eq!(s.audio_amplitude(), 1.0);
}

#[test]
fn pointer_normalizes_to_signed_unit_square_with_y_up() {
    let p = normalize_pointer(0.0, 0.0, 800.0, 600.0);
    assert_eq!(p, Vec2::new(-1.0, 1.0));
    let p = normalize_pointer(800.0, 600.0, 800.0, 600.0);
    assert_eq!(p, Vec2::new(1.0, -1.0));
    let p = normalize_pointer(400.0, 300.0, 800.0, 600.0);
    assert!(approx(p.x, 0.0) && approx(p.y, 0.0));
    assert_eq!(normalize_pointer(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
}

#[test]
fn tilt_scales_degrees() {
    let t = tilt_from_degrees(45.0, -30.0);
    assert!(approx(t.x, 0.9));
    assert!(approx(t.y, -0.6));
}

#[test]
fn look_target_prefers_tilt_over_pointer() {
    let mut s = InputSignals::default();
    s.set_pointer_px(800.0, 0.0, 800.0, 600.0); // right edge, top
    let t = s.look_target(0.5);
    // pitch follows pointer y, yaw follows pointer x
    assert!(approx(t.x, 0.5));
    assert!(approx(t.y, 0.5));

    s.set_tilt_degrees(10.0, 20.0);
    assert!(s.tilt.is_linked());
    let t = s.look_target(0.5);
    assert!(approx(t.x, 0.2));
    assert!(approx(t.y, 0.4));
}

#[test]
fn link_state_runs_idle_pending_active() {
    let mut l = LinkState::default();
    assert_eq!(l, LinkState::Idle);
    assert!(l.begin_request());
    assert_eq!(l, LinkState::Pending);
    assert!(!l.begin_request(), "no second request while pending");
    l.resolve(true);
    assert!(l.is_active());
    assert!(!l.begin_request());
}

#[test]
fn denied_link_is_terminal() {
    let mut l = LinkState::default();
    l.begin_request();
    l.resolve(false);
    assert_eq!(l, LinkState::Denied);
    assert!(!l.begin_request());
    l.resolve(true);
    assert_eq!(l, LinkState::Denied);
}

#[test]
fn resolve_without_request_is_ignored() {
    let mut l = LinkState::Idle;
    l.resolve(true);
    assert_eq!(l, LinkState::Idle);
}

#[test]
fn smoothing_alpha_matches_per_call_factor_at_reference_rate() {
    let per_call = Smoothing::PerCall { factor: 0.05 };
    assert_eq!(per_call.alpha(1.0 / 60.0), 0.05);
    assert_eq!(per_call.alpha(1.0 / 30.0), 0.05);

    let corrected = Smoothing::FrameRateIndependent {
        factor: 0.05,
        reference_hz: 60.0,
    };
    assert!((corrected.alpha(1.0 / 60.0) - 0.05).abs() < 1e-4);
    assert!(corrected.alpha(1.0 / 30.0) > 0.05);
    assert!(corrected.alpha(1.0 / 144.0) < 0.05);
    assert_eq!(corrected.alpha(0.0), 0.0);
}
