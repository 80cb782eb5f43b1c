// Host-side tests for mood presets and cycling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod mood {
    include!("../src/core/mood.rs");
}

use mood::*;

#[test]
fn index_after_n_ticks_is_n_mod_preset_count() {
    for n in 0..23 {
        let mut cycler = MoodCycler::default();
        for _ in 0..n {
            cycler.advance();
        }
        assert_eq!(cycler.index(), n % MOOD_PRESETS.len(), "after {n} ticks");
    }
}

#[test]
fn first_preset_is_neon_genesis() {
    let cycler = MoodCycler::default();
    assert_eq!(cycler.index(), 0);
    assert_eq!(cycler.current().name, "NEON_GENESIS");
    assert_eq!(SceneMood::default(), SceneMood::from(&NEON_GENESIS));
}

#[test]
fn advance_into_applies_every_field_at_once() {
    let mut cycler = MoodCycler::default();
    let mut scene = SceneMood::default();
    let preset = cycler.advance_into(&mut scene);
    assert_eq!(preset.name, MOOD_PRESETS[1].name);
    assert_eq!(scene.accent_rgb, MOOD_PRESETS[1].accent_rgb);
    assert_eq!(scene.background_rgb, MOOD_PRESETS[1].background_rgb);
    assert_eq!(scene.distortion, MOOD_PRESETS[1].distortion);
    assert_eq!(scene.drone_hz, MOOD_PRESETS[1].drone_hz);
}

#[test]
fn full_cycle_returns_to_identical_start() {
    let mut cycler = MoodCycler::default();
    let mut scene = SceneMood::default();
    let start = scene;
    for _ in 0..MOOD_PRESETS.len() {
        cycler.advance_into(&mut scene);
    }
    assert_eq!(cycler.index(), 0);
    assert_eq!(*cycler.current(), NEON_GENESIS);
    assert_eq!(scene, start);
}

#[test]
fn two_calls_advance_twice() {
    let mut cycler = MoodCycler::default();
    cycler.advance();
    cycler.advance();
    assert_eq!(cycler.index(), 2);
}

#[test]
fn presets_are_distinct_and_in_range() {
    for (i, a) in MOOD_PRESETS.iter().enumerate() {
        for c in a.accent_rgb.iter().chain(a.background_rgb.iter()) {
            assert!((0.0..=1.0).contains(c), "{} has colour channel {c}", a.name);
        }
        assert!(a.distortion >= 0.0 && a.distortion <= 1.0);
        assert!(a.drone_hz > 20.0 && a.drone_hz < 200.0, "{} drone out of range", a.name);
        for b in MOOD_PRESETS.iter().skip(i + 1) {
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn single_preset_cycler_stays_put() {
    static ONLY: [MoodPreset; 1] = [NEON_GENESIS];
    let mut cycler = MoodCycler::new(&ONLY);
    cycler.advance();
    assert_eq!(cycler.index(), 0);
    assert_eq!(cycler.len(), 1);
}

#[test]
#[should_panic]
fn empty_preset_list_is_rejected() {
    static NONE: [MoodPreset; 0] = [];
    let _ = MoodCycler::new(&NONE);
}
