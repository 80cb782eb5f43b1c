// Host-side tests for the frame driver, camera smoothing and scene layout.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod driver {
        include!("../src/core/driver.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
    pub mod monitor {
        include!("../src/core/monitor.rs");
    }
    pub mod mood {
        include!("../src/core/mood.rs");
    }
    pub mod signals {
        include!("../src/core/signals.rs");
    }
}

use crate::core::camera::*;
use crate::core::config::*;
use crate::core::driver::*;
use crate::core::layout::*;
use crate::core::monitor::PerfMode;
use crate::core::mood::*;
use glam::{Vec2, Vec3};

const DT_60: f32 = 1.0 / 60.0;

#[test]
fn per_call_smoothing_converges_monotonically_within_90_steps() {
    let alpha = Smoothing::PerCall { factor: 0.05 }.alpha(DT_60);
    let target = 1.0_f32;
    let mut v = 0.0_f32;
    let mut prev = v;
    for i in 0..90 {
        v = relax(v, target, alpha);
        assert!(v > prev, "not increasing at step {i}");
        assert!(v <= target);
        prev = v;
    }
    assert!((target - v).abs() < 0.01 * target, "v={v} after 90 steps");
}

#[test]
fn frame_rate_independent_smoothing_agrees_across_refresh_rates() {
    let smoothing = Smoothing::FrameRateIndependent {
        factor: 0.05,
        reference_hz: 60.0,
    };
    let settle = |hz: u32| {
        let mut cam = SmoothedCamera::new(15.0);
        for _ in 0..(hz * 3 / 2) {
            cam.step(Vec2::new(1.0, -1.0), smoothing, 1.0 / hz as f32);
        }
        cam.rotation
    };
    let at60 = settle(60);
    for hz in [30, 144] {
        let r = settle(hz);
        assert!((r - at60).length() < 1e-3, "{hz} Hz gave {r:?}, 60 Hz gave {at60:?}");
    }
}

#[test]
fn idle_start_has_zero_look_target_and_base_bloom() {
    let mut showcase = Showcase::default();
    let frame = showcase.frame(DT_60);
    assert_eq!(frame.look_target, Vec2::ZERO);
    assert_eq!(frame.camera_rotation, Vec2::ZERO);
    assert_eq!(frame.audio_pulse, 0.0);
    assert_eq!(frame.bloom_strength, showcase.config.bloom_base);
    assert_eq!(frame.passes, PostPasses::for_mode(PerfMode::Normal));
    assert_eq!(frame.mood, SceneMood::from(&NEON_GENESIS));
}

#[test]
fn loud_audio_raises_bloom_by_twice_the_amplitude() {
    let mut showcase = Showcase::default();
    showcase.sample_audio(&[255; 32]);
    let frame = showcase.frame(DT_60);
    assert_eq!(frame.audio_pulse, 1.0);
    assert!((frame.bloom_strength - (1.2 + 2.0)).abs() < 1e-5);
    assert!(frame.chromatic_shift > CHROMA_BASE);
}

#[test]
fn pointer_drives_camera_rotation_gradually() {
    let mut showcase = Showcase::new(ShowcaseConfig::per_call());
    showcase.signals.set_pointer_px(800.0, 0.0, 800.0, 600.0);
    let first = showcase.frame(DT_60);
    assert_eq!(first.look_target, Vec2::new(0.5, 0.5));
    // One call moves 5% of the way, then the camera scale applies.
    assert!((first.camera_rotation.x - 0.5 * 0.05 * 0.2).abs() < 1e-6);
    for _ in 0..400 {
        showcase.frame(DT_60);
    }
    let settled = showcase.frame(DT_60);
    assert!((settled.camera_rotation - Vec2::new(0.1, 0.1)).length() < 1e-3);
}

#[test]
fn engage_dollies_camera_toward_linked_distance() {
    let mut showcase = Showcase::default();
    assert_eq!(showcase.frame(DT_60).camera_eye, Vec3::new(0.0, CAMERA_EYE_Y, 15.0));
    showcase.engage();
    let mut last = 15.0;
    for _ in 0..300 {
        let z = showcase.frame(DT_60).camera_eye.z;
        assert!(z <= last);
        last = z;
    }
    assert!((10.0..10.01).contains(&last), "z={last}");
}

#[test]
fn four_mood_cycles_return_to_neon_genesis() {
    let mut showcase = Showcase::default();
    let start = showcase.mood;
    let names: Vec<&str> = (0..4).map(|_| showcase.cycle_mood().name).collect();
    assert_eq!(names.last(), Some(&"NEON_GENESIS"));
    assert_eq!(showcase.cycler.index(), 0);
    assert_eq!(showcase.mood, start);
    assert_eq!(showcase.frame(DT_60).mood, start);
}

#[test]
fn mood_change_reaches_the_next_frame_whole() {
    let mut showcase = Showcase::default();
    let preset = *showcase.cycle_mood();
    let frame = showcase.frame(DT_60);
    assert_eq!(frame.mood, SceneMood::from(&preset));
}

#[test]
fn lite_mode_disables_bloom_and_chromatic_passes() {
    let mut showcase = Showcase::default();
    for _ in 0..6 {
        showcase.monitor.observe_fps(12);
    }
    assert_eq!(showcase.perf_mode(), PerfMode::Lite);
    let frame = showcase.frame(DT_60);
    assert!(!frame.passes.bloom);
    assert!(!frame.passes.chromatic);
}

#[test]
fn frame_reports_fps_once_per_second() {
    let mut showcase = Showcase::default();
    let reports: Vec<_> = (0..16)
        .filter_map(|_| showcase.frame(0.125).fps_report)
        .collect();
    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.fps == 8 && !r.entered_lite));
}

#[test]
fn long_frames_clamp_motion_but_not_the_fps_count() {
    let mut showcase = Showcase::default();
    assert!(showcase.frame(0.4).fps_report.is_none());
    assert!(showcase.frame(0.4).fps_report.is_none());
    let frame = showcase.frame(0.4);
    assert!((frame.elapsed_sec - 0.75).abs() < 1e-6);
    assert_eq!(frame.fps_report.map(|r| r.fps), Some(3));
}

#[test]
fn grid_scroll_wraps_every_ten_units() {
    let mut showcase = Showcase::default();
    let mut frame = showcase.frame(0.25);
    for _ in 0..23 {
        frame = showcase.frame(0.25);
    }
    assert!((frame.elapsed_sec - 6.0).abs() < 1e-5);
    let z = frame.groups[InstanceGroup::Grid as usize].w_axis.z;
    assert!((z - 2.0).abs() < 1e-4, "grid z={z}");
}

#[test]
fn view_matrix_moves_eye_to_origin() {
    let cam = SmoothedCamera::new(15.0);
    let view = cam.view_matrix(0.2);
    let p = view.transform_point3(cam.eye());
    assert!(p.length() < 1e-4);
    // Something in front of an unrotated camera lands on -Z in view space.
    let ahead = view.transform_point3(Vec3::new(0.0, CAMERA_EYE_Y, 0.0));
    assert!(ahead.z < 0.0);
}

#[test]
fn swarm_layout_is_seeded_and_bounded() {
    let a = swarm(SWARM_COUNT, 7);
    let b = swarm(SWARM_COUNT, 7);
    assert_eq!(a.len(), SWARM_COUNT);
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.model, y.model);
    }
    for inst in a.iter() {
        let pos = inst.model.w_axis.truncate();
        let r = Vec2::new(pos.x, pos.z).length();
        assert!(r >= SWARM_RADIUS_MIN - 1e-3 && r <= SWARM_RADIUS_MIN + SWARM_RADIUS_SPAN + 1e-3);
        assert!(pos.y.abs() <= SWARM_HEIGHT * 0.5 + 1e-4);
        assert_eq!(inst.group, InstanceGroup::Swarm);
    }
    let other = swarm(SWARM_COUNT, 8);
    assert!(a.iter().zip(other.iter()).any(|(x, y)| x.model != y.model));
}

#[test]
fn dyson_shell_sits_on_its_sphere() {
    let shell = dyson_shell(SHELL_COUNT, 3);
    assert_eq!(shell.len(), SHELL_COUNT);
    for inst in shell.iter() {
        let pos = inst.model.w_axis.truncate();
        assert!((pos.length() - SHELL_RADIUS).abs() < 1e-3);
    }
    // Golden-angle spiral runs pole to pole.
    assert!(shell[0].model.w_axis.y > SHELL_RADIUS - 1e-3);
    assert!(shell[SHELL_COUNT - 1].model.w_axis.y < -SHELL_RADIUS + 1e-3);
}

#[test]
fn icosahedron_has_thirty_edges_five_per_vertex() {
    let edges = icosahedron_edges();
    assert_eq!(edges.len(), HERO_EDGE_COUNT);
    let mut ends: Vec<Vec3> = Vec::new();
    for (a, b) in edges.iter() {
        assert!((a.length() - 1.0).abs() < 1e-5);
        assert!((b.length() - 1.0).abs() < 1e-5);
        ends.push(*a);
        ends.push(*b);
    }
    for v in ends.iter() {
        let degree = ends.iter().filter(|w| w.distance(*v) < 1e-4).count();
        assert_eq!(degree, 5);
    }
}

#[test]
fn hero_shell_is_thin_struts_clear_of_the_inner_core() {
    let hero = hero_core();
    let inner: Vec<_> = hero
        .iter()
        .filter(|i| i.group == InstanceGroup::Inner)
        .collect();
    assert_eq!(inner.len(), 1);
    let shell: Vec<_> = hero
        .iter()
        .filter(|i| i.group == InstanceGroup::Hero)
        .collect();
    assert_eq!(shell.len(), HERO_EDGE_COUNT);
    for strut in shell {
        let m = strut.model;
        let half_span = m.x_axis.truncate();
        assert!(m.y_axis.truncate().length() <= HERO_EDGE_THICKNESS + 1e-5);
        assert!(m.z_axis.truncate().length() <= HERO_EDGE_THICKNESS + 1e-5);
        assert!(HERO_EDGE_THICKNESS / half_span.length() < 0.05);
        let centre = m.w_axis.truncate();
        for end in [centre + half_span, centre - half_span] {
            assert!((end.length() - HERO_RADIUS).abs() < 1e-3);
        }
        // The closest point of any strut stays well outside the inner core.
        assert!(centre.length() - HERO_EDGE_THICKNESS > INNER_RADIUS * 1.5);
    }
}

#[test]
fn full_scene_contains_every_group() {
    let all = full_scene(42);
    assert_eq!(
        all.len(),
        (GRID_DIVISIONS + 1) * 2 + HERO_EDGE_COUNT + 1 + SHELL_COUNT + SWARM_COUNT
    );
    for g in [
        InstanceGroup::Hero,
        InstanceGroup::Inner,
        InstanceGroup::Swarm,
        InstanceGroup::Shell,
        InstanceGroup::Grid,
    ] {
        assert!(all.iter().any(|i| i.group == g), "missing {g:?}");
    }
    assert!(all.iter().all(|i| (i.group as usize) < GROUP_COUNT));
}
