use std::time::Duration;

// Tunable behaviour of the showcase. Rendering constants that never change at
// runtime live in `crate::constants` instead.

/// How camera smoothing reacts to variable refresh rates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Smoothing {
    /// `v += (target - v) * factor` once per call, regardless of frame time.
    PerCall { factor: f32 },
    /// Same response as `PerCall` at `reference_hz`, scaled by the real frame
    /// duration so slower or faster displays converge at the same speed.
    FrameRateIndependent { factor: f32, reference_hz: f32 },
}

impl Smoothing {
    /// Blend factor to use for a frame that took `dt_sec`.
    pub fn alpha(&self, dt_sec: f32) -> f32 {
        match *self {
            Smoothing::PerCall { factor } => factor.clamp(0.0, 1.0),
            Smoothing::FrameRateIndependent {
                factor,
                reference_hz,
            } => {
                let keep = (1.0 - factor.clamp(0.0, 1.0)).max(0.0);
                let frames = dt_sec.max(0.0) * reference_hz;
                1.0 - keep.powf(frames)
            }
        }
    }
}

/// How a frequency-domain byte buffer is collapsed into one amplitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AmplitudeReduction {
    /// Lowest bin only ("bass" sample).
    FirstBin,
    /// Mean over every bin.
    Mean,
}

#[derive(Clone, Debug)]
pub struct ShowcaseConfig {
    pub smoothing: Smoothing,
    pub amplitude: AmplitudeReduction,
    pub mood_period: Duration,
    pub drone_ramp: Duration,
    pub lite_fps_threshold: u32,
    pub warmup_windows: u32,
    pub bloom_base: f32,
    pub bloom_audio_gain: f32,
    pub pointer_look_scale: f32,
    pub camera_rotation_scale: f32,
    pub camera_start_z: f32,
    pub camera_linked_z: f32,
    /// Longest step scene motion takes in one frame (tab switches, stalls).
    pub max_step_sec: f32,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            smoothing: Smoothing::FrameRateIndependent {
                factor: 0.05,
                reference_hz: 60.0,
            },
            amplitude: AmplitudeReduction::Mean,
            mood_period: Duration::from_secs(15),
            drone_ramp: Duration::from_secs(2),
            lite_fps_threshold: 25,
            warmup_windows: 5,
            bloom_base: 1.2,
            bloom_audio_gain: 2.0,
            pointer_look_scale: 0.5,
            camera_rotation_scale: 0.2,
            camera_start_z: 15.0,
            camera_linked_z: 10.0,
            max_step_sec: 0.25,
        }
    }
}

impl ShowcaseConfig {
    /// Legacy per-call smoothing, matching the behaviour of the early prototypes.
    pub fn per_call() -> Self {
        Self {
            smoothing: Smoothing::PerCall { factor: 0.05 },
            ..Self::default()
        }
    }
}
