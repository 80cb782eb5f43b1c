use super::camera::SmoothedCamera;
use super::config::ShowcaseConfig;
use super::layout::{InstanceGroup, GROUP_COUNT};
use super::monitor::{PerfMode, PerfMonitor, WindowReport};
use super::mood::{MoodCycler, MoodPreset, SceneMood};
use super::signals::{reduce_amplitude, Capability, InputSignals};
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

// Per-frame parameter derivation. Everything here is platform-free; the web
// front end feeds it signals and turns the output into GPU uniforms.

// Group motion in radians per second of elapsed time.
pub const HERO_SPIN_X: f32 = 0.1;
pub const HERO_SPIN_Y: f32 = 0.2;
pub const INNER_SPIN_Y: f32 = -0.5;
pub const SWARM_SPIN_Y: f32 = 0.05;
// Shell drift, 0.002 / 0.001 rad per frame at 60 Hz.
pub const SHELL_SPIN_Y: f32 = 0.12;
pub const SHELL_SPIN_Z: f32 = 0.06;
// Floor grid scroll speed and wrap length.
pub const GRID_SPEED: f32 = 2.0;
pub const GRID_WRAP: f32 = 10.0;

pub const AUDIO_SCALE_PULSE: f32 = 0.35;
pub const CHROMA_BASE: f32 = 0.0015;
pub const CHROMA_DISTORTION: f32 = 0.004;
pub const CHROMA_AUDIO: f32 = 0.006;

/// Which optional post passes run this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PostPasses {
    pub bloom: bool,
    pub chromatic: bool,
}

impl PostPasses {
    pub fn for_mode(mode: PerfMode) -> Self {
        match mode {
            PerfMode::Normal => Self {
                bloom: true,
                chromatic: true,
            },
            PerfMode::Lite => Self {
                bloom: false,
                chromatic: false,
            },
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct FrameParams {
    pub elapsed_sec: f32,
    pub look_target: Vec2,
    /// Applied camera rotation (pitch, yaw) in radians.
    pub camera_rotation: Vec2,
    pub camera_eye: Vec3,
    pub view: Mat4,
    pub groups: [Mat4; GROUP_COUNT],
    pub audio_pulse: f32,
    pub bloom_strength: f32,
    pub chromatic_shift: f32,
    pub mood: SceneMood,
    pub passes: PostPasses,
    pub fps_report: Option<WindowReport>,
}

/// Explicit context for the frame loop and the mood timer.
#[derive(Clone, Debug)]
pub struct Showcase {
    pub config: ShowcaseConfig,
    pub signals: InputSignals,
    pub camera: SmoothedCamera,
    pub mood: SceneMood,
    pub cycler: MoodCycler,
    pub monitor: PerfMonitor,
    shell_spin: Vec2,
}

impl Default for Showcase {
    fn default() -> Self {
        Self::new(ShowcaseConfig::default())
    }
}

impl Showcase {
    pub fn new(config: ShowcaseConfig) -> Self {
        let cycler = MoodCycler::default();
        let mood = SceneMood::from(cycler.current());
        let camera = SmoothedCamera::new(config.camera_start_z);
        let monitor = PerfMonitor::new(config.lite_fps_threshold, config.warmup_windows);
        Self {
            config,
            signals: InputSignals::default(),
            camera,
            mood,
            cycler,
            monitor,
            shell_spin: Vec2::ZERO,
        }
    }

    /// Store the latest analyser spectrum as the audio amplitude.
    pub fn sample_audio(&mut self, bins: &[u8]) {
        let amp = reduce_amplitude(bins, self.config.amplitude);
        self.signals.audio = Capability::Linked(amp);
    }

    /// Entry transition: dolly in toward the linked distance.
    pub fn engage(&mut self) {
        self.camera.target_distance_z = self.config.camera_linked_z;
    }

    /// Advance the mood and apply the new preset as one value.
    pub fn cycle_mood(&mut self) -> &'static MoodPreset {
        self.cycler.advance_into(&mut self.mood)
    }

    pub fn perf_mode(&self) -> PerfMode {
        self.monitor.mode()
    }

    /// Advance one rendered frame that took `dt_sec` of wall-clock time.
    ///
    /// Motion steps by at most `max_step_sec`; the monitor sees the real time.
    pub fn frame(&mut self, dt_sec: f32) -> FrameParams {
        let raw_dt = dt_sec.max(0.0);
        let dt = raw_dt.min(self.config.max_step_sec);
        self.signals.elapsed_sec += dt;
        let t = self.signals.elapsed_sec;
        let amp = self.signals.audio_amplitude();

        let look_target = self.signals.look_target(self.config.pointer_look_scale);
        self.camera.step(look_target, self.config.smoothing, dt);
        let camera_rotation = self.camera.rotation * self.config.camera_rotation_scale;

        self.shell_spin += Vec2::new(SHELL_SPIN_Y, SHELL_SPIN_Z) * dt;
        let pulse = 1.0 + AUDIO_SCALE_PULSE * amp;
        let mut groups = [Mat4::IDENTITY; GROUP_COUNT];
        groups[InstanceGroup::Hero as usize] = spin(
            Quat::from_euler(EulerRot::XYZ, t * HERO_SPIN_X, t * HERO_SPIN_Y, 0.0),
            pulse,
        );
        groups[InstanceGroup::Inner as usize] = spin(Quat::from_rotation_y(t * INNER_SPIN_Y), pulse);
        groups[InstanceGroup::Swarm as usize] = spin(Quat::from_rotation_y(t * SWARM_SPIN_Y), 1.0);
        groups[InstanceGroup::Shell as usize] = spin(
            Quat::from_euler(EulerRot::XYZ, 0.0, self.shell_spin.x, self.shell_spin.y),
            pulse,
        );
        groups[InstanceGroup::Grid as usize] =
            Mat4::from_translation(Vec3::new(0.0, 0.0, (t * GRID_SPEED) % GRID_WRAP));

        let bloom_strength = self.config.bloom_base + amp * self.config.bloom_audio_gain;
        let chromatic_shift =
            CHROMA_BASE + CHROMA_DISTORTION * self.mood.distortion + CHROMA_AUDIO * amp;

        let fps_report = self.monitor.record_frame(raw_dt);
        if let Some(r) = fps_report {
            if r.entered_lite {
                log::warn!("[perf] {} fps after warm-up, switching to lite mode", r.fps);
            }
        }

        FrameParams {
            elapsed_sec: t,
            look_target,
            camera_rotation,
            camera_eye: self.camera.eye(),
            view: self.camera.view_matrix(self.config.camera_rotation_scale),
            groups,
            audio_pulse: amp,
            bloom_strength,
            chromatic_shift,
            mood: self.mood,
            passes: PostPasses::for_mode(self.monitor.mode()),
            fps_report,
        }
    }
}

fn spin(rotation: Quat, scale: f32) -> Mat4 {
    Mat4::from_scale_rotation_translation(Vec3::splat(scale), rotation, Vec3::ZERO)
}
