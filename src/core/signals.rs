use super::config::AmplitudeReduction;
use glam::Vec2;

// Input signals read once per frame, plus the link model for optional sensors.

// Degrees of device tilt to look-target units.
pub const TILT_SCALE: f32 = 0.02;

/// An optional input that is either absent or delivering values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Capability<T> {
    Unlinked,
    Linked(T),
}

impl<T> Default for Capability<T> {
    fn default() -> Self {
        Capability::Unlinked
    }
}

impl<T: Copy> Capability<T> {
    pub fn is_linked(&self) -> bool {
        matches!(self, Capability::Linked(_))
    }

    pub fn get(&self) -> Option<T> {
        match *self {
            Capability::Linked(v) => Some(v),
            Capability::Unlinked => None,
        }
    }
}

/// Lifecycle of a permission-gated sensor link.
///
/// `Denied` is terminal: once a request fails the feature stays off for the
/// rest of the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkState {
    #[default]
    Idle,
    Pending,
    Active,
    Denied,
}

impl LinkState {
    /// Move `Idle -> Pending`. Returns false if a request is not allowed now.
    pub fn begin_request(&mut self) -> bool {
        if *self == LinkState::Idle {
            *self = LinkState::Pending;
            true
        } else {
            false
        }
    }

    /// Settle a pending request. Ignored unless currently `Pending`.
    pub fn resolve(&mut self, granted: bool) {
        if *self == LinkState::Pending {
            *self = if granted {
                LinkState::Active
            } else {
                LinkState::Denied
            };
        }
    }

    pub fn is_active(&self) -> bool {
        *self == LinkState::Active
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct InputSignals {
    /// Pointer in -1..1 on both axes, y up.
    pub pointer: Vec2,
    pub elapsed_sec: f32,
    pub audio: Capability<f32>,
    /// Already scaled tilt, x from `beta` and y from `gamma`.
    pub tilt: Capability<Vec2>,
}

impl InputSignals {
    /// Current amplitude in [0, 1]; zero while the microphone is unlinked.
    pub fn audio_amplitude(&self) -> f32 {
        self.audio.get().unwrap_or(0.0).clamp(0.0, 1.0)
    }

    /// Rotation target as (pitch, yaw). Tilt wins over the pointer when linked.
    pub fn look_target(&self, pointer_scale: f32) -> Vec2 {
        match self.tilt {
            Capability::Linked(t) => t,
            Capability::Unlinked => {
                Vec2::new(self.pointer.y * pointer_scale, self.pointer.x * pointer_scale)
            }
        }
    }

    pub fn set_pointer_px(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.pointer = normalize_pointer(x, y, width, height);
    }

    pub fn set_tilt_degrees(&mut self, beta: f32, gamma: f32) {
        self.tilt = Capability::Linked(tilt_from_degrees(beta, gamma));
    }
}

/// Map viewport pixels to -1..1, flipping y so up is positive.
pub fn normalize_pointer(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    let nx = (x / width) * 2.0 - 1.0;
    let ny = -(y / height) * 2.0 + 1.0;
    Vec2::new(nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0))
}

pub fn tilt_from_degrees(beta: f32, gamma: f32) -> Vec2 {
    Vec2::new(beta * TILT_SCALE, gamma * TILT_SCALE)
}

/// Collapse an analyser byte spectrum into [0, 1]. Empty buffers read as silence.
pub fn reduce_amplitude(bins: &[u8], mode: AmplitudeReduction) -> f32 {
    if bins.is_empty() {
        return 0.0;
    }
    let raw = match mode {
        AmplitudeReduction::FirstBin => bins[0] as f32,
        AmplitudeReduction::Mean => {
            let sum: u32 = bins.iter().map(|&b| b as u32).sum();
            sum as f32 / bins.len() as f32
        }
    };
    (raw / 255.0).clamp(0.0, 1.0)
}
