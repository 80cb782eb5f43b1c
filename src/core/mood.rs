// Mood presets and the cycler that walks through them.

/// A named bundle of visual/audio parameters applied together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoodPreset {
    pub name: &'static str,
    pub accent_rgb: [f32; 3],
    pub background_rgb: [f32; 3],
    pub distortion: f32,
    pub drone_hz: f32,
}

pub const NEON_GENESIS: MoodPreset = MoodPreset {
    name: "NEON_GENESIS",
    accent_rgb: [0.0, 0.953, 1.0],     // #00f3ff
    background_rgb: [0.02, 0.02, 0.02], // #050505
    distortion: 0.15,
    drone_hz: 55.0,
};

pub const CRIMSON_OVERRIDE: MoodPreset = MoodPreset {
    name: "CRIMSON_OVERRIDE",
    accent_rgb: [1.0, 0.165, 0.427],      // #ff2a6d
    background_rgb: [0.039, 0.008, 0.02], // #0a0205
    distortion: 0.35,
    drone_hz: 73.42,
};

pub const VOID_SYNAPSE: MoodPreset = MoodPreset {
    name: "VOID_SYNAPSE",
    accent_rgb: [0.737, 0.075, 0.996],    // #bc13fe
    background_rgb: [0.02, 0.008, 0.039], // #05020a
    distortion: 0.6,
    drone_hz: 41.2,
};

pub const GHOST_SIGNAL: MoodPreset = MoodPreset {
    name: "GHOST_SIGNAL",
    accent_rgb: [0.49, 1.0, 0.702],       // #7dffb3
    background_rgb: [0.008, 0.031, 0.02], // #020805
    distortion: 0.25,
    drone_hz: 65.41,
};

pub const MOOD_PRESETS: [MoodPreset; 4] =
    [NEON_GENESIS, CRIMSON_OVERRIDE, VOID_SYNAPSE, GHOST_SIGNAL];

/// Render/audio-facing copy of the active preset's scalar fields.
///
/// Always replaced as a whole so a frame never sees a half-applied mood.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneMood {
    pub accent_rgb: [f32; 3],
    pub background_rgb: [f32; 3],
    pub distortion: f32,
    pub drone_hz: f32,
}

impl From<&MoodPreset> for SceneMood {
    fn from(p: &MoodPreset) -> Self {
        Self {
            accent_rgb: p.accent_rgb,
            background_rgb: p.background_rgb,
            distortion: p.distortion,
            drone_hz: p.drone_hz,
        }
    }
}

impl Default for SceneMood {
    fn default() -> Self {
        SceneMood::from(&MOOD_PRESETS[0])
    }
}

#[derive(Clone, Debug)]
pub struct MoodCycler {
    presets: &'static [MoodPreset],
    index: usize,
}

impl Default for MoodCycler {
    fn default() -> Self {
        Self::new(&MOOD_PRESETS)
    }
}

impl MoodCycler {
    /// `presets` must not be empty.
    pub fn new(presets: &'static [MoodPreset]) -> Self {
        assert!(!presets.is_empty(), "mood cycler needs at least one preset");
        Self { presets, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn current(&self) -> &'static MoodPreset {
        let presets = self.presets;
        &presets[self.index]
    }

    /// Step to the next preset, wrapping after the last, and return it.
    pub fn advance(&mut self) -> &'static MoodPreset {
        self.index = (self.index + 1) % self.presets.len();
        self.current()
    }

    /// Advance and overwrite `scene` with the new preset in one assignment.
    pub fn advance_into(&mut self, scene: &mut SceneMood) -> &'static MoodPreset {
        let preset = self.advance();
        *scene = SceneMood::from(preset);
        preset
    }
}
