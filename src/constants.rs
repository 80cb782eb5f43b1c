// Rendering, audio and page tuning constants. Behavioural knobs live in
// `core::ShowcaseConfig`; these are the fixed literals wired into WebGPU and
// WebAudio.

// Canvas
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Microphone analysis: fftSize 64 gives 32 frequency bins
pub const ANALYSER_FFT_SIZE: u32 = 64;
pub const ANALYSER_SMOOTHING: f64 = 0.8;

// Drone oscillator
pub const DRONE_GAIN: f32 = 0.04;
pub const DRONE_FADE_IN_SEC: f64 = 1.5;

// Page timing
pub const LOADER_HIDE_MS: i32 = 800;

// Layout seed so every session gets the same swarm
pub const LAYOUT_SEED: u64 = 42;

// Scene shading
pub const FOG_DENSITY: f32 = 0.03;
pub const SECONDARY_RGB: [f32; 3] = [0.737, 0.075, 0.996]; // #bc13fe
pub const DIM_RGB: [f32; 3] = [0.067, 0.067, 0.067]; // #111111
pub const AUDIO_EMISSIVE_GAIN: f32 = 2.0;

// Post-processing defaults
pub const BLOOM_THRESHOLD: f32 = 0.1;
pub const BLOOM_RADIUS: f32 = 0.5;
