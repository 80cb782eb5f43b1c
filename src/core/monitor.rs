// Frame-rate monitor with a one-way drop into a lighter render mode.

// Frames longer than this mean the page was hidden or stalled; the window
// in progress is discarded instead of being reported.
pub const STALL_SEC: f32 = 1.0;
// Slack for rounding drift in summed frame times.
const WINDOW_EPSILON_SEC: f64 = 1e-4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PerfMode {
    #[default]
    Normal,
    Lite,
}

/// What happened when a one-second window closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowReport {
    pub fps: u32,
    pub entered_lite: bool,
}

#[derive(Clone, Debug)]
pub struct PerfMonitor {
    mode: PerfMode,
    threshold_fps: u32,
    warmup_windows: u32,
    windows_completed: u32,
    frames_in_window: u32,
    window_elapsed_sec: f64,
    last_fps: Option<u32>,
}

impl PerfMonitor {
    pub fn new(threshold_fps: u32, warmup_windows: u32) -> Self {
        Self {
            mode: PerfMode::Normal,
            threshold_fps,
            warmup_windows,
            windows_completed: 0,
            frames_in_window: 0,
            window_elapsed_sec: 0.0,
            last_fps: None,
        }
    }

    pub fn mode(&self) -> PerfMode {
        self.mode
    }

    pub fn windows_completed(&self) -> u32 {
        self.windows_completed
    }

    pub fn last_fps(&self) -> Option<u32> {
        self.last_fps
    }

    /// Count one rendered frame that took `dt_sec` of wall-clock time (not
    /// clamped). Returns a report each time a full second has been
    /// accumulated; time past the second carries into the next window.
    pub fn record_frame(&mut self, dt_sec: f32) -> Option<WindowReport> {
        if dt_sec > STALL_SEC {
            self.frames_in_window = 0;
            self.window_elapsed_sec = 0.0;
            return None;
        }
        self.frames_in_window += 1;
        self.window_elapsed_sec += f64::from(dt_sec.max(0.0));
        if self.window_elapsed_sec < 1.0 - WINDOW_EPSILON_SEC {
            return None;
        }
        let fps = self.frames_in_window;
        self.frames_in_window = 0;
        self.window_elapsed_sec -= 1.0;
        Some(self.observe_fps(fps))
    }

    /// Feed one completed window's frame count.
    pub fn observe_fps(&mut self, fps: u32) -> WindowReport {
        self.windows_completed = self.windows_completed.saturating_add(1);
        self.last_fps = Some(fps);
        let entered_lite = self.mode == PerfMode::Normal
            && self.windows_completed > self.warmup_windows
            && fps < self.threshold_fps;
        if entered_lite {
            self.mode = PerfMode::Lite;
        }
        WindowReport { fps, entered_lite }
    }
}
