//! Elapsed-time clock driven by an external once-per-second tick.

/// Counts whole seconds while running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedClock {
    seconds: u32,
    running: bool,
}

impl ElapsedClock {
    /// A running clock at zero
    pub fn new() -> Self {
        Self {
            seconds: 0,
            running: true,
        }
    }

    /// Advance by one second if running. Returns whether it advanced.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.seconds = self.seconds.saturating_add(1);
        }
        self.running
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Restore a previously observed reading without changing run state
    pub fn set_seconds(&mut self, seconds: u32) {
        self.seconds = seconds;
    }
}

impl Default for ElapsedClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Format seconds as `MM:SS` (minutes keep growing past 99)
pub fn format_elapsed(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
