use serde::{Deserialize, Serialize};
use super::geometry::Rgba;
/// Longest accepted time window (one day).
pub const MAX_TIME_WINDOW_SECS: u32 = 86_400;
/// Every user-facing property of the timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Trailing window in seconds, controls the horizontal range.
    pub time_window_secs: u32,
    /// Spacing of the labelled time-axis marks.
    pub tick_interval_secs: u32,
    pub load_min: f64,
    pub load_max: f64,
    pub medium_threshold: f64,
    pub high_threshold: f64,
    pub gradient_start: Rgba,
    pub gradient_end: Rgba,
    pub grid_visible: bool,
    pub smoothing_enabled: bool,
    pub current_value_label_visible: bool,
}
impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            time_window_secs: 60,
            tick_interval_secs: 10,
            load_min: 0.0,
            load_max: 100.0,
            medium_threshold: 50.0,
            high_threshold: 80.0,
            gradient_start: Rgba::rgb(240, 248, 255),
            gradient_end: Rgba::rgb(210, 228, 255),
            grid_visible: true,
            smoothing_enabled: true,
            current_value_label_visible: true,
        }
    }
}
impl TimelineConfig {
    /// Replaces a zero window or tick interval with the default one and caps the window.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.time_window_secs == 0 {
            log::warn!(
                "time window must be positive, using {}s",
                defaults.time_window_secs
            );
            self.time_window_secs = defaults.time_window_secs;
        }
        if self.time_window_secs > MAX_TIME_WINDOW_SECS {
            log::warn!(
                "time window {}s exceeds the {MAX_TIME_WINDOW_SECS}s limit, clamping",
                self.time_window_secs
            );
            self.time_window_secs = MAX_TIME_WINDOW_SECS;
        }
        if self.tick_interval_secs == 0 {
            log::warn!(
                "tick interval must be positive, using {}s",
                defaults.tick_interval_secs
            );
            self.tick_interval_secs = defaults.tick_interval_secs;
        }
        self
    }
    /// `load_max - load_min`, or `None` when the range is empty or inverted.
    pub fn load_span(&self) -> Option<f64> {
        let span = self.load_max - self.load_min;
        (span > 0.0).then_some(span)
    }
}
