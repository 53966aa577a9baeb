use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use crate::timeline::TimelineConfig;
/// Demo shell options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Delay between generated samples.
    pub sample_interval_ms: u64,
    /// Half-width of the random jitter added to each generated value.
    pub jitter: f64,
    pub window_width: f32,
    pub window_height: f32,
    /// Fixed values replayed instead of random ones when non-empty.
    pub playback: Vec<f64>,
}
impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            sample_interval_ms: 1000,
            jitter: 5.0,
            window_width: 720.0,
            window_height: 420.0,
            playback: Vec::new(),
        }
    }
}
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub timeline: TimelineConfig,
    pub demo: DemoSettings,
}
impl AppSettings {
    pub fn from_json(text: &str) -> Result<Self> {
        let settings: AppSettings =
            serde_json::from_str(text).context("settings are not valid JSON")?;
        Ok(settings.sanitized())
    }
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let settings = Self::from_json(&text)
            .with_context(|| format!("failed to parse settings file {}", path.display()))?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }
    /// Settings from `path`, or the defaults when no file was given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
    fn sanitized(mut self) -> Self {
        self.timeline = self.timeline.sanitized();
        if self.demo.sample_interval_ms == 0 {
            log::warn!("sample interval must be positive, using 1000ms");
            self.demo.sample_interval_ms = 1000;
        }
        self
    }
}
