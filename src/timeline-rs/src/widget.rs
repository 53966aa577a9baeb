use super::buffer::{Sample, SampleStore};
use super::canvas::Canvas;
use super::clock::{Clock, SystemClock};
use super::config::{TimelineConfig, MAX_TIME_WINDOW_SECS};
use super::geometry::{Point, Rect, Rgba};
use super::mapping::{self, ChartInsets};
use super::render;
/// Change notification, one variant per property group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimelineEvent {
    TimeWindowChanged(u32),
    TickIntervalChanged(u32),
    LoadRangeChanged { min: f64, max: f64 },
    ThresholdChanged { medium: f64, high: f64 },
    GradientChanged,
    GridVisibilityChanged(bool),
    SmoothingChanged(bool),
    LabelVisibilityChanged(bool),
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);
type Observer = Box<dyn FnMut(&TimelineEvent)>;
/// Float equality relative to magnitude, exact at zero.
fn fuzzy_eq(a: f64, b: f64) -> bool {
    (a - b).abs() * 1e12 <= a.abs().min(b.abs())
}
/// Scrolling load chart: configuration, retained samples and observers.
///
/// Every paint is a fresh computation from the current configuration and
/// samples; nothing is cached between frames.
pub struct LoadTimeline<C: Clock = SystemClock> {
    config: TimelineConfig,
    samples: SampleStore,
    clock: C,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
    repaint_requested: bool,
}
impl LoadTimeline<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}
impl Default for LoadTimeline<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}
impl<C: Clock> LoadTimeline<C> {
    pub fn with_clock(clock: C) -> Self {
        Self::with_config(TimelineConfig::default(), clock)
    }
    pub fn with_config(config: TimelineConfig, clock: C) -> Self {
        let config = config.sanitized();
        Self {
            samples: SampleStore::new(config.time_window_secs),
            config,
            clock,
            observers: Vec::new(),
            next_subscription: 0,
            repaint_requested: true,
        }
    }
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }
    // --- samples ---
    pub fn append_sample(&mut self, sample: Sample) {
        self.samples.append(sample, self.clock.now());
        self.repaint_requested = true;
    }
    pub fn set_samples(&mut self, samples: impl IntoIterator<Item = Sample>) {
        self.samples.replace_all(samples, self.clock.now());
        log::debug!("sample set replaced, {} retained", self.samples.len());
        self.repaint_requested = true;
    }
    pub fn samples(&self) -> Vec<Sample> {
        self.samples.to_vec()
    }
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
    pub fn latest_sample(&self) -> Option<Sample> {
        self.samples.latest().copied()
    }
    // --- observers ---
    pub fn subscribe(&mut self, observer: impl FnMut(&TimelineEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }
    fn changed(&mut self, event: TimelineEvent) -> bool {
        log::trace!("timeline property changed: {event:?}");
        self.repaint_requested = true;
        for (_, observer) in &mut self.observers {
            observer(&event);
        }
        true
    }
    /// Returns whether a repaint was requested since the last call, and clears it.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }
    // --- getters ---
    pub fn time_window_secs(&self) -> u32 {
        self.config.time_window_secs
    }
    pub fn tick_interval_secs(&self) -> u32 {
        self.config.tick_interval_secs
    }
    pub fn load_min(&self) -> f64 {
        self.config.load_min
    }
    pub fn load_max(&self) -> f64 {
        self.config.load_max
    }
    pub fn medium_threshold(&self) -> f64 {
        self.config.medium_threshold
    }
    pub fn high_threshold(&self) -> f64 {
        self.config.high_threshold
    }
    pub fn gradient_start(&self) -> Rgba {
        self.config.gradient_start
    }
    pub fn gradient_end(&self) -> Rgba {
        self.config.gradient_end
    }
    pub fn grid_visible(&self) -> bool {
        self.config.grid_visible
    }
    pub fn smoothing_enabled(&self) -> bool {
        self.config.smoothing_enabled
    }
    pub fn current_value_label_visible(&self) -> bool {
        self.config.current_value_label_visible
    }
    // --- setters; each returns whether anything changed ---
    /// Windows longer than [`MAX_TIME_WINDOW_SECS`] are clamped to it.
    pub fn set_time_window_secs(&mut self, seconds: u32) -> bool {
        let seconds = seconds.min(MAX_TIME_WINDOW_SECS);
        if seconds == 0 || seconds == self.config.time_window_secs {
            return false;
        }
        self.config.time_window_secs = seconds;
        self.samples.set_window(seconds, self.clock.now());
        self.changed(TimelineEvent::TimeWindowChanged(seconds))
    }
    pub fn set_tick_interval_secs(&mut self, seconds: u32) -> bool {
        if seconds == 0 || seconds == self.config.tick_interval_secs {
            return false;
        }
        self.config.tick_interval_secs = seconds;
        self.changed(TimelineEvent::TickIntervalChanged(seconds))
    }
    pub fn set_load_min(&mut self, value: f64) -> bool {
        if fuzzy_eq(value, self.config.load_min) {
            return false;
        }
        self.config.load_min = value;
        self.changed(TimelineEvent::LoadRangeChanged {
            min: value,
            max: self.config.load_max,
        })
    }
    pub fn set_load_max(&mut self, value: f64) -> bool {
        if fuzzy_eq(value, self.config.load_max) {
            return false;
        }
        self.config.load_max = value;
        self.changed(TimelineEvent::LoadRangeChanged {
            min: self.config.load_min,
            max: value,
        })
    }
    pub fn set_medium_threshold(&mut self, value: f64) -> bool {
        if fuzzy_eq(value, self.config.medium_threshold) {
            return false;
        }
        self.config.medium_threshold = value;
        self.changed(TimelineEvent::ThresholdChanged {
            medium: value,
            high: self.config.high_threshold,
        })
    }
    pub fn set_high_threshold(&mut self, value: f64) -> bool {
        if fuzzy_eq(value, self.config.high_threshold) {
            return false;
        }
        self.config.high_threshold = value;
        self.changed(TimelineEvent::ThresholdChanged {
            medium: self.config.medium_threshold,
            high: value,
        })
    }
    pub fn set_gradient_start(&mut self, color: Rgba) -> bool {
        if color == self.config.gradient_start {
            return false;
        }
        self.config.gradient_start = color;
        self.changed(TimelineEvent::GradientChanged)
    }
    pub fn set_gradient_end(&mut self, color: Rgba) -> bool {
        if color == self.config.gradient_end {
            return false;
        }
        self.config.gradient_end = color;
        self.changed(TimelineEvent::GradientChanged)
    }
    pub fn set_grid_visible(&mut self, visible: bool) -> bool {
        if visible == self.config.grid_visible {
            return false;
        }
        self.config.grid_visible = visible;
        self.changed(TimelineEvent::GridVisibilityChanged(visible))
    }
    pub fn set_smoothing_enabled(&mut self, enabled: bool) -> bool {
        if enabled == self.config.smoothing_enabled {
            return false;
        }
        self.config.smoothing_enabled = enabled;
        self.changed(TimelineEvent::SmoothingChanged(enabled))
    }
    pub fn set_current_value_label_visible(&mut self, visible: bool) -> bool {
        if visible == self.config.current_value_label_visible {
            return false;
        }
        self.config.current_value_label_visible = visible;
        self.changed(TimelineEvent::LabelVisibilityChanged(visible))
    }
    /// Applies every field of `config` through the setters, so observers hear about each change.
    pub fn apply_config(&mut self, config: &TimelineConfig) -> usize {
        let config = config.clone().sanitized();
        [
            self.set_time_window_secs(config.time_window_secs),
            self.set_tick_interval_secs(config.tick_interval_secs),
            self.set_load_min(config.load_min),
            self.set_load_max(config.load_max),
            self.set_medium_threshold(config.medium_threshold),
            self.set_high_threshold(config.high_threshold),
            self.set_gradient_start(config.gradient_start),
            self.set_gradient_end(config.gradient_end),
            self.set_grid_visible(config.grid_visible),
            self.set_smoothing_enabled(config.smoothing_enabled),
            self.set_current_value_label_visible(config.current_value_label_visible),
        ]
        .into_iter()
        .filter(|changed| *changed)
        .count()
    }
    // --- rendering ---
    /// Screen points of the retained samples inside `bounds`, oldest first.
    pub fn points(&self, bounds: Rect) -> Vec<Point> {
        let area = mapping::chart_rect(bounds, ChartInsets::default());
        mapping::map_samples(self.samples.iter(), &self.config, area, self.clock.now())
    }
    pub fn paint(&self, canvas: &mut impl Canvas, bounds: Rect) {
        render::render_frame(
            canvas,
            &self.config,
            self.samples.iter(),
            bounds,
            self.clock.now(),
        );
    }
}
