// src/gui.rs
use std::cell::RefCell;
use std::collections::VecDeque;
use std::ops::RangeInclusive;
use std::rc::Rc;
use std::time::{Duration, Instant, SystemTime};
use eframe::egui;
use egui::{Color32, Stroke, Vec2};
use crate::painter::{from_rect, EguiCanvas};
use crate::settings::AppSettings;
use crate::source::{LoadSource, ManualSource, RandomLoadSource};
use crate::timeline::{
    LoadTimeline, SystemClock, TimelineConfig, TimelineEvent, MAX_TIME_WINDOW_SECS,
};
const MIN_CHART_HEIGHT: f32 = 180.0;
const EVENT_LOG_LINES: usize = 6;
/// Mirror of the widget properties edited by the form.
#[derive(Clone, Debug, PartialEq)]
struct FormState {
    time_window: u32,
    tick_interval: u32,
    load_min: f64,
    load_max: f64,
    medium: f64,
    high: f64,
    grid: bool,
    smoothing: bool,
    label: bool,
}
impl From<&TimelineConfig> for FormState {
    fn from(config: &TimelineConfig) -> Self {
        Self {
            time_window: config.time_window_secs,
            tick_interval: config.tick_interval_secs,
            load_min: config.load_min,
            load_max: config.load_max,
            medium: config.medium_threshold,
            high: config.high_threshold,
            grid: config.grid_visible,
            smoothing: config.smoothing_enabled,
            label: config.current_value_label_visible,
        }
    }
}
impl FormState {
    /// Pulls a notified change back into the form.
    fn sync(&mut self, event: &TimelineEvent) {
        match *event {
            TimelineEvent::TimeWindowChanged(s) => self.time_window = s,
            TimelineEvent::TickIntervalChanged(s) => self.tick_interval = s,
            TimelineEvent::LoadRangeChanged { min, max } => {
                self.load_min = min;
                self.load_max = max;
            }
            TimelineEvent::ThresholdChanged { medium, high } => {
                self.medium = medium;
                self.high = high;
            }
            TimelineEvent::GradientChanged => {}
            TimelineEvent::GridVisibilityChanged(v) => self.grid = v,
            TimelineEvent::SmoothingChanged(v) => self.smoothing = v,
            TimelineEvent::LabelVisibilityChanged(v) => self.label = v,
        }
    }
}
fn describe(event: &TimelineEvent) -> String {
    match event {
        TimelineEvent::TimeWindowChanged(s) => format!("time window -> {s}s"),
        TimelineEvent::TickIntervalChanged(s) => format!("tick interval -> {s}s"),
        TimelineEvent::LoadRangeChanged { min, max } => format!("load range -> {min:.1}..{max:.1}"),
        TimelineEvent::ThresholdChanged { medium, high } => {
            format!("thresholds -> medium {medium:.1}, high {high:.1}")
        }
        TimelineEvent::GradientChanged => "gradient changed".to_owned(),
        TimelineEvent::GridVisibilityChanged(v) => format!("grid -> {v}"),
        TimelineEvent::SmoothingChanged(v) => format!("smoothing -> {v}"),
        TimelineEvent::LabelVisibilityChanged(v) => format!("current value label -> {v}"),
    }
}
pub struct LoadTimelineApp {
    timeline: LoadTimeline,
    source: Box<dyn LoadSource>,
    sample_interval: Duration,
    last_sample_at: Instant,
    form: FormState,
    pending_events: Rc<RefCell<VecDeque<TimelineEvent>>>,
    event_log: Vec<String>,
}
impl LoadTimelineApp {
    pub fn new(settings: AppSettings) -> Self {
        let mut timeline = LoadTimeline::with_config(settings.timeline, SystemClock);
        let pending_events = Rc::new(RefCell::new(VecDeque::new()));
        let sink = Rc::clone(&pending_events);
        timeline.subscribe(move |event| sink.borrow_mut().push_back(*event));
        let source: Box<dyn LoadSource> = if settings.demo.playback.is_empty() {
            Box::new(RandomLoadSource::new(settings.demo.jitter))
        } else {
            log::info!("replaying {} fixed samples", settings.demo.playback.len());
            Box::new(ManualSource::new(settings.demo.playback))
        };
        let form = FormState::from(timeline.config());
        Self {
            timeline,
            source,
            sample_interval: Duration::from_millis(settings.demo.sample_interval_ms),
            last_sample_at: Instant::now(),
            form,
            pending_events,
            event_log: vec!["Load timeline demo ready.".to_owned()],
        }
    }
    fn log(&mut self, msg: String) {
        self.event_log.push(format!("> {msg}"));
        if self.event_log.len() > EVENT_LOG_LINES {
            self.event_log.remove(0);
        }
    }
    fn generate_sample(&mut self) {
        if self.last_sample_at.elapsed() < self.sample_interval {
            return;
        }
        self.last_sample_at = Instant::now();
        let (min, max) = (self.timeline.load_min(), self.timeline.load_max());
        if let Some(sample) = self.source.next_sample(SystemTime::now(), min, max) {
            log::trace!("generated load sample {:.2}", sample.value);
            self.timeline.append_sample(sample);
        }
    }
    fn drain_events(&mut self) {
        let events: Vec<TimelineEvent> = self.pending_events.borrow_mut().drain(..).collect();
        for event in events {
            self.form.sync(&event);
            self.log(describe(&event));
        }
    }
    fn draw_chart(&self, ui: &mut egui::Ui) {
        let height = ui.available_height().max(MIN_CHART_HEIGHT);
        let (response, painter) =
            ui.allocate_painter(Vec2::new(ui.available_width(), height), egui::Sense::hover());
        painter.rect_stroke(response.rect, 0.0, Stroke::new(1.0, Color32::GRAY));
        let mut canvas = EguiCanvas::new(&painter);
        self.timeline.paint(&mut canvas, from_rect(response.rect));
    }
    fn draw_form(&mut self, ui: &mut egui::Ui) {
        let form = &mut self.form;
        let timeline = &mut self.timeline;
        egui::Grid::new("timeline_form")
            .num_columns(4)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Time window (s)");
                let window_range = form_range(10, MAX_TIME_WINDOW_SECS, form.time_window);
                if ui
                    .add(egui::DragValue::new(&mut form.time_window).clamp_range(window_range))
                    .changed()
                {
                    timeline.set_time_window_secs(form.time_window);
                }
                ui.label("Tick interval (s)");
                let tick_range = form_range(1, 3600, form.tick_interval);
                if ui
                    .add(egui::DragValue::new(&mut form.tick_interval).clamp_range(tick_range))
                    .changed()
                {
                    timeline.set_tick_interval_secs(form.tick_interval);
                }
                ui.end_row();
                ui.label("Load min");
                if ui.add(load_spin(&mut form.load_min)).changed() {
                    timeline.set_load_min(form.load_min);
                }
                ui.label("Load max");
                if ui.add(load_spin(&mut form.load_max)).changed() {
                    timeline.set_load_max(form.load_max);
                }
                ui.end_row();
                ui.label("Medium threshold");
                if ui.add(load_spin(&mut form.medium)).changed() {
                    timeline.set_medium_threshold(form.medium);
                }
                ui.label("High threshold");
                if ui.add(load_spin(&mut form.high)).changed() {
                    timeline.set_high_threshold(form.high);
                }
                ui.end_row();
                if ui.checkbox(&mut form.grid, "Show grid").changed() {
                    timeline.set_grid_visible(form.grid);
                }
                if ui.checkbox(&mut form.smoothing, "Smooth curve").changed() {
                    timeline.set_smoothing_enabled(form.smoothing);
                }
                if ui.checkbox(&mut form.label, "Current value").changed() {
                    timeline.set_current_value_label_visible(form.label);
                }
                ui.end_row();
            });
    }
}
/// `lo..=hi` widened so the current value is never clamped away.
fn form_range<T: PartialOrd + Copy>(lo: T, hi: T, current: T) -> RangeInclusive<T> {
    let lo = if current < lo { current } else { lo };
    let hi = if current > hi { current } else { hi };
    lo..=hi
}
fn load_spin(value: &mut f64) -> egui::DragValue<'_> {
    let range = form_range(-1000.0, 1000.0, *value);
    egui::DragValue::new(value)
        .clamp_range(range)
        .speed(0.5)
        .fixed_decimals(1)
}
impl eframe::App for LoadTimelineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.generate_sample();
        self.drain_events();
        ctx.set_visuals(egui::Visuals::light());
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(6.0);
            self.draw_form(ui);
            ui.separator();
            egui::ScrollArea::vertical().max_height(90.0).show(ui, |ui| {
                for line in &self.event_log {
                    ui.monospace(line);
                }
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(format!("{} samples in view", self.timeline.sample_count()));
            self.draw_chart(ui);
        });
        if self.timeline.take_repaint_request() {
            ctx.request_repaint();
        }
        let next = self.sample_interval.saturating_sub(self.last_sample_at.elapsed());
        ctx.request_repaint_after(next);
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn form_ranges_cover_loaded_values() {
        assert_eq!(form_range(10, 600, 3600), 10..=3600);
        assert_eq!(form_range(1, 3600, 5), 1..=3600);
        assert_eq!(form_range(-1000.0, 1000.0, -2500.0), -2500.0..=1000.0);
        let settings =
            AppSettings::from_json(r#"{"timeline":{"time_window_secs":3600}}"#).unwrap();
        let form = FormState::from(&settings.timeline);
        assert!(form_range(10, MAX_TIME_WINDOW_SECS, form.time_window).contains(&3600));
    }
    #[test]
    fn form_follows_notifications() {
        let mut form = FormState::from(&TimelineConfig::default());
        form.sync(&TimelineEvent::LoadRangeChanged { min: -5.0, max: 50.0 });
        form.sync(&TimelineEvent::SmoothingChanged(false));
        assert_eq!((form.load_min, form.load_max), (-5.0, 50.0));
        assert!(!form.smoothing);
        assert_eq!(form.time_window, 60);
    }
    #[test]
    fn app_mirrors_setter_changes_into_form() {
        let mut app = LoadTimelineApp::new(AppSettings::default());
        app.timeline.set_time_window_secs(120);
        app.timeline.set_high_threshold(90.0);
        app.drain_events();
        assert_eq!(app.form.time_window, 120);
        assert_eq!(app.form.high, 90.0);
        assert_eq!(app.event_log.len(), 3);
    }
    #[test]
    fn playback_source_feeds_timeline() {
        let mut settings = AppSettings::default();
        settings.demo.playback = vec![12.0, 34.0];
        settings.demo.sample_interval_ms = 1;
        let mut app = LoadTimelineApp::new(settings);
        std::thread::sleep(Duration::from_millis(2));
        app.generate_sample();
        assert_eq!(app.timeline.latest_sample().map(|s| s.value), Some(12.0));
    }
}
