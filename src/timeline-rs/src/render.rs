use std::time::SystemTime;
use super::buffer::Sample;
use super::canvas::{Canvas, Stroke, TextAnchor, TextStyle};
use super::config::TimelineConfig;
use super::geometry::{Point, Rect, Rgba};
use super::mapping::{self, ChartInsets};
use super::path;
pub const TRACE_STROKE: Stroke = Stroke::new(2.0, Rgba::rgb(0, 96, 180));
const FRAME_STROKE: Stroke = Stroke::new(1.0, Rgba::rgb(120, 120, 120));
const GRID_STROKE: Stroke = Stroke::new(1.0, Rgba::rgb(200, 200, 200));
const TICK_STROKE: Stroke = Stroke::new(1.0, Rgba::rgb(80, 80, 80));
const TICK_TEXT: TextStyle = TextStyle {
    size: 11.0,
    bold: false,
    color: Rgba::rgb(80, 80, 80),
};
const HIGH_ZONE: Rgba = Rgba::rgba(255, 235, 238, 120);
const MEDIUM_ZONE: Rgba = Rgba::rgba(255, 248, 225, 120);
const LOW_ZONE: Rgba = Rgba::rgba(232, 245, 233, 120);
const BADGE_FILL: Rgba = Rgba::rgba(255, 255, 255, 220);
/// Approximate horizontal pitch of the grid columns.
pub const GRID_PITCH_PX: f32 = 50.0;
pub const GRID_ROWS: usize = 5;
const VALUE_INTERVALS: usize = 4;
const TICK_LEN: f32 = 5.0;
const DASH: f32 = 4.0;
const DASH_GAP: f32 = 3.0;
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadTier {
    Normal,
    Warning,
    Alert,
}
impl LoadTier {
    pub fn color(self) -> Rgba {
        match self {
            LoadTier::Alert => Rgba::rgb(198, 40, 40),
            LoadTier::Warning => Rgba::rgb(255, 152, 0),
            LoadTier::Normal => Rgba::rgb(56, 142, 60),
        }
    }
}
pub fn classify(value: f64, config: &TimelineConfig) -> LoadTier {
    if value >= config.high_threshold {
        LoadTier::Alert
    } else if value >= config.medium_threshold {
        LoadTier::Warning
    } else {
        LoadTier::Normal
    }
}
/// Labelled mark on one of the axes; `pos` is x for the time axis, y for the value axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub pos: f32,
    pub label: String,
}
/// Number of tick intervals along the time axis, never less than one.
pub fn time_intervals(config: &TimelineConfig) -> u32 {
    (config.time_window_secs / config.tick_interval_secs.max(1)).max(1)
}
/// Time-axis labels from "0s" at the right edge to the oldest at the left.
pub fn time_ticks(config: &TimelineConfig, area: Rect) -> Vec<AxisTick> {
    let intervals = time_intervals(config);
    (0..=intervals)
        .map(|i| {
            let ratio = i as f32 / intervals as f32;
            AxisTick {
                pos: area.left + (1.0 - ratio) * area.width,
                label: format!("{}s", u64::from(i) * u64::from(config.tick_interval_secs)),
            }
        })
        .collect()
}
/// Value-axis labels at quarter steps, bottom (min) first.
pub fn value_ticks(config: &TimelineConfig, area: Rect) -> Vec<AxisTick> {
    (0..=VALUE_INTERVALS)
        .map(|i| {
            let ratio = i as f64 / VALUE_INTERVALS as f64;
            let value = config.load_min + ratio * (config.load_max - config.load_min);
            AxisTick {
                pos: area.bottom() - ratio as f32 * area.height,
                label: format!("{value:.0}"),
            }
        })
        .collect()
}
/// Interior grid line positions: x of the verticals, y of the horizontals.
pub fn grid_lines(area: Rect) -> (Vec<f32>, Vec<f32>) {
    let columns = (area.width / GRID_PITCH_PX).floor().max(0.0) as usize;
    let xs = (1..columns)
        .map(|i| area.left + i as f32 * (area.width / columns as f32))
        .collect();
    let ys = (1..GRID_ROWS)
        .map(|i| area.top + i as f32 * (area.height / GRID_ROWS as f32))
        .collect();
    (xs, ys)
}
/// High, medium and low bands, top to bottom. `None` when the value range is degenerate.
pub fn zone_bands(config: &TimelineConfig, area: Rect) -> Option<[(Rect, Rgba); 3]> {
    let high_y = mapping::value_to_y(config.high_threshold, config, area)?;
    let medium_y = mapping::value_to_y(config.medium_threshold, config, area)?;
    let band = |top: f32, bottom: f32| Rect::new(area.left, top, area.width, (bottom - top).max(0.0));
    Some([
        (band(area.top, high_y), HIGH_ZONE),
        (band(high_y, medium_y), MEDIUM_ZONE),
        (band(medium_y.max(high_y), area.bottom()), LOW_ZONE),
    ])
}
pub fn draw_background(canvas: &mut impl Canvas, config: &TimelineConfig, area: Rect) {
    canvas.fill_vertical_gradient(area, config.gradient_start, config.gradient_end);
}
pub fn draw_threshold_zones(canvas: &mut impl Canvas, config: &TimelineConfig, area: Rect) {
    let Some(bands) = zone_bands(config, area) else {
        return;
    };
    for (rect, color) in bands {
        if !rect.is_empty() {
            canvas.fill_rect(rect, color);
        }
    }
}
pub fn draw_axis(canvas: &mut impl Canvas, config: &TimelineConfig, area: Rect) {
    canvas.stroke_rect(area, FRAME_STROKE);
    if config.grid_visible {
        let (xs, ys) = grid_lines(area);
        for x in xs {
            canvas.dashed_line(
                Point::new(x, area.top),
                Point::new(x, area.bottom()),
                GRID_STROKE,
                DASH,
                DASH_GAP,
            );
        }
        for y in ys {
            canvas.dashed_line(
                Point::new(area.left, y),
                Point::new(area.right(), y),
                GRID_STROKE,
                DASH,
                DASH_GAP,
            );
        }
    }
    for tick in time_ticks(config, area) {
        let base = Point::new(tick.pos, area.bottom());
        canvas.line(base, Point::new(tick.pos, base.y + TICK_LEN), TICK_STROKE);
        canvas.text(
            Point::new(tick.pos, base.y + TICK_LEN + 2.0),
            TextAnchor::CENTER_TOP,
            &tick.label,
            TICK_TEXT,
        );
    }
    for tick in value_ticks(config, area) {
        let base = Point::new(area.left, tick.pos);
        canvas.line(Point::new(base.x - TICK_LEN, tick.pos), base, TICK_STROKE);
        canvas.text(
            Point::new(base.x - TICK_LEN - 3.0, tick.pos),
            TextAnchor::RIGHT_CENTER,
            &tick.label,
            TICK_TEXT,
        );
    }
}
/// Badge box placed up and to the right of `point`.
pub fn badge_rect(point: Point) -> Rect {
    Rect::new(point.x + 8.0, point.y - 16.0, 50.0, 20.0)
}
pub fn draw_current_value_label(
    canvas: &mut impl Canvas,
    config: &TimelineConfig,
    point: Point,
    value: f64,
) {
    let color = classify(value, config).color();
    let rect = badge_rect(point);
    canvas.fill_rounded_rect(rect, 4.0, BADGE_FILL);
    canvas.text(
        Point::new(rect.left + 4.0, rect.top + rect.height / 2.0),
        TextAnchor::LEFT_CENTER,
        &format!("{value:.1}"),
        TextStyle {
            size: 12.0,
            bold: true,
            color,
        },
    );
    canvas.circle_stroke(point, 4.0, Stroke::new(2.0, color));
}
/// Paints one complete frame back to front: gradient, zones, axes, trace, label.
pub fn render_frame<'a>(
    canvas: &mut impl Canvas,
    config: &TimelineConfig,
    samples: impl IntoIterator<Item = &'a Sample>,
    bounds: Rect,
    now: SystemTime,
) {
    let area = mapping::chart_rect(bounds, ChartInsets::default());
    if area.is_empty() {
        return;
    }
    draw_background(canvas, config, area);
    draw_threshold_zones(canvas, config, area);
    draw_axis(canvas, config, area);
    let mut latest_value = None;
    let points = mapping::map_samples(
        samples.into_iter().inspect(|s| latest_value = Some(s.value)),
        config,
        area,
        now,
    );
    if let Some(trace) = path::build_path(&points, config.smoothing_enabled) {
        canvas.stroke_path(&trace, TRACE_STROKE);
    }
    if config.current_value_label_visible {
        if let (Some(&last), Some(value)) = (points.last(), latest_value) {
            draw_current_value_label(canvas, config, last, value);
        }
    }
}
#[cfg(test)]
mod tests {
    use super::super::recording::{Op, RecordingCanvas};
    use super::*;
    use std::time::Duration;
    fn area() -> Rect {
        Rect::new(48.0, 20.0, 600.0, 200.0)
    }
    #[test]
    fn tiers_follow_thresholds() {
        let config = TimelineConfig::default();
        assert_eq!(classify(85.0, &config), LoadTier::Alert);
        assert_eq!(classify(80.0, &config), LoadTier::Alert);
        assert_eq!(classify(60.0, &config), LoadTier::Warning);
        assert_eq!(classify(50.0, &config), LoadTier::Warning);
        assert_eq!(classify(10.0, &config), LoadTier::Normal);
        assert_eq!(LoadTier::Alert.color(), Rgba::rgb(198, 40, 40));
    }
    #[test]
    fn sixty_second_window_with_ten_second_ticks_has_seven_labels() {
        let config = TimelineConfig::default();
        assert_eq!(time_intervals(&config), 6);
        let ticks = time_ticks(&config, area());
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["0s", "10s", "20s", "30s", "40s", "50s", "60s"]);
        assert_eq!(ticks[0].pos, area().right());
        assert_eq!(ticks[6].pos, area().left);
    }
    #[test]
    fn tick_wider_than_window_still_draws_one_interval() {
        let config = TimelineConfig {
            time_window_secs: 30,
            tick_interval_secs: 45,
            ..TimelineConfig::default()
        };
        let labels: Vec<String> = time_ticks(&config, area())
            .into_iter()
            .map(|t| t.label)
            .collect();
        assert_eq!(labels, ["0s", "45s"]);
    }
    #[test]
    fn value_ticks_span_range_in_quarters() {
        let config = TimelineConfig {
            load_min: -20.0,
            load_max: 100.0,
            ..TimelineConfig::default()
        };
        let ticks = value_ticks(&config, area());
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["-20", "10", "40", "70", "100"]);
        assert_eq!(ticks[0].pos, area().bottom());
        assert_eq!(ticks[4].pos, area().top);
    }
    #[test]
    fn grid_columns_follow_width() {
        let (xs, ys) = grid_lines(area());
        assert_eq!(xs.len(), 11);
        assert_eq!(xs[0], 98.0);
        assert_eq!(ys.len(), GRID_ROWS - 1);
        let (narrow, _) = grid_lines(Rect::new(0.0, 0.0, 40.0, 100.0));
        assert!(narrow.is_empty());
    }
    #[test]
    fn zones_split_at_thresholds() {
        let bands = zone_bands(&TimelineConfig::default(), area()).unwrap();
        let (high, medium, low) = (bands[0].0, bands[1].0, bands[2].0);
        assert_eq!(high.top, 20.0);
        assert_eq!(high.height, 40.0);
        assert_eq!(medium.top, 60.0);
        assert_eq!(medium.height, 60.0);
        assert_eq!(low.top, 120.0);
        assert_eq!(low.bottom(), 220.0);
    }
    #[test]
    fn zones_skipped_for_degenerate_range() {
        let config = TimelineConfig {
            load_max: 0.0,
            ..TimelineConfig::default()
        };
        assert!(zone_bands(&config, area()).is_none());
        let mut canvas = RecordingCanvas::default();
        draw_threshold_zones(&mut canvas, &config, area());
        assert!(canvas.ops.is_empty());
    }
    #[test]
    fn hidden_grid_draws_no_dashes() {
        let mut config = TimelineConfig::default();
        let mut canvas = RecordingCanvas::default();
        draw_axis(&mut canvas, &config, area());
        assert_eq!(canvas.count(|op| matches!(op, Op::Dashed(..))), 11 + 4);
        config.grid_visible = false;
        let mut canvas = RecordingCanvas::default();
        draw_axis(&mut canvas, &config, area());
        assert_eq!(canvas.count(|op| matches!(op, Op::Dashed(..))), 0);
        assert_eq!(canvas.count(|op| matches!(op, Op::StrokeRect(_))), 1);
    }
    #[test]
    fn frame_ends_with_trace_and_badge() {
        let config = TimelineConfig::default();
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(10_000);
        let samples = [
            Sample::new(now - Duration::from_secs(20), 30.0),
            Sample::new(now - Duration::from_secs(10), 55.0),
            Sample::new(now, 85.0),
        ];
        let mut canvas = RecordingCanvas::default();
        render_frame(
            &mut canvas,
            &config,
            &samples,
            Rect::new(0.0, 0.0, 668.0, 248.0),
            now,
        );
        assert!(matches!(canvas.ops.first(), Some(Op::Gradient(_))));
        assert_eq!(canvas.paths().len(), 1);
        assert!(canvas.paths()[0].is_smooth());
        assert!(canvas.texts().contains(&"85.0"));
        let alert = LoadTier::Alert.color();
        assert!(matches!(canvas.ops.last(), Some(Op::Circle(p, c)) if *c == alert && p.x == 648.0));
    }
    #[test]
    fn single_sample_gets_badge_without_trace() {
        let config = TimelineConfig::default();
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(10_000);
        let samples = [Sample::new(now, 12.34)];
        let mut canvas = RecordingCanvas::default();
        render_frame(&mut canvas, &config, &samples, Rect::new(0.0, 0.0, 400.0, 220.0), now);
        assert!(canvas.paths().is_empty());
        assert!(canvas.texts().contains(&"12.3"));
    }
    #[test]
    fn tiny_bounds_draw_nothing() {
        let mut canvas = RecordingCanvas::default();
        render_frame(
            &mut canvas,
            &TimelineConfig::default(),
            &[],
            Rect::new(0.0, 0.0, 60.0, 40.0),
            SystemTime::UNIX_EPOCH,
        );
        assert!(canvas.ops.is_empty());
    }
}
