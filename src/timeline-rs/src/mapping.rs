use std::time::SystemTime;
use super::buffer::Sample;
use super::config::TimelineConfig;
use super::geometry::{Point, Rect};
/// Space kept around the plot area for axis labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}
impl Default for ChartInsets {
    fn default() -> Self {
        Self {
            left: 48.0,
            top: 20.0,
            right: 20.0,
            bottom: 28.0,
        }
    }
}
/// Plot rectangle inside the widget bounds.
pub fn chart_rect(bounds: Rect, insets: ChartInsets) -> Rect {
    bounds.inset(insets.left, insets.top, insets.right, insets.bottom)
}
/// Signed age of `timestamp` in seconds; future timestamps are negative.
pub fn seconds_ago(timestamp: SystemTime, now: SystemTime) -> f64 {
    match now.duration_since(timestamp) {
        Ok(age) => age.as_secs_f64(),
        Err(ahead) => -ahead.duration().as_secs_f64(),
    }
}
/// Horizontal position in `[0, 1]`: 1 for "now", 0 at the window boundary.
pub fn time_ratio(seconds_ago: f64, window_secs: u32) -> f64 {
    if window_secs == 0 {
        return 1.0;
    }
    (1.0 - seconds_ago / f64::from(window_secs)).clamp(0.0, 1.0)
}
/// Vertical position in `[0, 1]`, `None` for an empty or inverted range.
pub fn value_ratio(value: f64, min: f64, max: f64) -> Option<f64> {
    let span = max - min;
    if span <= 0.0 {
        return None;
    }
    Some(((value - min) / span).clamp(0.0, 1.0))
}
/// Screen y of `value` inside `area`, clamped to the area.
pub fn value_to_y(value: f64, config: &TimelineConfig, area: Rect) -> Option<f32> {
    let ratio = value_ratio(value, config.load_min, config.load_max)?;
    Some(area.bottom() - ratio as f32 * area.height)
}
/// One point per sample, oldest first. Empty when the value range is degenerate.
pub fn map_samples<'a>(
    samples: impl IntoIterator<Item = &'a Sample>,
    config: &TimelineConfig,
    area: Rect,
    now: SystemTime,
) -> Vec<Point> {
    if config.load_span().is_none() {
        return Vec::new();
    }
    samples
        .into_iter()
        .filter_map(|sample| {
            let rx = time_ratio(seconds_ago(sample.timestamp, now), config.time_window_secs);
            let ry = value_ratio(sample.value, config.load_min, config.load_max)?;
            Some(Point::new(
                area.left + rx as f32 * area.width,
                area.bottom() - ry as f32 * area.height,
            ))
        })
        .collect()
}
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    fn now() -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(5_000)
    }
    #[test]
    fn age_equal_to_window_maps_to_left_edge() {
        assert_eq!(time_ratio(60.0, 60), 0.0);
        assert_eq!(time_ratio(0.0, 60), 1.0);
        assert_eq!(time_ratio(30.0, 60), 0.5);
        assert_eq!(time_ratio(90.0, 60), 0.0);
        assert_eq!(time_ratio(-5.0, 60), 1.0);
    }
    #[test]
    fn value_ratio_clamps_to_unit_range() {
        assert_eq!(value_ratio(0.0, 0.0, 100.0), Some(0.0));
        assert_eq!(value_ratio(100.0, 0.0, 100.0), Some(1.0));
        assert_eq!(value_ratio(-20.0, 0.0, 100.0), Some(0.0));
        assert_eq!(value_ratio(250.0, 0.0, 100.0), Some(1.0));
        assert_eq!(value_ratio(50.0, 10.0, 10.0), None);
    }
    #[test]
    fn future_timestamps_have_negative_age() {
        let ahead = now() + Duration::from_millis(1500);
        assert_eq!(seconds_ago(ahead, now()), -1.5);
        assert_eq!(seconds_ago(now() - Duration::from_secs(2), now()), 2.0);
    }
    #[test]
    fn samples_map_newest_right_oldest_left() {
        let config = TimelineConfig::default();
        let area = Rect::new(10.0, 20.0, 600.0, 100.0);
        let samples = [
            Sample::new(now() - Duration::from_secs(60), 0.0),
            Sample::new(now() - Duration::from_secs(30), 50.0),
            Sample::new(now(), 100.0),
        ];
        let points = map_samples(&samples, &config, area, now());
        assert_eq!(
            points,
            vec![
                Point::new(10.0, 120.0),
                Point::new(310.0, 70.0),
                Point::new(610.0, 20.0),
            ]
        );
    }
    #[test]
    fn degenerate_range_maps_nothing() {
        let config = TimelineConfig {
            load_min: 100.0,
            load_max: 0.0,
            ..TimelineConfig::default()
        };
        let samples = [Sample::new(now(), 10.0)];
        assert!(map_samples(&samples, &config, Rect::new(0.0, 0.0, 10.0, 10.0), now()).is_empty());
    }
}
