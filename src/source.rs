use std::collections::VecDeque;
use std::time::{Duration, SystemTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::timeline::Sample;
/// Something that can yield the next load reading on demand.
pub trait LoadSource {
    fn next_sample(&mut self, now: SystemTime, min: f64, max: f64) -> Option<Sample>;
}
/// Uniform value inside the configured range plus a little jitter.
pub struct RandomLoadSource {
    rng: StdRng,
    jitter: f64,
}
impl RandomLoadSource {
    pub fn new(jitter: f64) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            jitter: jitter.abs(),
        }
    }
    pub fn seeded(seed: u64, jitter: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            jitter: jitter.abs(),
        }
    }
    pub fn value(&mut self, min: f64, max: f64) -> f64 {
        let base = if max > min {
            self.rng.gen_range(min..max)
        } else {
            min
        };
        let jitter = if self.jitter > 0.0 {
            self.rng.gen_range(-self.jitter..self.jitter)
        } else {
            0.0
        };
        base + jitter
    }
}
impl LoadSource for RandomLoadSource {
    fn next_sample(&mut self, now: SystemTime, min: f64, max: f64) -> Option<Sample> {
        Some(Sample::new(now, self.value(min, max)))
    }
}
/// In-memory values for tests and deterministic playback.
pub struct ManualSource {
    queue: VecDeque<f64>,
}
impl ManualSource {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            queue: values.into_iter().collect(),
        }
    }
}
impl LoadSource for ManualSource {
    fn next_sample(&mut self, now: SystemTime, _min: f64, _max: f64) -> Option<Sample> {
        self.queue.pop_front().map(|v| Sample::new(now, v))
    }
}
/// One sample per second across the whole window, oldest first, ending at `now`.
pub fn synthetic_trace(
    source: &mut RandomLoadSource,
    now: SystemTime,
    window_secs: u32,
    min: f64,
    max: f64,
) -> Vec<Sample> {
    (0..=u64::from(window_secs))
        .rev()
        .map(|age| Sample::new(now - Duration::from_secs(age), source.value(min, max)))
        .collect()
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn random_values_stay_within_range_and_jitter() {
        let mut source = RandomLoadSource::seeded(7, 5.0);
        for _ in 0..500 {
            let v = source.value(0.0, 100.0);
            assert!((-5.0..105.0).contains(&v), "{v}");
        }
    }
    #[test]
    fn degenerate_range_uses_minimum() {
        let mut source = RandomLoadSource::seeded(1, 0.0);
        assert_eq!(source.value(40.0, 40.0), 40.0);
        assert_eq!(source.value(40.0, 10.0), 40.0);
    }
    #[test]
    fn synthetic_trace_spans_window() {
        let mut source = RandomLoadSource::seeded(3, 0.0);
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        let trace = synthetic_trace(&mut source, now, 60, 0.0, 100.0);
        assert_eq!(trace.len(), 61);
        assert_eq!(trace[0].timestamp, now - Duration::from_secs(60));
        assert_eq!(trace[60].timestamp, now);
        assert!(trace.iter().all(|s| (0.0..100.0).contains(&s.value)));
    }
    #[test]
    fn manual_source_drains_in_order() {
        let mut source = ManualSource::new([1.0, 2.0]);
        let now = SystemTime::now();
        assert_eq!(source.next_sample(now, 0.0, 1.0).map(|s| s.value), Some(1.0));
        assert_eq!(source.next_sample(now, 0.0, 1.0).map(|s| s.value), Some(2.0));
        assert!(source.next_sample(now, 0.0, 1.0).is_none());
    }
}
