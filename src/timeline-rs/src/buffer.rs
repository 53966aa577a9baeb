use std::collections::VecDeque;
use std::time::{Duration, SystemTime};
/// One observation of the load metric.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub timestamp: SystemTime,
    pub value: f64,
}
impl Sample {
    pub fn new(timestamp: SystemTime, value: f64) -> Self {
        Self { timestamp, value }
    }
}
/// Time-ordered samples trimmed to a trailing window.
///
/// Pruning only trims the front: the sequence is expected to arrive in
/// timestamp order, so the oldest retained sample decides when to stop.
#[derive(Clone, Debug)]
pub struct SampleStore {
    data: VecDeque<Sample>,
    window: Duration,
}
impl SampleStore {
    pub fn new(window_secs: u32) -> Self {
        Self {
            data: VecDeque::new(),
            window: Duration::from_secs(u64::from(window_secs.max(1))),
        }
    }
    pub fn set_window(&mut self, window_secs: u32, now: SystemTime) {
        self.window = Duration::from_secs(u64::from(window_secs.max(1)));
        self.prune(now);
    }
    pub fn append(&mut self, sample: Sample, now: SystemTime) {
        self.data.push_back(sample);
        self.prune(now);
    }
    pub fn replace_all(&mut self, samples: impl IntoIterator<Item = Sample>, now: SystemTime) {
        self.data = samples.into_iter().collect();
        self.prune(now);
    }
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.data.iter()
    }
    pub fn latest(&self) -> Option<&Sample> {
        self.data.back()
    }
    pub fn to_vec(&self) -> Vec<Sample> {
        self.data.iter().copied().collect()
    }
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Drops samples from the front whose timestamp is before `now - window`.
    pub fn prune(&mut self, now: SystemTime) -> usize {
        let Some(bound) = now.checked_sub(self.window) else {
            return 0;
        };
        let before = self.data.len();
        while let Some(front) = self.data.front() {
            if front.timestamp < bound {
                self.data.pop_front();
            } else {
                break;
            }
        }
        let dropped = before - self.data.len();
        if dropped > 0 {
            log::trace!("pruned {dropped} samples older than {:?}", self.window);
        }
        dropped
    }
}
