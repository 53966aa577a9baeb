use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, SystemTime};
/// Source of "now" for pruning and mapping.
pub trait Clock {
    fn now(&self) -> SystemTime;
}
/// Wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}
/// Settable clock for tests and deterministic playback. Clones share the same instant.
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Rc<Cell<SystemTime>>,
}
impl ManualClock {
    pub fn new(start: SystemTime) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }
    pub fn set(&self, now: SystemTime) {
        self.now.set(now);
    }
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}
impl Default for ManualClock {
    fn default() -> Self {
        Self::new(SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000))
    }
}
impl Clock for ManualClock {
    fn now(&self) -> SystemTime {
        self.now.get()
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn clones_share_one_instant() {
        let clock = ManualClock::default();
        let view = clock.clone();
        let start = clock.now();
        clock.advance(Duration::from_secs(5));
        assert_eq!(view.now(), start + Duration::from_secs(5));
        view.set(start);
        assert_eq!(clock.now(), start);
    }
}
