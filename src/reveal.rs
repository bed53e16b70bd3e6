//! One-shot staggered reveal of a batch of items.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct StaggeredReveal {
    visible: Vec<bool>,
    interval: Duration,
    triggered: bool,
}

impl StaggeredReveal {
    pub fn new(len: usize, interval: Duration) -> Self {
        Self {
            visible: vec![false; len],
            interval,
            triggered: false,
        }
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// Returns when each item should appear, relative to now. Only the
    /// first call yields a schedule; later calls return nothing.
    pub fn trigger(&mut self) -> Vec<(usize, Duration)> {
        if self.triggered {
            return Vec::new();
        }
        self.triggered = true;
        (0..self.visible.len())
            .map(|i| (i, self.delay_of(i)))
            .collect()
    }

    fn delay_of(&self, index: usize) -> Duration {
        self.interval
            .saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Returns true if the item was hidden before. Does nothing until
    /// the reveal has been triggered.
    pub fn mark_visible(&mut self, index: usize) -> bool {
        if !self.triggered {
            return false;
        }
        match self.visible.get_mut(index) {
            Some(v) if !*v => {
                *v = true;
                true
            }
            _ => false,
        }
    }

    /// Marks every item whose delay has passed `elapsed` after the trigger.
    pub fn visible_after(&mut self, elapsed: Duration) {
        if !self.triggered {
            return;
        }
        for i in 0..self.visible.len() {
            if self.delay_of(i) <= elapsed {
                self.visible[i] = true;
            }
        }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn all_visible(&self) -> bool {
        self.visible.iter().all(|v| *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::tests::FakeClock;
    use crate::timer::TimerSet;

    const INTERVAL: Duration = Duration::from_millis(200);

    #[test]
    fn test_nothing_visible_before_trigger() {
        let mut reveal = StaggeredReveal::new(5, INTERVAL);
        reveal.visible_after(Duration::from_secs(60));
        assert!((0..5).all(|i| !reveal.is_visible(i)));
    }

    #[test]
    fn test_mark_visible_before_trigger_is_ignored() {
        let mut reveal = StaggeredReveal::new(3, INTERVAL);
        assert!(!reveal.mark_visible(0));
        assert!(!reveal.is_visible(0));
        assert!(!reveal.is_triggered());

        reveal.trigger();
        assert!(reveal.mark_visible(0));
        assert!(reveal.is_visible(0));
    }

    #[test]
    fn test_all_visible_after_last_delay() {
        let mut reveal = StaggeredReveal::new(8, INTERVAL);
        let schedule = reveal.trigger();
        assert_eq!(schedule.len(), 8);
        assert_eq!(schedule[0], (0, Duration::ZERO));
        assert_eq!(schedule[3], (3, Duration::from_millis(600)));

        reveal.visible_after(Duration::from_millis(1399));
        assert!(reveal.is_visible(6));
        assert!(!reveal.is_visible(7));
        reveal.visible_after(INTERVAL * 7);
        assert!(reveal.all_visible());
    }

    #[test]
    fn test_trigger_is_one_shot() {
        let mut reveal = StaggeredReveal::new(3, INTERVAL);
        assert_eq!(reveal.trigger().len(), 3);
        assert!(reveal.trigger().is_empty());
        assert!(reveal.is_triggered());
    }

    #[test]
    fn test_mark_visible_is_idempotent() {
        let mut reveal = StaggeredReveal::new(2, INTERVAL);
        reveal.trigger();
        assert!(reveal.mark_visible(1));
        assert!(!reveal.mark_visible(1));
        assert!(!reveal.mark_visible(5));
        assert!(reveal.is_visible(1));
        assert!(!reveal.is_visible(0));
    }

    #[test]
    fn test_teardown_cancels_pending_flips() {
        let clock = FakeClock::default();
        let mut reveal = StaggeredReveal::new(4, INTERVAL);
        let mut timers = TimerSet::default();
        for _ in reveal.trigger() {
            timers.push(clock.schedule());
        }
        // a second intersection schedules nothing
        for _ in reveal.trigger() {
            timers.push(clock.schedule());
        }
        assert_eq!(clock.live(), 4);
        drop(timers);
        assert_eq!(clock.live(), 0);
    }
}
