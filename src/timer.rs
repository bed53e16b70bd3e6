//! Ownership of pending timers.
//!
//! A view that schedules timers keeps their handles here so that replacing
//! or tearing down the view always cancels whatever is still pending.

/// A handle to a scheduled callback that can be cancelled.
pub trait Cancel {
    fn cancel(self);
}

/// Holds at most one pending timer.
#[derive(Debug)]
pub struct TimerSlot<H: Cancel> {
    pending: Option<H>,
}

impl<H: Cancel> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H: Cancel> TimerSlot<H> {
    /// Cancels the pending timer, if any, then stores whatever `schedule`
    /// starts. The previous timer is gone before the next one exists.
    pub fn arm<E>(&mut self, schedule: impl FnOnce() -> Result<H, E>) -> Result<(), E> {
        self.clear();
        self.pending = Some(schedule()?);
        Ok(())
    }

    pub fn clear(&mut self) {
        if let Some(prev) = self.pending.take() {
            prev.cancel();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

impl<H: Cancel> Drop for TimerSlot<H> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Holds a batch of independent pending timers.
#[derive(Debug)]
pub struct TimerSet<H: Cancel> {
    pending: Vec<H>,
}

impl<H: Cancel> Default for TimerSet<H> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<H: Cancel> TimerSet<H> {
    pub fn push(&mut self, handle: H) {
        self.pending.push(handle);
    }

    pub fn cancel_all(&mut self) {
        for handle in self.pending.drain(..) {
            handle.cancel();
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<H: Cancel> Drop for TimerSet<H> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    /// Tracks pending timers so tests can check nothing is left running.
    #[derive(Debug, Clone, Default)]
    pub(crate) struct FakeClock {
        pending: Rc<RefCell<BTreeSet<u64>>>,
        next_id: Rc<RefCell<u64>>,
        peak: Rc<RefCell<usize>>,
    }

    impl FakeClock {
        pub(crate) fn schedule(&self) -> FakeHandle {
            let id = {
                let mut next = self.next_id.borrow_mut();
                *next += 1;
                *next
            };
            let live = {
                let mut pending = self.pending.borrow_mut();
                pending.insert(id);
                pending.len()
            };
            let mut peak = self.peak.borrow_mut();
            *peak = (*peak).max(live);
            FakeHandle {
                id,
                pending: self.pending.clone(),
            }
        }

        /// Runs every pending callback; their handles become stale.
        pub(crate) fn fire_all(&self) -> usize {
            let mut pending = self.pending.borrow_mut();
            let fired = pending.len();
            pending.clear();
            fired
        }

        pub(crate) fn live(&self) -> usize {
            self.pending.borrow().len()
        }

        pub(crate) fn peak(&self) -> usize {
            *self.peak.borrow()
        }
    }

    #[derive(Debug)]
    pub(crate) struct FakeHandle {
        id: u64,
        pending: Rc<RefCell<BTreeSet<u64>>>,
    }

    impl Cancel for FakeHandle {
        // cancelling a fired timer is a no-op, like clearTimeout
        fn cancel(self) {
            self.pending.borrow_mut().remove(&self.id);
        }
    }

    #[test]
    fn test_slot_replaces_and_cancels() {
        let clock = FakeClock::default();
        let mut slot = TimerSlot::default();
        for _ in 0..5 {
            slot.arm(|| Ok::<_, ()>(clock.schedule())).expect("fake clock never fails");
            assert_eq!(clock.live(), 1);
        }
        assert_eq!(clock.peak(), 1);
        assert!(slot.is_armed());
        slot.clear();
        assert_eq!(clock.live(), 0);
        assert!(!slot.is_armed());
    }

    #[test]
    fn test_slot_cancels_on_drop() {
        let clock = FakeClock::default();
        {
            let mut slot = TimerSlot::default();
            slot.arm(|| Ok::<_, ()>(clock.schedule())).expect("fake clock never fails");
        }
        assert_eq!(clock.live(), 0);
    }

    #[test]
    fn test_replacing_fired_timer_is_harmless() {
        let clock = FakeClock::default();
        let mut slot = TimerSlot::default();
        slot.arm(|| Ok::<_, ()>(clock.schedule())).expect("fake clock never fails");
        assert_eq!(clock.fire_all(), 1);
        slot.arm(|| Ok::<_, ()>(clock.schedule())).expect("fake clock never fails");
        assert_eq!(clock.live(), 1);
    }

    #[test]
    fn test_failed_schedule_leaves_slot_empty() {
        let clock = FakeClock::default();
        let mut slot = TimerSlot::default();
        slot.arm(|| Ok::<_, ()>(clock.schedule())).expect("fake clock never fails");
        assert_eq!(slot.arm(|| Err::<FakeHandle, _>("no window")), Err("no window"));
        assert!(!slot.is_armed());
        assert_eq!(clock.live(), 0);
    }

    #[test]
    fn test_set_cancels_everything() {
        let clock = FakeClock::default();
        let mut set = TimerSet::default();
        for _ in 0..4 {
            set.push(clock.schedule());
        }
        assert_eq!(set.len(), 4);
        assert_eq!(clock.live(), 4);
        drop(set);
        assert_eq!(clock.live(), 0);
    }
}
