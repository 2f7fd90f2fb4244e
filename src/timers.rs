use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Tap,
    DoubleTap,
    LongTouch,
}

/// A single host-owned timer. It never fires on its own: the owner polls it
/// with [`TimerSlot::take_expired`], usually through [`GestureTimers::expire`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerSlot {
    deadline: Option<Instant>,
}

impl TimerSlot {
    /// (Re)arm the timer. A pending deadline is replaced.
    pub fn start(&mut self, now: Instant, duration: Duration) {
        self.deadline = Some(now + duration);
    }

    pub fn clear(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true exactly once when `now` has reached the deadline.
    pub fn take_expired(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerDurations {
    pub tap: Duration,
    pub double_tap: Duration,
    pub long_touch: Duration,
}

impl Default for TimerDurations {
    fn default() -> Self {
        Self {
            tap: Duration::from_millis(180),
            double_tap: Duration::from_millis(400),
            long_touch: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Default)]
pub struct GestureTimers {
    pub tap: TimerSlot,
    pub double_tap: TimerSlot,
    pub long_touch: TimerSlot,
}

impl GestureTimers {
    /// Collect every timer that expired by `now`, earliest deadline first.
    pub fn expire(&mut self, now: Instant) -> Vec<TimerKind> {
        let mut due = Vec::new();
        for kind in [TimerKind::Tap, TimerKind::DoubleTap, TimerKind::LongTouch] {
            let slot = self.slot_mut(kind);
            let deadline = slot.deadline();
            if let (Some(deadline), true) = (deadline, slot.take_expired(now)) {
                due.push((deadline, kind));
            }
        }
        due.sort_by_key(|(deadline, _)| *deadline);
        due.into_iter().map(|(_, kind)| kind).collect()
    }

    pub fn slot_mut(&mut self, kind: TimerKind) -> &mut TimerSlot {
        match kind {
            TimerKind::Tap => &mut self.tap,
            TimerKind::DoubleTap => &mut self.double_tap,
            TimerKind::LongTouch => &mut self.long_touch,
        }
    }
}
