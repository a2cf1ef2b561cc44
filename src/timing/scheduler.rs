use std::collections::BTreeMap;

use crate::foundation::core::Millis;
use crate::foundation::error::{GuideError, GuideResult};

/// Handle to a timer registered with a [`Scheduler`].
///
/// Ids are never reused, so a stale handle can never cancel or match a newer timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerKind {
    Timeout,
    Interval { period_ms: u64 },
}

#[derive(Clone, Copy, Debug)]
struct TimerEntry {
    due: Millis,
    kind: TimerKind,
}

/// One timer expiry produced by [`Scheduler::advance_to`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fired {
    /// Timer that expired.
    pub id: TimerId,
    /// Clock time at which it was due.
    pub at: Millis,
}

/// Single-threaded timer registry for one mounted screen.
///
/// Time only moves when the host calls [`Scheduler::advance_to`], which returns every expiry up
/// to and including the target time, in due order (ties break by registration order). The host
/// dispatches each [`Fired`] back to the screen, which ignores ids it no longer owns.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: Millis,
    next_id: u64,
    timers: BTreeMap<TimerId, TimerEntry>,
}

impl Scheduler {
    /// New scheduler with its clock at `now`.
    pub fn new(now: Millis) -> Self {
        Self {
            now,
            next_id: 0,
            timers: BTreeMap::new(),
        }
    }

    /// Current clock time.
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Number of live timers.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Earliest due time among live timers.
    pub fn next_due(&self) -> Option<Millis> {
        self.timers.values().map(|e| e.due).min()
    }

    /// Return `true` if `id` is still registered.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Fire once after `delay_ms`.
    pub fn set_timeout(&mut self, delay_ms: u64) -> TimerId {
        self.insert(self.now.after(delay_ms), TimerKind::Timeout)
    }

    /// Fire every `period_ms`, first at `now + period_ms`.
    pub fn set_interval(&mut self, period_ms: u64) -> GuideResult<TimerId> {
        if period_ms == 0 {
            return Err(GuideError::validation("interval period must be > 0"));
        }
        Ok(self.insert(self.now.after(period_ms), TimerKind::Interval { period_ms }))
    }

    /// Cancel `id`. Returns `false` when it was already cancelled or expired.
    pub fn clear(&mut self, id: TimerId) -> bool {
        let removed = self.timers.remove(&id).is_some();
        if removed {
            tracing::debug!(?id, "timer cleared");
        }
        removed
    }

    /// Cancel every live timer.
    pub fn clear_all(&mut self) {
        self.timers.clear();
    }

    /// Move the clock forward to `t` and collect all expiries on the way, including those due
    /// exactly at `t`.
    ///
    /// Moving backwards is a no-op. Timeouts are removed once fired; intervals re-arm at
    /// `due + period`, so a long jump yields one [`Fired`] per elapsed period.
    pub fn advance_to(&mut self, t: Millis) -> Vec<Fired> {
        self.advance(t, true)
    }

    /// Like [`Self::advance_to`], but leaves expiries due exactly at `t` pending.
    ///
    /// Used before applying an input event at `t`, so the event is ordered ahead of a timer
    /// that would expire at the same instant.
    pub fn advance_before(&mut self, t: Millis) -> Vec<Fired> {
        self.advance(t, false)
    }

    fn advance(&mut self, t: Millis, inclusive: bool) -> Vec<Fired> {
        let mut fired = Vec::new();
        if t < self.now {
            return fired;
        }

        while let Some((id, entry)) = self.earliest_expired(t, inclusive) {
            fired.push(Fired { id, at: entry.due });
            match entry.kind {
                TimerKind::Timeout => {
                    self.timers.remove(&id);
                }
                TimerKind::Interval { period_ms } => {
                    let next = entry.due.after(period_ms);
                    if next == entry.due {
                        // Clock saturated; the interval can never fire again.
                        self.timers.remove(&id);
                    } else if let Some(e) = self.timers.get_mut(&id) {
                        e.due = next;
                    }
                }
            }
        }

        self.now = t;
        fired
    }

    fn earliest_expired(&self, limit: Millis, inclusive: bool) -> Option<(TimerId, TimerEntry)> {
        self.timers
            .iter()
            .filter(|(_, e)| if inclusive { e.due <= limit } else { e.due < limit })
            .min_by_key(|(id, e)| (e.due, **id))
            .map(|(id, e)| (*id, *e))
    }

    fn insert(&mut self, due: Millis, kind: TimerKind) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.insert(id, TimerEntry { due, kind });
        tracing::debug!(?id, due = due.0, ?kind, "timer scheduled");
        id
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timing/scheduler.rs"]
mod tests;
