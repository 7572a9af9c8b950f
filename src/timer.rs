//! Timer Pool - Fixed-capacity periodic callback table
//!
//! Multiplexes an open-ended set of periodic application callbacks onto a
//! fixed table of [`MAX_TIMERS`] slots. Each occupied slot pairs an interval
//! and next-fire deadline with a [`CallbackHandle`]; the event loop asks for
//! the earliest deadline to bound its wait, then fires whatever is due.
//!
//! Re-adding a callback that is already registered is a no-op: the first
//! registration and its interval stay active. Removing a callback that was
//! never added is equally a no-op. Only a full table is an error.
//!
//! # API
//!
//! - `add(interval, cb)` - Arm a periodic timer (identity-deduped)
//! - `remove(cb)` - Disarm and free the slot holding `cb`
//! - `next_deadline()` - Earliest pending fire, for the pump's wait timeout
//! - `fire_due(now)` - Invoke and reschedule every due slot
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use roadmap_shell::timer::TimerPool;
//!
//! fn poll_gps() {}
//!
//! let mut timers = TimerPool::new();
//! timers.add(Duration::from_millis(200), poll_gps).unwrap();
//! timers.fire_due(Instant::now() + Duration::from_millis(250));
//! timers.remove(poll_gps);
//! ```

use std::time::{Duration, Instant};

use crate::callback::{CallbackHandle, ShellCallback};
use crate::types::ShellError;

/// Capacity of the timer table.
pub const MAX_TIMERS: usize = 64;

// =============================================================================
// TIMER SLOT
// =============================================================================

/// One armed timer: its period, next deadline and target callback.
#[derive(Clone, Copy, Debug)]
struct TimerSlot {
    interval: Duration,
    next_fire: Instant,
    callback: CallbackHandle,
}

// =============================================================================
// TIMER POOL
// =============================================================================

/// Fixed table of periodic timers keyed by callback identity.
#[derive(Debug)]
pub struct TimerPool {
    slots: [Option<TimerSlot>; MAX_TIMERS],
}

impl TimerPool {
    /// An empty pool; every slot starts free.
    pub fn new() -> Self {
        Self {
            slots: [None; MAX_TIMERS],
        }
    }

    /// Arm a periodic timer firing every `interval`.
    ///
    /// If `callback` is already registered the call returns `Ok` without
    /// touching the existing slot, so the original interval stays active.
    /// A full table returns [`ShellError::TooManyTimers`] and leaves the
    /// table unchanged.
    pub fn add(&mut self, interval: Duration, callback: ShellCallback) -> Result<(), ShellError> {
        if self.slot_of(callback).is_some() {
            return Ok(());
        }

        let empty = self
            .slots
            .iter()
            .position(|slot| slot.is_none())
            .ok_or(ShellError::TooManyTimers)?;

        self.slots[empty] = Some(TimerSlot {
            interval,
            next_fire: Instant::now() + interval,
            callback: CallbackHandle::new(callback),
        });
        Ok(())
    }

    /// Disarm the timer registered for `callback` and free its slot.
    ///
    /// Removing a callback that is not registered is a no-op.
    pub fn remove(&mut self, callback: ShellCallback) {
        if let Some(index) = self.slot_of(callback) {
            self.slots[index] = None;
        }
    }

    /// Whether `callback` currently occupies a slot.
    pub fn contains(&self, callback: ShellCallback) -> bool {
        self.slot_of(callback).is_some()
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Earliest pending deadline across all occupied slots.
    ///
    /// `None` when the table is empty, in which case the event loop falls
    /// back to its idle tick.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.slots
            .iter()
            .flatten()
            .map(|slot| slot.next_fire)
            .min()
    }

    /// Fire every slot whose deadline has passed, rescheduling each to
    /// `now + interval`. A slow pump pass coalesces missed periods into a
    /// single fire rather than bursting to catch up.
    ///
    /// Returns the number of callbacks invoked.
    pub fn fire_due(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        for slot in self.slots.iter_mut() {
            if let Some(armed) = slot {
                if armed.next_fire <= now {
                    armed.next_fire = now + armed.interval;
                    let handle = armed.callback;
                    handle.fire();
                    fired += 1;
                }
            }
        }
        fired
    }

    /// Disarm everything. Dropping the pool has the same effect.
    pub fn clear(&mut self) {
        self.slots = [None; MAX_TIMERS];
    }

    fn slot_of(&self, callback: ShellCallback) -> Option<usize> {
        self.slots.iter().position(|slot| {
            slot.as_ref()
                .is_some_and(|armed| armed.callback.same(callback))
        })
    }
}

impl Default for TimerPool {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
