//! Minimum-interval gate for rapid-fire triggers.
//!
//! Provides [`DebounceTimer`], which accepts an event only when more than a
//! configured number of milliseconds has passed since the last accepted one.
//! Useful both for bouncing mechanical inputs and for rate-limiting work done
//! from a tight polling loop.

use crate::time::{Millis, TimeSource};

/// Suppresses triggers that arrive within a minimum interval of the last accepted one.
///
/// The timer is owned by the loop that polls it. It never blocks and cannot
/// fail. For access from more than one execution context, wrap it in
/// [`SharedDebounceTimer`](crate::SharedDebounceTimer).
///
/// # Example
///
/// ```
/// use shiftlight_bridge::{DebounceTimer, Millis};
///
/// let mut timer = DebounceTimer::with_interval(100);
/// assert!(timer.should_accept(Millis(0)));
/// assert!(!timer.should_accept(Millis(90)));
/// assert!(timer.should_accept(Millis(101)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceTimer {
    last_trigger: Option<Millis>,
    minimum_interval: u32,
}

impl DebounceTimer {
    /// Creates a timer with a zero interval, which accepts every call.
    ///
    /// Call [`configure`](Self::configure) once the interval is known.
    pub const fn new() -> Self {
        Self::with_interval(0)
    }

    /// Creates a timer with the given minimum interval in milliseconds.
    pub const fn with_interval(minimum_interval: u32) -> Self {
        Self {
            last_trigger: None,
            minimum_interval,
        }
    }

    /// Sets the minimum interval in milliseconds. Zero disables debouncing.
    pub fn configure(&mut self, minimum_interval: u32) {
        self.minimum_interval = minimum_interval;
    }

    /// Returns `true` and records `now` if more than the minimum interval has
    /// elapsed since the last accepted trigger. Otherwise leaves the timer untouched.
    ///
    /// The first call after creation or [`reset`](Self::reset) is always accepted,
    /// as is every call while the interval is zero.
    pub fn should_accept(&mut self, now: Millis) -> bool {
        let elapsed = match self.last_trigger {
            Some(last) => now.wrapping_since(last),
            None => u32::MAX,
        };

        if self.last_trigger.is_none()
            || self.minimum_interval == 0
            || elapsed > self.minimum_interval
        {
            self.last_trigger = Some(now);
            #[cfg(feature = "defmt")]
            defmt::trace!("debounce: accepted at {} ms ({} ms elapsed)", now.0, elapsed);
            return true;
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("debounce: rejected at {} ms ({} ms elapsed)", now.0, elapsed);
        false
    }

    /// Reads the clock once and applies [`should_accept`](Self::should_accept).
    pub fn poll<T: TimeSource + ?Sized>(&mut self, time_source: &T) -> bool {
        self.should_accept(time_source.now())
    }

    /// Forgets the last accepted trigger, as if the timer had just been created.
    pub fn reset(&mut self) {
        self.last_trigger = None;
    }

    /// Returns the configured minimum interval in milliseconds.
    pub fn minimum_interval(&self) -> u32 {
        self.minimum_interval
    }

    /// Returns the timestamp of the last accepted trigger, or zero if none yet.
    pub fn last_trigger(&self) -> Millis {
        self.last_trigger.unwrap_or(Millis::ZERO)
    }

    /// Returns `true` once a trigger has been accepted.
    pub fn has_triggered(&self) -> bool {
        self.last_trigger.is_some()
    }
}
