//! Debounce timer shareable between interrupt handlers and the main loop.

use core::cell::Cell;
use critical_section::Mutex;

use crate::debounce::DebounceTimer;
use crate::time::{Millis, TimeSource};

/// A [`DebounceTimer`] guarded by a critical section.
///
/// The check-then-update in [`DebounceTimer::should_accept`] is not atomic, so
/// a timer touched from more than one context (an EXTI handler and the main
/// loop, say) must run it with interrupts masked. Every method here does its
/// whole read-modify-write inside a single `critical_section::with`.
///
/// ```
/// # use shiftlight_bridge::SharedDebounceTimer;
/// static BUTTON_GATE: SharedDebounceTimer = SharedDebounceTimer::new(50);
/// ```
pub struct SharedDebounceTimer {
    inner: Mutex<Cell<DebounceTimer>>,
}

impl SharedDebounceTimer {
    /// Creates a shared timer with the given minimum interval in milliseconds.
    pub const fn new(minimum_interval: u32) -> Self {
        Self {
            inner: Mutex::new(Cell::new(DebounceTimer::with_interval(minimum_interval))),
        }
    }

    /// Atomically applies [`DebounceTimer::should_accept`].
    pub fn should_accept(&self, now: Millis) -> bool {
        critical_section::with(|cs| {
            let cell = self.inner.borrow(cs);
            let mut timer = cell.get();
            let accepted = timer.should_accept(now);
            cell.set(timer);
            accepted
        })
    }

    /// Reads the clock and checks it in one critical section.
    pub fn poll<T: TimeSource + ?Sized>(&self, time_source: &T) -> bool {
        critical_section::with(|cs| {
            let cell = self.inner.borrow(cs);
            let mut timer = cell.get();
            let accepted = timer.poll(time_source);
            cell.set(timer);
            accepted
        })
    }

    /// Sets the minimum interval in milliseconds.
    pub fn configure(&self, minimum_interval: u32) {
        critical_section::with(|cs| {
            let cell = self.inner.borrow(cs);
            let mut timer = cell.get();
            timer.configure(minimum_interval);
            cell.set(timer);
        });
    }

    /// Returns a copy of the current timer state.
    pub fn snapshot(&self) -> DebounceTimer {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }
}

impl Default for SharedDebounceTimer {
    fn default() -> Self {
        Self::new(0)
    }
}
