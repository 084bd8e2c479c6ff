//! Millisecond timestamps and the clock abstraction.

/// A reading of a free-running 32-bit millisecond counter.
///
/// The counter wraps after roughly 49.7 days. Elapsed time is always computed
/// with modular subtraction, so a reading taken just after the wrap still
/// measures a small positive distance from one taken just before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl Millis {
    /// Counter value at boot.
    pub const ZERO: Self = Millis(0);

    /// Milliseconds elapsed since `earlier`, modulo 2^32.
    #[inline]
    pub const fn wrapping_since(self, earlier: Millis) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }
}

impl From<u32> for Millis {
    fn from(millis: u32) -> Self {
        Millis(millis)
    }
}

impl From<Millis> for u32 {
    fn from(millis: Millis) -> Self {
        millis.0
    }
}

/// Trait for abstracting the platform's millisecond clock.
pub trait TimeSource {
    /// Returns the current counter reading.
    fn now(&self) -> Millis;
}

/// Lets a plain `millis()`-style function serve as a clock.
impl<F: Fn() -> u32> TimeSource for F {
    fn now(&self) -> Millis {
        Millis(self())
    }
}
