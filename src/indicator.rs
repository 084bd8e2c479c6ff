//! RPM indicator outputs.

use embedded_hal::digital::OutputPin;

/// The low, mid and high RPM indicator LED outputs.
///
/// Owns the pins so the handler, not a global, decides which hardware lines
/// are indicators.
pub struct IndicatorPins<L, M, H> {
    low: L,
    mid: M,
    high: H,
}

impl<E, L, M, H> IndicatorPins<L, M, H>
where
    L: OutputPin<Error = E>,
    M: OutputPin<Error = E>,
    H: OutputPin<Error = E>,
{
    /// Takes ownership of the three indicator outputs.
    pub fn new(low: L, mid: M, high: H) -> Self {
        Self { low, mid, high }
    }

    /// Drives all three indicators low. Call once from the setup hook.
    ///
    /// Stops at the first pin that fails.
    pub fn setup(&mut self) -> Result<(), E> {
        self.low.set_low()?;
        self.mid.set_low()?;
        self.high.set_low()?;

        #[cfg(feature = "defmt")]
        defmt::debug!("indicator pins reset");
        Ok(())
    }

    /// Returns the pins.
    pub fn release(self) -> (L, M, H) {
        (self.low, self.mid, self.high)
    }
}
