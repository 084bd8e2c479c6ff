//! Shared test infrastructure for shiftlight-bridge integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use core::fmt::Write;
use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, OutputPin};
use shiftlight_bridge::{DebugLog, Millis, TimeSource};

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock millisecond counter with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<u32>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(0),
        }
    }

    /// Advance time by the given number of milliseconds, wrapping like hardware
    pub fn advance(&self, millis: u32) {
        self.current_time
            .set(self.current_time.get().wrapping_add(millis));
    }

    pub fn set_time(&self, millis: u32) {
        self.current_time.set(millis);
    }
}

impl TimeSource for MockTimeSource {
    fn now(&self) -> Millis {
        Millis(self.current_time.get())
    }
}

// ============================================================================
// Mock Output Pins
// ============================================================================

/// Pin level as last driven by the code under test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Untouched,
    Low,
    High,
}

/// Infallible mock output pin that records its level and write count
pub struct MockPin {
    level: Level,
    writes: usize,
}

impl MockPin {
    pub fn new() -> Self {
        Self {
            level: Level::Untouched,
            writes: 0,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level = Level::Low;
        self.writes += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level = Level::High;
        self.writes += 1;
        Ok(())
    }
}

/// Error returned by [`FailingPin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

/// Output pin that fails on every write unless healthy
pub struct FailingPin {
    pub healthy: bool,
    pub writes: usize,
}

impl FailingPin {
    pub fn healthy() -> Self {
        Self {
            healthy: true,
            writes: 0,
        }
    }

    pub fn broken() -> Self {
        Self {
            healthy: false,
            writes: 0,
        }
    }

    fn write(&mut self) -> Result<(), PinFault> {
        self.writes += 1;
        if self.healthy { Ok(()) } else { Err(PinFault) }
    }
}

impl ErrorType for FailingPin {
    type Error = PinFault;
}

impl OutputPin for FailingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write()
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write()
    }
}

// ============================================================================
// Mock Debug Log
// ============================================================================

/// Debug log that keeps every line sent to the host
///
/// Panics instead of dropping a line, so a handler that logs more or longer
/// lines than expected fails the test.
pub struct MockLog {
    lines: heapless::Vec<heapless::String<256>, 64>,
}

impl MockLog {
    pub fn new() -> Self {
        Self {
            lines: heapless::Vec::new(),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.as_str())
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(|line| line.as_str())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

impl DebugLog for MockLog {
    fn debug_print_fmt(&mut self, args: core::fmt::Arguments<'_>) {
        let mut line = heapless::String::new();
        line.write_fmt(args)
            .expect("debug line exceeds MockLog line capacity");
        self.lines
            .push(line)
            .expect("MockLog line history is full");
    }
}
