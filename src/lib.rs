#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`DebounceTimer`**: Accepts a trigger only when more than a minimum interval has passed since the last accepted one
//! - **`SharedDebounceTimer`**: The same gate behind a critical section, for use from interrupts and statics
//! - **`Millis`**: A reading of a wrapping 32-bit millisecond counter
//! - **`TimeSource`**: Trait to implement for your timing system (any `Fn() -> u32` already does)
//! - **`FieldReader`**: Reads delimited text fields from an `embedded_io::Read` stream
//! - **`CustomProtocol`**: Hooks your handler implements (setup, read, loop, idle)
//! - **`DebugLog`**: Trait to implement for forwarding debug lines to the host
//! - **`IndicatorPins`**: Owns the RPM indicator outputs and resets them at boot
//!
//! All elapsed-time arithmetic is modular on `u32`, so timers keep working
//! across the ~49.7 day counter wrap.

pub mod time;
pub mod debounce;
pub mod shared;
pub mod field;
pub mod protocol;
pub mod indicator;

pub use debounce::DebounceTimer;
pub use shared::SharedDebounceTimer;
pub use time::{Millis, TimeSource};
pub use field::{Delimiters, FieldError, FieldReader};
pub use protocol::{CustomProtocol, DebugLog, EchoProtocol};
pub use indicator::IndicatorPins;
