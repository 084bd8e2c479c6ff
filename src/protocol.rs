//! Handler hooks driven by the serial bridge runtime.
//!
//! The runtime on the microcontroller owns the serial port and calls into a
//! [`CustomProtocol`] implementation at fixed points: once at boot, once per
//! incoming message, once per main-loop pass and between received bytes.

use core::fmt;
use embedded_io::Read;

use crate::field::FieldReader;

/// Sink for debug messages shown in the host application's log panel.
///
/// Sending is slow on the wire; only use it while debugging.
///
/// Implementations format straight onto the transport (for example through a
/// `core::fmt::Write` adapter over the UART), so a line is never limited by an
/// intermediate buffer.
pub trait DebugLog {
    /// Sends one formatted line of text to the host.
    fn debug_print_fmt(&mut self, args: fmt::Arguments<'_>);

    /// Sends one line of text to the host.
    fn debug_print_line(&mut self, message: &str) {
        self.debug_print_fmt(format_args!("{}", message));
    }
}

/// Hooks a custom serial protocol handler implements.
///
/// Rules for implementors:
/// - `read` must consume the whole message matching the protocol, or the
///   next message will be misaligned.
/// - Nothing may block. `idle` in particular runs between every received byte
///   and must stay short and must not mask interrupts.
/// - Work that masks interrupts belongs at the end of `read`, once the whole
///   message is off the port.
pub trait CustomProtocol {
    /// Called once at boot.
    fn setup(&mut self) {}

    /// Called when a message from the host is waiting on the port.
    fn read<R: Read, L: DebugLog>(&mut self, input: &mut FieldReader<R>, log: &mut L);

    /// Called once per main-loop pass, between commands. Timing is not guaranteed.
    fn loop_tick(&mut self) {}

    /// Called between each received byte.
    fn idle(&mut self) {}
}

/// Handler that echoes every message back to the host as a debug line.
///
/// Useful for checking the host-side message formula before writing a real
/// handler. `N` is the largest message, in bytes, it will echo.
#[derive(Debug, Default)]
pub struct EchoProtocol<const N: usize> {
    received: u32,
}

impl<const N: usize> EchoProtocol<N> {
    /// Creates an echo handler.
    pub const fn new() -> Self {
        Self { received: 0 }
    }

    /// Number of messages echoed so far.
    pub fn received(&self) -> u32 {
        self.received
    }
}

impl<const N: usize> CustomProtocol for EchoProtocol<N> {
    fn read<R: Read, L: DebugLog>(&mut self, input: &mut FieldReader<R>, log: &mut L) {
        match input.read_message::<N>() {
            Ok(message) => {
                self.received = self.received.wrapping_add(1);
                log.debug_print_fmt(format_args!("Message received : {}", message));
            }
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("echo: {}", e);
                log.debug_print_fmt(format_args!("Message error : {}", e));
            }
        }
    }
}
