//! Delimited text fields read from a serial byte stream.
//!
//! Host messages arrive as text fields separated by a field delimiter and
//! terminated by a message delimiter, e.g. `4500;7200;3\n`. [`FieldReader`]
//! pulls one field at a time off any [`embedded_io::Read`] stream into a
//! fixed-capacity [`heapless::String`].

use core::str::FromStr;
use embedded_io::{Error as _, ErrorKind, Read};
use heapless::{String, Vec};

/// Separator bytes used by a message layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Delimiters {
    /// Separates fields within a message.
    pub field: u8,
    /// Terminates a message.
    pub message: u8,
}

impl Delimiters {
    /// Creates a delimiter pair.
    pub const fn new(field: u8, message: u8) -> Self {
        Self { field, message }
    }
}

impl Default for Delimiters {
    /// `;` between fields, `\n` at the end of the message.
    fn default() -> Self {
        Self::new(b';', b'\n')
    }
}

/// Errors that can occur while reading a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldError {
    /// The stream ended before the delimiter was seen.
    EndOfStream,
    /// The field did not fit in the buffer. The rest of it, delimiter included,
    /// was still consumed.
    FieldTooLong {
        /// Buffer capacity in bytes
        capacity: usize,
    },
    /// The field bytes are not valid UTF-8.
    InvalidUtf8,
    /// The field could not be parsed as the requested type.
    InvalidNumber,
    /// The underlying stream reported an error.
    Io(ErrorKind),
}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldError::EndOfStream => write!(f, "stream ended before delimiter"),
            FieldError::FieldTooLong { capacity } => {
                write!(f, "field exceeds buffer capacity of {} bytes", capacity)
            }
            FieldError::InvalidUtf8 => write!(f, "field is not valid UTF-8"),
            FieldError::InvalidNumber => write!(f, "field is not a valid number"),
            FieldError::Io(kind) => write!(f, "stream error: {:?}", kind),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FieldError {}

/// Reads delimited text fields from a byte stream.
pub struct FieldReader<R: Read> {
    reader: R,
    delimiters: Delimiters,
}

impl<R: Read> FieldReader<R> {
    /// Creates a reader using the default `;` / `\n` delimiters.
    pub fn new(reader: R) -> Self {
        Self::with_delimiters(reader, Delimiters::default())
    }

    /// Creates a reader with custom delimiters.
    pub fn with_delimiters(reader: R, delimiters: Delimiters) -> Self {
        Self { reader, delimiters }
    }

    /// Returns the text before `delimiter`, consuming the delimiter.
    ///
    /// The delimiter is not included in the result.
    ///
    /// # Errors
    /// * `EndOfStream` - Stream ended first; any partial field is discarded
    /// * `FieldTooLong` - More than `N` bytes before the delimiter
    /// * `InvalidUtf8` - Field bytes are not UTF-8
    /// * `Io` - The stream failed
    pub fn read_field<const N: usize>(&mut self, delimiter: u8) -> Result<String<N>, FieldError> {
        let mut buf: Vec<u8, N> = Vec::new();
        let mut overflowed = false;

        loop {
            let byte = self.read_byte()?;
            if byte == delimiter {
                break;
            }
            if !overflowed && buf.push(byte).is_err() {
                overflowed = true;
            }
        }

        if overflowed {
            #[cfg(feature = "defmt")]
            defmt::warn!("field exceeded {} byte buffer, dropped", N);
            return Err(FieldError::FieldTooLong { capacity: N });
        }

        String::from_utf8(buf).map_err(|_| FieldError::InvalidUtf8)
    }

    /// Reads a field and parses it, ignoring surrounding whitespace.
    ///
    /// The field is consumed even when parsing fails.
    pub fn read_parsed<T: FromStr, const N: usize>(
        &mut self,
        delimiter: u8,
    ) -> Result<T, FieldError> {
        let field = self.read_field::<N>(delimiter)?;
        field.trim().parse().map_err(|_| FieldError::InvalidNumber)
    }

    /// Reads up to the next field delimiter.
    pub fn read_next_field<const N: usize>(&mut self) -> Result<String<N>, FieldError> {
        self.read_field(self.delimiters.field)
    }

    /// Reads up to the end of the current message.
    pub fn read_message<const N: usize>(&mut self) -> Result<String<N>, FieldError> {
        self.read_field(self.delimiters.message)
    }

    /// Returns the configured delimiters.
    pub fn delimiters(&self) -> Delimiters {
        self.delimiters
    }

    /// Returns a mutable reference to the underlying stream.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consumes the reader, returning the underlying stream.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_byte(&mut self) -> Result<u8, FieldError> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Err(FieldError::EndOfStream),
                Ok(_) => return Ok(byte[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(FieldError::Io(e.kind())),
            }
        }
    }
}
