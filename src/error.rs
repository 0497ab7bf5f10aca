use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! out_of_bounds_error {
    () => {
        crate::Error::OutOfBounds
    };
}

macro_rules! truncated_error {
    ($needed:expr, $available:expr) => {
        crate::Error::TruncatedInput {
            needed: $needed,
            available: $available,
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// # Error Categories
///
/// ## Framing Errors
/// - [`Error::TruncatedInput`] - A record declares more bytes than the buffer holds
/// - [`Error::ValueTooLarge`] - A length does not fit the chunk's `size_t` width
/// - [`Error::UnsupportedGeneration`] - The chunk declares a string format we do not know
/// - [`Error::UnsupportedWidth`] - The chunk declares a `size_t` width we cannot represent
///
/// ## Input Errors
/// - [`Error::OutOfBounds`] - Navigation outside of the input buffer
/// - [`Error::Malformed`] - Structurally impossible input
/// - [`Error::Empty`] - Empty input provided
/// - [`Error::FileError`] - Filesystem or output sink I/O errors
///
/// # Examples
///
/// ```rust
/// use luascope::{ChunkConfig, Error, Parser};
///
/// let config = ChunkConfig::new(0x54, 4)?;
/// let codec = config.codec()?;
///
/// // Declares 8 bytes (7 content bytes), but only 2 are present
/// let data = [0x08, 0x00, 0x00, 0x00, b'h', b'i'];
/// let mut parser = Parser::new(&data);
///
/// match codec.parse(&mut parser, &config) {
///     Err(Error::TruncatedInput { needed, available }) => {
///         assert_eq!((needed, available), (7, 2));
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// # Ok::<(), luascope::Error>(())
/// ```
#[derive(Error, Debug)]
pub enum Error {
    // Framing errors
    /// A framing rule requires more bytes than remain in the buffer.
    ///
    /// Decoding of the current record is aborted and the cursor is left where the record
    /// started. This is deterministic; retrying the same input will fail the same way.
    ///
    /// # Fields
    ///
    /// * `needed` - Number of bytes the framing rule asked for
    /// * `available` - Number of bytes that were left in the buffer
    #[error("Truncated input - needed {needed} bytes, {available} available")]
    TruncatedInput {
        /// Bytes required by the framing rule
        needed: usize,
        /// Bytes remaining at the point of failure
        available: usize,
    },

    /// A length value exceeds what the configured integer width can represent.
    #[error("Value {value} does not fit into a {width} byte length integer")]
    ValueTooLarge {
        /// The value that was to be encoded
        value: u64,
        /// The configured width in bytes
        width: u8,
    },

    /// The chunk declares a string format generation this library does not know.
    ///
    /// The associated value is the raw generation tag as found in the chunk header.
    #[error("Unsupported string format generation - 0x{0:02X}")]
    UnsupportedGeneration(u8),

    /// The chunk declares a `size_t` width outside of `1..=8` bytes.
    #[error("Unsupported length integer width - {0} bytes")]
    UnsupportedWidth(u8),

    // Input errors
    /// An out of bound access was attempted while navigating the input.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// The input is damaged and could not be parsed.
    ///
    /// The error includes the source location where the malformation was detected for
    /// debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Provided input was empty.
    #[error("Provided input was empty")]
    Empty,

    /// File or output sink I/O error.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Generic error for miscellaneous failures.
    ///
    /// Used for wrapping external library errors with additional context.
    #[error("{0}")]
    Error(String),
}
