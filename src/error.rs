//! Error types for the codec.
//!
//! All operations return structured errors rather than panicking.
//! Failures are detected eagerly at the point of malformed data and
//! propagated to the caller; there is no partial decode.

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// Each variant corresponds to a failure domain:
/// - Bit I/O: reading bits past the end of a buffer
/// - Huffman: tree construction or code lookup failures
/// - Container: malformed or truncated container bytes
#[derive(Debug, Error)]
pub enum Error {
    /// Bit I/O operation failed
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// Huffman tree or codebook error
    #[error("huffman error: {0}")]
    Huffman(#[from] HuffmanError),

    /// Container serialization/parsing error
    #[error("container error: {0}")]
    Container(#[from] ContainerError),

    /// Encode was requested on an input with zero symbols
    #[error("empty input: nothing to encode")]
    EmptyInput,

    /// Code-point mode encode received bytes that are not valid UTF-8
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Bit-level I/O errors.
#[derive(Debug, Error)]
pub enum BitIoError {
    /// Attempted to read past the end of the bit buffer
    #[error("unexpected end of bit stream at bit {position}")]
    UnexpectedEof { position: usize },
}

/// Huffman tree and codebook errors.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// No symbols with non-zero frequency (cannot build a tree)
    #[error("empty alphabet: cannot build tree from an empty frequency table")]
    EmptyAlphabet,

    /// A symbol from the input has no entry in the codebook.
    /// Indicates an internal inconsistency between table and tree.
    #[error("no code for symbol {symbol}")]
    MissingCode { symbol: u32 },
}

/// Container format errors.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// Magic marker mismatch: this is not a container we recognize
    #[error("invalid magic: expected {expected:?}, got {actual:?}")]
    InvalidMagic { expected: [u8; 4], actual: [u8; 4] },

    /// Buffer is too short to hold the fixed header fields
    #[error("header too short: need at least {required} bytes, got {actual}")]
    HeaderTooShort { required: usize, actual: usize },

    /// Declared symbol count does not fit in the remaining bytes
    #[error("truncated symbol table: declared {declared} symbols, {available} bytes remain")]
    TruncatedSymbolTable { declared: u32, available: usize },

    /// Declared payload bit count does not fit in the remaining bytes
    #[error("truncated payload: need {required_bits} bits, got {available_bits}")]
    TruncatedPayload {
        required_bits: u64,
        available_bits: u64,
    },

    /// Alphabet mode byte is neither 0 (bytes) nor 1 (code points)
    #[error("unknown alphabet mode: {0}")]
    UnknownAlphabetMode(u8),

    /// Byte-mode container stores a symbol outside 0..=255
    #[error("symbol {symbol} out of range for byte alphabet")]
    SymbolOutOfRange { symbol: u32 },

    /// Code-point-mode container stores a value that is not a Unicode scalar
    #[error("symbol {0:#x} is not a valid Unicode scalar value")]
    InvalidCodePoint(u32),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
