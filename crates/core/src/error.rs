//! Error types for the huffpack codec.
//!
//! All operations return structured errors rather than panicking.
//! Malformed containers in particular must surface precise errors: the
//! decoder never silently truncates output.

use thiserror::Error;

/// Top-level error type for all operations in the codec.
///
/// Each variant corresponds to a failure domain:
/// - Tree: frequency-table and tree/code construction failures
/// - Container: serialized-format violations found while reading or writing
/// - I/O: file system operations
#[derive(Debug, Error)]
pub enum Error {
    /// Tree construction or code derivation failed
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),

    /// The serialized container is malformed or could not be produced
    #[error("container error: {0}")]
    Container(#[from] ContainerError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Tree construction and code derivation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// The frequency table has no entries (the builder requires at least one)
    #[error("empty frequency table: cannot build tree")]
    EmptyFrequencyTable,

    /// A derived code exceeds the 64-bit packing limit
    #[error("code length {length} exceeds maximum 64")]
    CodeTooLong { length: usize },
}

/// Container format errors.
///
/// `TruncatedTable` and `TruncatedPayload` replace the silent
/// stop-at-end-of-input behavior a naive decoder exhibits: a container that
/// ends before the terminator byte, or whose bit stream runs out before the
/// end-of-text symbol, is reported rather than partially decoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContainerError {
    /// Input ended inside the frequency-table section
    #[error("truncated frequency table at byte offset {offset}")]
    TruncatedTable { offset: usize },

    /// The same literal byte appears twice in the frequency-table section
    #[error("duplicate frequency-table entry for byte {symbol:#04x}")]
    DuplicateTableEntry { symbol: u8 },

    /// A frequency-table entry carries a zero count
    #[error("zero frequency for table entry {symbol:#04x}")]
    ZeroFrequency { symbol: u8 },

    /// A frequency table was written without an end-of-text entry
    #[error("frequency table has no end-of-text entry")]
    MissingEndOfText,

    /// A byte occurs too often for its count to fit the 4-byte wire field
    #[error("frequency count for byte {symbol:#04x} exceeds 32 bits")]
    CountOverflow { symbol: u8 },

    /// A symbol in the payload has no entry in the code table
    #[error("symbol {symbol:#04x} has no code (table built from different data)")]
    UnknownSymbol { symbol: u8 },

    /// The payload bit stream ended mid-traversal, before end-of-text
    #[error("truncated payload: bit stream ended after {bits_consumed} bits without end-of-text")]
    TruncatedPayload { bits_consumed: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
