//! huffpack-core: lossless file compression built on canonical Huffman coding.
//!
//! This library implements the complete codec pipeline:
//! - Counts per-byte frequencies plus a synthetic end-of-text marker
//! - Builds the minimum-weighted-path prefix tree over an index arena
//! - Derives one prefix-free code per symbol
//! - Serializes a frequency-table container and bit-packs the payload,
//!   and inverts the whole process exactly
//!
//! # Architecture
//!
//! The pipeline runs strictly forward through clear module boundaries:
//! - `freq`: symbols and frequency counting
//! - `tree`: arena-based Huffman tree construction
//! - `codes`: prefix-code derivation
//! - `bitio`: MSB-first bit reading/writing
//! - `container`: the on-disk format and decode state machine
//! - `codec`: the per-operation session tying the stages together
//! - `stats`: observable compression statistics
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and recoverable
//! - **Deterministic**: canonical table order and tie-breaks make
//!   compression reproducible byte-for-byte
//! - **No recursion**: trees are index arenas walked with explicit stacks,
//!   safe for the near-linear trees of highly skewed inputs
//! - **Honest failures**: truncated or malformed containers are reported,
//!   never silently half-decoded

pub mod bitio;
pub mod codec;
pub mod codes;
pub mod container;
pub mod error;
pub mod freq;
pub mod stats;
pub mod tree;

// Re-export commonly used types
pub use codec::HuffmanCodec;
pub use error::{ContainerError, Error, Result, TreeError};
