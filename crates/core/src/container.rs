//! The serialized container format.
//!
//! # Layout
//!
//! ```text
//! +--------------------------+
//! | (symbol byte +           |  one pair per frequency-table entry,
//! |  4-byte big-endian count)|  literal bytes in ascending order,
//! |  x N                     |  end-of-text pair (key byte 4) always last
//! +--------------------------+
//! | terminator (1 byte) = 3  |
//! +--------------------------+
//! | bit-packed payload       |  one code per source byte, then the
//! | (zero-padded to a byte)  |  end-of-text code, MSB-first
//! +--------------------------+
//! ```
//!
//! # Terminator disambiguation
//!
//! The table section is terminator-delimited, and both reserved byte values
//! can legitimately occur as table keys (a source may contain bytes 3 and
//! 4). Two writer rules keep parsing unambiguous:
//!
//! - literal entries are emitted in ascending symbol order;
//! - the end-of-text entry is always the final pair, keyed by byte 4.
//!
//! The reader then treats a byte 3 at a pair boundary as the terminator
//! only when the preceding pair was keyed 4. A literal symbol-3 pair can
//! never be preceded by a key-4 pair (ascending order puts 3 before 4, and
//! the only pair after a literal 4 is either a larger literal or the final
//! end-of-text pair), so the rule is exact for every writer-produced
//! container.

use crate::bitio::{BitReader, BitWriter};
use crate::codes::CodeTable;
use crate::error::{ContainerError, Result};
use crate::freq::{FrequencyTable, Symbol, END_OF_TEXT};
use crate::tree::{HuffmanTree, NodeKind};

/// Terminator byte ending the frequency-table section.
pub const TABLE_TERMINATOR: u8 = 3;

/// Wire key byte for the end-of-text entry (always the final pair).
pub const END_OF_TEXT_KEY: u8 = 4;

/// Bytes per table pair: 1 key + 4 count.
const PAIR_SIZE: usize = 5;

/// Serialize the frequency-table section, terminator included.
///
/// # Errors
/// `ContainerError::MissingEndOfText` if the table lacks an end-of-text
/// entry; such a table cannot produce a parseable container.
pub fn write_table(table: &FrequencyTable) -> Result<Vec<u8>> {
    if table.get(END_OF_TEXT) == 0 {
        return Err(ContainerError::MissingEndOfText.into());
    }

    let mut out = Vec::with_capacity(table.len() * PAIR_SIZE + 1);
    for (symbol, count) in table.iter() {
        let key = if symbol == END_OF_TEXT {
            END_OF_TEXT_KEY
        } else {
            symbol as u8
        };
        out.push(key);
        out.extend_from_slice(&count.to_be_bytes());
    }
    out.push(TABLE_TERMINATOR);
    Ok(out)
}

/// Parse the frequency-table section from the front of a container.
///
/// Returns the rebuilt table and the byte offset where the payload begins.
///
/// # Errors
/// - `ContainerError::TruncatedTable` if input ends before the terminator
/// - `ContainerError::ZeroFrequency` for a zero count field
/// - `ContainerError::DuplicateTableEntry` for a repeated literal key
pub fn read_table(data: &[u8]) -> Result<(FrequencyTable, usize)> {
    let mut pairs: Vec<(u8, u32)> = Vec::new();
    let mut offset = 0;

    loop {
        let Some(&key) = data.get(offset) else {
            return Err(ContainerError::TruncatedTable { offset }.into());
        };
        let after_end_of_text = pairs.last().map(|&(k, _)| k) == Some(END_OF_TEXT_KEY);
        if key == TABLE_TERMINATOR && after_end_of_text {
            offset += 1;
            break;
        }
        if offset + PAIR_SIZE > data.len() {
            return Err(ContainerError::TruncatedTable { offset }.into());
        }
        let count = u32::from_be_bytes(data[offset + 1..offset + PAIR_SIZE].try_into().unwrap());
        if count == 0 {
            return Err(ContainerError::ZeroFrequency { symbol: key }.into());
        }
        pairs.push((key, count));
        offset += PAIR_SIZE;
    }

    // The final pair is the end-of-text entry by construction; everything
    // before it is a literal byte.
    let mut table = FrequencyTable::new();
    let (_, end_of_text_count) = pairs.pop().unwrap();
    table.set(END_OF_TEXT, end_of_text_count);
    for (key, count) in pairs {
        if table.get(key as Symbol) != 0 {
            return Err(ContainerError::DuplicateTableEntry { symbol: key }.into());
        }
        table.set(key as Symbol, count);
    }

    Ok((table, offset))
}

/// Bit-pack the payload: one code per source byte, then the end-of-text
/// code, zero-padded to a byte boundary.
///
/// # Errors
/// `ContainerError::UnknownSymbol` if a source byte has no code, which is
/// only possible when `codes` was derived from different data.
pub fn encode_payload(data: &[u8], codes: &CodeTable) -> Result<Vec<u8>> {
    let mut writer = BitWriter::new();

    for &byte in data {
        let code = codes
            .get(byte as Symbol)
            .ok_or(ContainerError::UnknownSymbol { symbol: byte })?;
        writer.write_code(code);
    }
    let end = codes
        .get(END_OF_TEXT)
        .ok_or(ContainerError::MissingEndOfText)?;
    writer.write_code(end);

    Ok(writer.finish())
}

/// Decode a payload by walking the tree bit-by-bit.
///
/// State = current node; `0` descends left, `1` right. Reaching a leaf
/// either stops decoding (end-of-text; remaining padding is discarded) or
/// emits the leaf's byte and resets to the root. A single-leaf tree
/// consumes one bit per symbol without descending.
///
/// # Errors
/// `ContainerError::TruncatedPayload` if the bit stream ends before the
/// end-of-text symbol is reached.
pub fn decode_payload(payload: &[u8], tree: &HuffmanTree) -> Result<Vec<u8>> {
    let Some(root) = tree.root() else {
        return Err(crate::error::TreeError::EmptyFrequencyTable.into());
    };

    let mut out = Vec::new();
    let mut reader = BitReader::new(payload);
    let mut cursor = root;

    loop {
        let Some(bit) = reader.next_bit() else {
            return Err(ContainerError::TruncatedPayload {
                bits_consumed: reader.bits_consumed(),
            }
            .into());
        };

        if let NodeKind::Internal { left, right } = tree.node(cursor).kind {
            cursor = if bit { right } else { left };
        }
        // For a single-leaf tree the cursor already sits on the leaf and
        // the consumed bit is the symbol's whole one-bit code.

        if let NodeKind::Leaf(symbol) = tree.node(cursor).kind {
            if symbol == END_OF_TEXT {
                return Ok(out);
            }
            out.push(symbol as u8);
            cursor = root;
        }
    }
}
