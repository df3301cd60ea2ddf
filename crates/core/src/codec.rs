//! The codec session: one value owning the per-operation state.
//!
//! A [`HuffmanCodec`] holds the frequency table, arena tree, and code table
//! for the operation in flight. Every `compress`/`decompress`/`encode` call
//! clears and rebuilds all three, so nothing leaks from one operation into
//! the next and a single codec can be reused freely.

use crate::codes::CodeTable;
use crate::container;
use crate::error::Result;
use crate::freq::FrequencyTable;
use crate::tree::HuffmanTree;
use std::fs;
use std::path::Path;

/// A reusable compress/decompress session.
///
/// The tree, frequency table, and code table are exclusively owned and
/// never shared; accessors expose read-only views for diagnostics.
#[derive(Debug, Default)]
pub struct HuffmanCodec {
    freqs: FrequencyTable,
    tree: HuffmanTree,
    codes: CodeTable,
}

impl HuffmanCodec {
    /// Create a codec with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compress `src` into a container file at `dst`.
    ///
    /// Reads the source fully, builds the frequency table, tree, and codes,
    /// then writes the table section followed by the bit-packed payload.
    ///
    /// # Errors
    /// I/O errors for an unreadable source or unwritable destination; no
    /// partial output is guaranteed on failure.
    pub fn compress(&mut self, src: &Path, dst: &Path) -> Result<()> {
        self.clear();
        let data = fs::read(src)?;
        self.build_for(&data)?;

        let mut out = container::write_table(&self.freqs)?;
        out.extend(container::encode_payload(&data, &self.codes)?);
        fs::write(dst, out)?;
        Ok(())
    }

    /// Decompress a container file at `src` into `dst`.
    ///
    /// Rebuilds the tree from the deserialized frequency table (identical
    /// to the compress-time tree because table order and tie-breaks are
    /// canonical), then walks the payload bit-by-bit.
    ///
    /// # Errors
    /// I/O errors, or a [`crate::ContainerError`] for truncated or
    /// malformed input.
    pub fn decompress(&mut self, src: &Path, dst: &Path) -> Result<()> {
        self.clear();
        let data = fs::read(src)?;

        let (freqs, payload_start) = container::read_table(&data)?;
        self.freqs = freqs;
        self.tree = HuffmanTree::build(&self.freqs)?;
        self.codes = CodeTable::derive(&self.tree)?;

        let decoded = container::decode_payload(&data[payload_start..], &self.tree)?;
        fs::write(dst, decoded)?;
        Ok(())
    }

    /// Run counting, tree construction, and code derivation for `src`
    /// without writing anything; returns the derived code table.
    pub fn encode(&mut self, src: &Path) -> Result<&CodeTable> {
        self.clear();
        let data = fs::read(src)?;
        self.build_for(&data)?;
        Ok(&self.codes)
    }

    /// Reset the session: discard the tree and empty both tables.
    pub fn clear(&mut self) {
        self.freqs.clear();
        self.tree.clear();
        self.codes.clear();
    }

    /// Read-only view of the current frequency table.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.freqs
    }

    /// Read-only view of the current tree.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// Read-only view of the current code table.
    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    fn build_for(&mut self, data: &[u8]) -> Result<()> {
        self.freqs = FrequencyTable::from_bytes(data)?;
        self.tree = HuffmanTree::build(&self.freqs)?;
        self.codes = CodeTable::derive(&self.tree)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::END_OF_TEXT;

    #[test]
    fn test_clear_resets_all_state() {
        let mut codec = HuffmanCodec::new();
        codec.build_for(b"some data").unwrap();
        assert!(!codec.frequencies().is_empty());
        assert!(!codec.tree().is_empty());
        assert!(!codec.codes().is_empty());

        codec.clear();
        assert!(codec.frequencies().is_empty());
        assert!(codec.tree().is_empty());
        assert!(codec.codes().is_empty());
        assert_eq!(codec.tree().root(), None);
    }

    #[test]
    fn test_build_populates_consistent_views() {
        let mut codec = HuffmanCodec::new();
        codec.build_for(b"AAABB").unwrap();

        assert_eq!(codec.frequencies().get(b'A' as u16), 3);
        assert_eq!(codec.frequencies().get(END_OF_TEXT), 1);
        assert_eq!(codec.codes().len(), codec.frequencies().len());
        assert_eq!(
            codec.tree().node(codec.tree().root().unwrap()).weight,
            codec.frequencies().total()
        );
    }
}
