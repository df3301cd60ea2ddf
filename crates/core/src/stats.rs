//! Compression statistics for observable behavior.
//!
//! The driver populates one [`CompressionStats`] per operation from file
//! sizes and the codec's diagnostic accessors; the struct derives ratios
//! and renders either a human summary or a `key=value` export that scripts
//! can parse.

use std::time::{Duration, Instant};

/// Byte counts and timing for one compress (or decompress) run.
#[derive(Debug, Clone)]
pub struct CompressionStats {
    /// When the operation started
    pub start_time: Instant,

    /// When the operation ended (set on completion)
    pub end_time: Option<Instant>,

    /// Bytes read from the source file
    pub input_bytes: u64,

    /// Bytes written to the destination file
    pub output_bytes: u64,

    /// Distinct symbols in the frequency table (end-of-text included)
    pub table_entries: usize,
}

impl CompressionStats {
    /// Create stats with the start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            input_bytes: 0,
            output_bytes: 0,
            table_entries: 0,
        }
    }

    /// Mark the operation as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Elapsed duration (current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Size of the frequency-table section including its terminator.
    pub fn table_bytes(&self) -> u64 {
        self.table_entries as u64 * 5 + 1
    }

    /// Size of the bit-packed payload section.
    pub fn payload_bytes(&self) -> u64 {
        self.output_bytes.saturating_sub(self.table_bytes())
    }

    /// Compression ratio (output / input). 0.0 when no input.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.output_bytes as f64 / self.input_bytes as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("=== Compression Summary ===");
        println!("Duration: {} ms", self.duration().as_millis());
        println!("Input:  {} bytes", self.input_bytes);
        println!("Output: {} bytes", self.output_bytes);
        println!(
            "  table:   {} bytes ({} entries)",
            self.table_bytes(),
            self.table_entries
        );
        println!("  payload: {} bytes", self.payload_bytes());
        println!("Ratio: {:.1}%", self.ratio() * 100.0);
    }

    /// Export as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             input_bytes={}\n\
             output_bytes={}\n\
             table_entries={}\n\
             table_bytes={}\n\
             payload_bytes={}\n\
             ratio={:.4}\n",
            self.duration().as_millis(),
            self.input_bytes,
            self.output_bytes,
            self.table_entries,
            self.table_bytes(),
            self.payload_bytes(),
            self.ratio(),
        )
    }
}

impl Default for CompressionStats {
    fn default() -> Self {
        Self::new()
    }
}
