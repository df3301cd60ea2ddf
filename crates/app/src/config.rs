//! Configuration for the huffpack command line.
//!
//! Parses a subcommand plus flags by hand and fills in sensible defaults.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: a bare `huffpack` runs the
//! self-contained demo (generate sample -> compress -> decompress ->
//! verify). All resolved defaults are printable so runs are reproducible.

use std::path::PathBuf;

/// What the driver should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Compress `input` into `output`
    Compress,
    /// Decompress `input` into `output`
    Decompress,
    /// Print the frequency and code tables for `input`
    Inspect,
    /// Generate a sample file, round-trip it, verify, report
    Demo,
}

/// Complete configuration for one driver run.
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,

    /// Input file (None only for demo, which generates its own)
    pub input: Option<PathBuf>,

    /// Output file (derived from input when not given)
    pub output: Option<PathBuf>,

    /// Seed for demo sample generation
    pub seed: u64,

    /// Demo sample size in bytes
    pub sample_bytes: usize,

    /// Print the code table after compressing
    pub print_codes: bool,

    /// Print the stats summary
    pub print_stats: bool,
}

impl Config {
    /// Parse configuration from command-line arguments (program name
    /// excluded). No arguments at all selects the demo.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input: Option<PathBuf> = None;
        let mut output: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut print_codes = false;
        let mut print_stats = true;

        // Bare flags (no subcommand) select the demo.
        let (command, mut i) = match args.first().map(String::as_str) {
            None => (Command::Demo, 1),
            Some("compress") => (Command::Compress, 1),
            Some("decompress") => (Command::Decompress, 1),
            Some("inspect") => (Command::Inspect, 1),
            Some("demo") => (Command::Demo, 1),
            Some(flag) if flag.starts_with('-') => (Command::Demo, 0),
            Some(other) => {
                return Err(format!("unknown command: {other}"));
            }
        };

        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input = Some(PathBuf::from(&args[i]));
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-bytes requires a number".to_string());
                    }
                    sample_bytes = Some(args[i].parse().map_err(|_| "invalid sample-bytes")?);
                }
                "--print-codes" => {
                    print_codes = true;
                }
                "--no-stats" => {
                    print_stats = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Input is mandatory for everything except the demo.
        if command != Command::Demo && input.is_none() {
            return Err("this command requires --in <PATH>".to_string());
        }

        // Time-based fallback seed keeps demo runs varied but printable.
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        Ok(Config {
            command,
            input,
            output,
            seed,
            sample_bytes: sample_bytes.unwrap_or(256 * 1024),
            print_codes,
            print_stats,
        })
    }

    /// Resolve the output path, deriving one from the input if needed:
    /// `<input>.hpk` for compression, `<input>.out` for decompression.
    pub fn resolved_output(&self) -> Option<PathBuf> {
        if let Some(out) = &self.output {
            return Some(out.clone());
        }
        let input = self.input.as_ref()?;
        let suffix = match self.command {
            Command::Compress => "hpk",
            Command::Decompress => "out",
            _ => return None,
        };
        let mut name = input.as_os_str().to_os_string();
        name.push(".");
        name.push(suffix);
        Some(PathBuf::from(name))
    }
}

fn print_help() {
    println!("huffpack: canonical Huffman file compression");
    println!();
    println!("USAGE:");
    println!("    huffpack [COMMAND] [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    compress     Compress --in into --out (default <in>.hpk)");
    println!("    decompress   Decompress --in into --out (default <in>.out)");
    println!("    inspect      Print the frequency and code tables for --in");
    println!("    demo         Generate a sample, round-trip it, verify (default)");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>           Input file");
    println!("    --out <PATH>          Output file");
    println!("    --seed <N>            Demo sample seed (default: time-based)");
    println!("    --sample-bytes <N>    Demo sample size (default: 262144)");
    println!("    --print-codes         Print the derived code table");
    println!("    --no-stats            Don't print the stats summary");
    println!("    --help, -h            Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffpack                                  # Demo with random seed");
    println!("    huffpack demo --seed 42                   # Deterministic demo");
    println!("    huffpack compress --in notes.txt          # Writes notes.txt.hpk");
    println!("    huffpack decompress --in notes.txt.hpk --out notes.txt");
    println!("    huffpack inspect --in notes.txt           # Show codes, no output file");
}
