//! huffpack driver: supplies file paths to the codec and reports results.

mod config;
mod input_gen;

use config::{Command, Config};
use huffpack_core::freq::END_OF_TEXT;
use huffpack_core::stats::CompressionStats;
use huffpack_core::HuffmanCodec;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("try: huffpack --help");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match config.command {
        Command::Compress => compress(config),
        Command::Decompress => decompress(config),
        Command::Inspect => inspect(config),
        Command::Demo => demo(config),
    }
}

fn compress(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let input = config.input.as_ref().expect("validated by config");
    let output = config.resolved_output().expect("validated by config");

    let mut codec = HuffmanCodec::new();
    let mut stats = CompressionStats::new();
    codec.compress(input, &output)?;
    stats.complete();

    stats.input_bytes = fs::metadata(input)?.len();
    stats.output_bytes = fs::metadata(&output)?.len();
    stats.table_entries = codec.frequencies().len();

    println!("compressed {} -> {}", input.display(), output.display());
    if config.print_codes {
        print_code_table(&codec);
    }
    if config.print_stats {
        stats.print_summary();
    }
    Ok(())
}

fn decompress(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let input = config.input.as_ref().expect("validated by config");
    let output = config.resolved_output().expect("validated by config");

    let mut codec = HuffmanCodec::new();
    codec.decompress(input, &output)?;

    println!("decompressed {} -> {}", input.display(), output.display());
    println!(
        "restored {} bytes from {} compressed",
        fs::metadata(&output)?.len(),
        fs::metadata(input)?.len()
    );
    Ok(())
}

fn inspect(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let input = config.input.as_ref().expect("validated by config");

    let mut codec = HuffmanCodec::new();
    codec.encode(input)?;

    println!("=== Frequency Table ===");
    for (symbol, count) in codec.frequencies().iter() {
        println!("{:>8}  x{count}", symbol_label(symbol));
    }
    println!();
    print_code_table(&codec);
    Ok(())
}

fn demo(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let sample = PathBuf::from("./sample.bin");
    let packed = PathBuf::from("./sample.bin.hpk");
    let restored = PathBuf::from("./sample.out");

    println!("=== Demo ===");
    println!("Seed: {}", config.seed);
    println!("Sample: {} bytes -> {}", config.sample_bytes, sample.display());
    input_gen::write_sample_file(&sample, config.seed, config.sample_bytes)?;

    let mut codec = HuffmanCodec::new();
    let mut stats = CompressionStats::new();
    codec.compress(&sample, &packed)?;
    stats.complete();
    stats.input_bytes = fs::metadata(&sample)?.len();
    stats.output_bytes = fs::metadata(&packed)?.len();
    stats.table_entries = codec.frequencies().len();

    codec.decompress(&packed, &restored)?;

    let matches = files_equal(&sample, &restored)?;
    if config.print_codes {
        print_code_table(&codec);
    }
    if config.print_stats {
        stats.print_summary();
    }
    if matches {
        println!("Verification: PASSED");
        Ok(())
    } else {
        println!("Verification: FAILED (restored file differs)");
        std::process::exit(1);
    }
}

fn files_equal(a: &Path, b: &Path) -> std::io::Result<bool> {
    Ok(fs::read(a)? == fs::read(b)?)
}

fn print_code_table(codec: &HuffmanCodec) {
    println!("=== Code Table ===");
    for (symbol, code) in codec.codes().iter() {
        println!("{:>8}  {code}", symbol_label(symbol));
    }
}

fn symbol_label(symbol: u16) -> String {
    if symbol == END_OF_TEXT {
        "<eot>".to_string()
    } else if (0x20..0x7f).contains(&symbol) {
        format!("'{}'", symbol as u8 as char)
    } else {
        format!("{symbol:#04x}")
    }
}
