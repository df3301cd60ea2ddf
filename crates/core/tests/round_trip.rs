//! End-to-end tests for the full codec pipeline: count -> build -> derive
//! -> serialize -> decode, through real files, with verification that the
//! decompressed output matches the original input.

use huffpack_core::freq::END_OF_TEXT;
use huffpack_core::{ContainerError, Error, HuffmanCodec};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Compress-then-decompress `data` through files and assert identity.
/// Returns the container bytes for format-level assertions.
fn round_trip(data: &[u8]) -> Vec<u8> {
    let dir = tempdir().expect("create temp dir");
    let src = dir.path().join("input.bin");
    let packed = dir.path().join("input.hpk");
    let restored = dir.path().join("restored.bin");

    fs::write(&src, data).unwrap();

    let mut codec = HuffmanCodec::new();
    codec.compress(&src, &packed).expect("compression failed");
    codec
        .decompress(&packed, &restored)
        .expect("decompression failed");

    let output = fs::read(&restored).unwrap();
    assert_eq!(output, data, "round trip did not reproduce the input");

    fs::read(&packed).unwrap()
}

#[test]
fn test_round_trip_text() {
    round_trip(b"hello huffman! this sentence has enough repetition to compress: aaaa bbbb cccc");
}

#[test]
fn test_round_trip_empty_file() {
    let container = round_trip(b"");

    // Only the end-of-text entry, the terminator, and one payload byte.
    assert_eq!(container.len(), 7);
}

#[test]
fn test_round_trip_single_repeated_byte() {
    round_trip(&[b'X'; 4096]);
}

#[test]
fn test_round_trip_single_byte_file() {
    round_trip(b"Q");
}

#[test]
fn test_round_trip_source_containing_byte_3() {
    // Byte 3 doubles as the table terminator on the wire; the container
    // must stay unambiguous.
    round_trip(&[3, 3, 1, 2, 3, 0, 3]);
}

#[test]
fn test_round_trip_source_containing_byte_4() {
    // Byte 4 shares its wire key with the end-of-text entry.
    round_trip(&[4, 4, 4, 4, 9, 9]);
}

#[test]
fn test_round_trip_all_byte_values() {
    let data: Vec<u8> = (0..=255).collect();
    round_trip(&data);
}

#[test]
fn test_round_trip_random_data_seeded() {
    for seed in [7u64, 42, 999] {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let len = rng.gen_range(1..20_000);
        let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        round_trip(&data);
    }
}

#[test]
fn test_round_trip_skewed_data() {
    // One dominant symbol produces a deep, near-linear tree.
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let data: Vec<u8> = (0..50_000)
        .map(|_| if rng.gen_bool(0.98) { 0u8 } else { rng.gen() })
        .collect();
    round_trip(&data);
}

#[test]
fn test_compression_is_deterministic() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("input.bin");
    fs::write(&src, b"determinism check with tied frequencies: abcdefgh").unwrap();

    let first = dir.path().join("first.hpk");
    let second = dir.path().join("second.hpk");

    let mut codec = HuffmanCodec::new();
    codec.compress(&src, &first).unwrap();
    codec.compress(&src, &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_skewed_input_compresses() {
    let data = vec![b'z'; 64 * 1024];
    let container = round_trip(&data);

    assert!(container.len() < data.len() / 4);
}

#[test]
fn test_encode_returns_codes_without_writing() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("input.bin");
    fs::write(&src, b"AAABB").unwrap();

    let mut codec = HuffmanCodec::new();
    let codes = codec.encode(&src).unwrap();

    assert_eq!(codes.get(b'A' as u16).unwrap().len(), 1);
    assert_eq!(codes.get(b'B' as u16).unwrap().len(), 2);
    assert_eq!(codes.get(END_OF_TEXT).unwrap().len(), 2);

    // Nothing but the input exists in the directory.
    let entries = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn test_session_reuse_does_not_leak_state() {
    let dir = tempdir().unwrap();
    let mut codec = HuffmanCodec::new();

    // First operation over a wide alphabet, second over a narrow one; the
    // second container must be identical to one from a fresh codec.
    let wide = dir.path().join("wide.bin");
    let narrow = dir.path().join("narrow.bin");
    fs::write(&wide, (0..=255).collect::<Vec<u8>>()).unwrap();
    fs::write(&narrow, b"nn").unwrap();

    let reused_out = dir.path().join("reused.hpk");
    let fresh_out = dir.path().join("fresh.hpk");

    codec.compress(&wide, &dir.path().join("wide.hpk")).unwrap();
    codec.compress(&narrow, &reused_out).unwrap();
    HuffmanCodec::new().compress(&narrow, &fresh_out).unwrap();

    assert_eq!(fs::read(&reused_out).unwrap(), fs::read(&fresh_out).unwrap());
    assert_eq!(codec.frequencies().len(), 2);
}

#[test]
fn test_missing_source_is_io_error() {
    let dir = tempdir().unwrap();
    let mut codec = HuffmanCodec::new();

    let err = codec
        .compress(Path::new("/nonexistent/input"), &dir.path().join("out.hpk"))
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_truncated_container_is_reported() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("input.bin");
    let packed = dir.path().join("input.hpk");
    fs::write(&src, b"data that will be truncated in transit").unwrap();

    let mut codec = HuffmanCodec::new();
    codec.compress(&src, &packed).unwrap();

    let container = fs::read(&packed).unwrap();

    // Cut inside the frequency table.
    let cut_table = dir.path().join("cut_table.hpk");
    fs::write(&cut_table, &container[..8]).unwrap();
    let err = codec
        .decompress(&cut_table, &dir.path().join("out1.bin"))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Container(ContainerError::TruncatedTable { .. })
    ));

    // Cut inside the payload.
    let cut_payload = dir.path().join("cut_payload.hpk");
    fs::write(&cut_payload, &container[..container.len() - 1]).unwrap();
    let err = codec
        .decompress(&cut_payload, &dir.path().join("out2.bin"))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Container(ContainerError::TruncatedPayload { .. })
    ));
}

#[test]
fn test_decompress_garbage_fails() {
    let dir = tempdir().unwrap();
    let bogus = dir.path().join("bogus.hpk");
    fs::write(&bogus, [0xde, 0xad]).unwrap();

    let mut codec = HuffmanCodec::new();
    assert!(codec
        .decompress(&bogus, &dir.path().join("out.bin"))
        .is_err());
}

#[test]
fn test_container_layout_for_known_input() {
    // A:3 B:2 end-of-text:1 -- fifteen table bytes, one terminator, two
    // payload bytes; see the container module's golden test for the exact
    // bit pattern.
    let container = round_trip(b"AAABB");

    assert_eq!(container.len(), 18);
    assert_eq!(container[15], 3);
    assert_eq!(container[10], 4);
}
