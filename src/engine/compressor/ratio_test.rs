use crate::engine::compressor::{Compressor, compression_ratio};

#[test]
fn ratio_of_empty_input_is_zero() {
    assert_eq!(compression_ratio(0, 0), 0.0);
    assert_eq!(compression_ratio(0, 128), 0.0);
}

#[test]
fn ratio_is_one_minus_size_fraction() {
    assert_eq!(compression_ratio(200, 50), 0.75);
    assert_eq!(compression_ratio(200, 0), 1.0);
    assert_eq!(compression_ratio(64, 64), 0.0);
}

#[test]
fn ratio_can_be_negative() {
    assert_eq!(compression_ratio(10, 25), -1.5);
}

#[test]
fn compressor_ratio_uses_payload_lengths() {
    let compressor = Compressor::default();
    assert_eq!(compressor.compression_ratio(b"abcd", b"ab"), 0.5);
    assert_eq!(compressor.compression_ratio(b"", b"[]"), 0.0);
}

#[test]
fn ratio_of_real_compression_is_positive() {
    let compressor = Compressor::default();
    let raw = br#"[{"timestamp":1000,"value":1},{"timestamp":1001,"value":2},{"timestamp":1002,"value":3}]"#;
    let compressed = compressor.compress_json(raw).unwrap();

    let ratio = compressor.compression_ratio(raw, &compressed);
    assert!(ratio > 0.0 && ratio < 1.0, "ratio {ratio}");
}
