/// Fractional size reduction between a raw and a compressed payload, given
/// their byte lengths: `1 - compressed/raw`.
///
/// Returns exactly 0 when `raw_len` is 0. The result is negative when the
/// compressed payload is larger and is never clamped.
pub fn compression_ratio(raw_len: usize, compressed_len: usize) -> f64 {
    if raw_len == 0 {
        return 0.0;
    }
    1.0 - compressed_len as f64 / raw_len as f64
}
