use tracing::info;

use crate::engine::compressor::compression_ratio;

/// Running totals for one transport session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransportStats {
    pub payloads: usize,
    pub compressed: usize,
    pub failed: usize,
    pub raw_bytes: usize,
    pub compressed_bytes: usize,
}

impl TransportStats {
    pub fn record_success(&mut self, raw_len: usize, compressed_len: usize) {
        self.payloads += 1;
        self.compressed += 1;
        self.raw_bytes += raw_len;
        self.compressed_bytes += compressed_len;

        let ratio = compression_ratio(raw_len, compressed_len);
        info!(
            target: "ts_compressor::frontend",
            raw = raw_len,
            compressed = compressed_len,
            "Compressed {} bytes to {} bytes ({:.2}% reduction)",
            raw_len,
            compressed_len,
            ratio * 100.0
        );
    }

    pub fn record_failure(&mut self) {
        self.payloads += 1;
        self.failed += 1;
    }

    /// Ratio over every successfully compressed payload.
    pub fn overall_ratio(&self) -> f64 {
        compression_ratio(self.raw_bytes, self.compressed_bytes)
    }

    pub fn log_summary(&self) {
        info!(
            target: "ts_compressor::frontend",
            payloads = self.payloads,
            compressed = self.compressed,
            failed = self.failed,
            "Session finished ({:.2}% overall reduction)",
            self.overall_ratio() * 100.0
        );
    }
}
