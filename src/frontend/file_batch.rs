use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{error, warn};

use super::stats::TransportStats;
use crate::engine::compressor::Compressor;

/// Compresses every file as one payload through the batch runner and writes
/// the results to `writer`, one line per file, in argument order.
pub async fn run_files<W>(
    compressor: Arc<Compressor>,
    paths: &[PathBuf],
    writer: &mut W,
) -> std::io::Result<TransportStats>
where
    W: AsyncWrite + Unpin,
{
    let mut stats = TransportStats::default();
    let mut names = Vec::with_capacity(paths.len());
    let mut payloads = Vec::with_capacity(paths.len());

    for path in paths {
        match tokio::fs::read(path).await {
            Ok(bytes) => {
                names.push(path.display().to_string());
                payloads.push(bytes);
            }
            Err(e) => {
                error!(target: "ts_compressor::frontend", path = %path.display(), "Failed to read payload file: {}", e);
                stats.record_failure();
            }
        }
    }

    let raw_lens: Vec<usize> = payloads.iter().map(Vec::len).collect();
    let results = compressor.compress_batch(payloads).await;

    for ((name, raw_len), result) in names.iter().zip(raw_lens).zip(results) {
        match result {
            Some(compressed) => {
                writer.write_all(&compressed).await?;
                writer.write_all(b"\n").await?;
                stats.record_success(raw_len, compressed.len());
            }
            None => {
                warn!(target: "ts_compressor::frontend", path = %name, "Failed to compress payload file");
                stats.record_failure();
            }
        }
    }

    writer.flush().await?;
    Ok(stats)
}
