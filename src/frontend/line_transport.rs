use std::future::Future;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::info;

use super::stats::TransportStats;
use crate::engine::compressor::Compressor;

/// Reads one JSON array per line and writes one compressed array per line.
pub struct LineTransport<R, W> {
    pub reader: BufReader<R>,
    pub writer: W,
    pub compressor: Arc<Compressor>,
}

impl<R, W> LineTransport<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W, compressor: Arc<Compressor>) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
            compressor,
        }
    }

    /// Runs until EOF or until `shutdown` resolves. Rejected payloads are
    /// logged and skipped.
    pub async fn run<S>(&mut self, shutdown: S) -> std::io::Result<TransportStats>
    where
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut stats = TransportStats::default();

        loop {
            let mut line = Vec::new();
            let bytes = tokio::select! {
                read = self.reader.read_until(b'\n', &mut line) => read?,
                _ = &mut shutdown => {
                    info!(target: "ts_compressor::frontend", "Shutdown requested, stopping input loop");
                    break;
                }
            };
            if bytes == 0 {
                info!(target: "ts_compressor::frontend", "EOF - input closed");
                break;
            }

            let payload = line.trim_ascii();
            if payload.is_empty() {
                continue;
            }

            match self.compressor.compress_json(payload) {
                Ok(compressed) => {
                    self.writer.write_all(&compressed).await?;
                    self.writer.write_all(b"\n").await?;
                    stats.record_success(payload.len(), compressed.len());
                }
                Err(e) => {
                    e.log_error();
                    stats.record_failure();
                }
            }
        }

        self.writer.flush().await?;
        Ok(stats)
    }
}
