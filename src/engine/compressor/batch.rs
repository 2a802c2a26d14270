use std::fmt::Display;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::grouping::Compressor;

impl Compressor {
    /// Compresses independent payloads with at most `workers` running at once.
    ///
    /// The result is index-aligned with `batches`: slot `i` is `None` when
    /// payload `i` was rejected or its task panicked. Returns once every
    /// payload has been processed.
    pub async fn compress_batch(self: &Arc<Self>, batches: Vec<Vec<u8>>) -> Vec<Option<Vec<u8>>> {
        let permits = self.config.worker_permits();
        debug!(
            target: "ts_compressor::batch",
            items = batches.len(),
            permits,
            "Starting batch"
        );

        let compressor = Arc::clone(self);
        run_bounded(batches, permits, move |data: Vec<u8>| {
            compressor.compress_json(&data)
        })
        .await
    }
}

/// Runs `work` on every item on the blocking pool, bounded by `permits`
/// concurrent executions. Results are written back by input index.
pub(crate) async fn run_bounded<T, R, E, F>(items: Vec<T>, permits: usize, work: F) -> Vec<Option<R>>
where
    T: Send + 'static,
    R: Send + 'static,
    E: Display + Send + 'static,
    F: Fn(T) -> Result<R, E> + Send + Sync + 'static,
{
    let semaphore = Arc::new(Semaphore::new(permits.max(1)));
    let work = Arc::new(work);
    let mut handles: Vec<JoinHandle<Result<R, E>>> = Vec::with_capacity(items.len());

    for item in items {
        // The semaphore is never closed, so acquisition only waits
        let permit = Arc::clone(&semaphore).acquire_owned().await.ok();
        let work = Arc::clone(&work);
        handles.push(tokio::task::spawn_blocking(move || {
            let _permit = permit;
            (*work)(item)
        }));
    }

    let mut results = Vec::with_capacity(handles.len());
    for (index, handle) in handles.into_iter().enumerate() {
        match handle.await {
            Ok(Ok(out)) => results.push(Some(out)),
            Ok(Err(e)) => {
                warn!(target: "ts_compressor::batch", index, error = %e, "Batch item failed");
                results.push(None);
            }
            Err(e) => {
                warn!(target: "ts_compressor::batch", index, error = %e, "Batch item task aborted");
                results.push(None);
            }
        }
    }
    results
}
