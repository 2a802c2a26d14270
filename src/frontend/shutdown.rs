use std::future::Future;
use std::time::Duration;

use tracing::debug;

/// How long exit waits for blocking-pool work, such as a stdin read parked
/// until the next newline.
pub const SHUTDOWN_GRACE: Duration = Duration::from_millis(250);

/// Drives `future` to completion on a fresh runtime, then shuts the runtime
/// down without waiting longer than `grace` for blocking tasks.
pub fn block_on_with_grace<F: Future>(future: F, grace: Duration) -> std::io::Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let output = runtime.block_on(future);

    debug!(target: "ts_compressor::frontend", grace_ms = grace.as_millis() as u64, "Shutting down runtime");
    runtime.shutdown_timeout(grace);
    Ok(output)
}
