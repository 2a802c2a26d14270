pub mod file_batch;
pub mod line_transport;
pub mod shutdown;
pub mod stats;

pub use file_batch::run_files;
pub use line_transport::LineTransport;
pub use shutdown::{SHUTDOWN_GRACE, block_on_with_grace};
pub use stats::TransportStats;

#[cfg(test)]
mod stats_test;
