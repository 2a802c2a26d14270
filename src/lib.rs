pub mod engine;
pub mod frontend;
pub mod logging;
pub mod shared;

pub use engine::compressor::{AggregationMethod, Compressor, CompressorConfig, compression_ratio};
pub use engine::errors::CompressError;

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
