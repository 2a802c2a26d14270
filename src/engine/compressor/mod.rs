mod batch;
pub mod config;
mod field;
pub mod group;
pub mod group_key;
mod grouping;
pub mod ops;
mod ratio;

pub use config::CompressorConfig;
pub use group::Group;
pub use group_key::GroupKey;
pub use grouping::Compressor;
pub use ops::AggregationMethod;
pub use ratio::compression_ratio;

#[cfg(test)]
mod ratio_test;
