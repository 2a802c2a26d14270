pub mod compressor_config_factory;
pub mod payload_factory;
pub mod record_factory;

pub use compressor_config_factory::CompressorConfigFactory;
pub use payload_factory::PayloadFactory;
pub use record_factory::RecordFactory;
