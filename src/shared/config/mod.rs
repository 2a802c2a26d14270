pub mod model;

pub use model::{CompressorSettings, LoggingConfig, Settings, load_settings};
