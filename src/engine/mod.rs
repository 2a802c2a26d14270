pub mod compressor;
pub mod errors;

pub use errors::*;
