pub mod config;
pub mod logging;

pub mod checksum;
pub mod data_uri;
pub mod emit;
pub mod error;
pub mod storage;

pub use emit::{emit, EmitReport};
pub use error::DotError;
