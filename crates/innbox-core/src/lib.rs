//! Innbox Core — shared data model, error type, configuration.

pub mod config;
pub mod error;
pub mod message;

pub use config::{DataPaths, InnboxConfig};
pub use error::{Error, Result};
pub use message::RawMessage;
