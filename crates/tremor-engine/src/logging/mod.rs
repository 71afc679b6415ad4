//! Logging utilities.
//!
//! The runtime logs through the `log` facade only; binaries call
//! [`init_logging`] once to install `env_logger` as the backend.

mod init;

pub use init::{init_logging, LoggingConfig};
