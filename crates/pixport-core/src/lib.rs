//! Core types shared across the pixport workspace: configuration, the
//! unified error type, and the target-format enumeration.

pub mod config;
pub mod error;
pub mod format;

pub use config::Config;
pub use error::{AppError, LogLevel};
pub use format::TargetFormat;
