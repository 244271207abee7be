//! Core infrastructure: configuration, errors, logging

pub mod config;
pub mod error;
pub mod logging;

pub use config::Config;
pub use error::{MyflixError, Result};
pub use logging::Logger;
