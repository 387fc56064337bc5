//! Common utilities and definitions shared across modules
//!
//! Configuration, the crate-level error type and driver constants.

pub mod config;
pub mod consts;
pub mod error;

pub use config::Config;
pub use consts::*;
pub use error::{Error, Result};
