//! # trackstats Common Library
//!
//! Shared code for the trackstats service crates:
//! - Error and result types
//! - Configuration loading (TOML bootstrap file) and value resolution

pub mod config;
pub mod error;

pub use error::{Error, Result};
