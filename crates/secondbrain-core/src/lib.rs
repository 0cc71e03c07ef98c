//! # secondbrain-core
//!
//! Configuration and utilities shared by the SecondBrain crates.
//!
//! - **Configuration**: loading, validation, and persistence of the config file
//! - **Paths**: resolution of the data directory, store file, and image directory
//! - **Environment**: `.env` loading and typed variable access

pub mod config;
pub mod env;
pub mod error;
pub mod paths;

pub use config::Config;
pub use error::ConfigError;
