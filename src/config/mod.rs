//! Configuration module for Press-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; missing values fall back to defaults.
//!
//! # Example
//!
//! ```no_run
//! use press_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Will visit at most {} pages per blog", config.extractor.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{BlogEntry, Config, ExtractorConfig, HttpConfig, OutputConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
