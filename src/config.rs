//! CLI configuration and validation.
//!
//! This module handles parsing and validating command-line arguments,
//! separate from the structural validation `Header::from_reader` performs
//! once the file is actually opened.

use std::{error::Error, fs, path::PathBuf};

use colored::Colorize;

/// Validated configuration for the `cortex-view` binary.
#[derive(Debug)]
pub struct Config {
    /// Path to the graph file. Existence is checked here; format
    /// validity is checked when the file is opened.
    pub graph: PathBuf,
    /// A sequence to slide a k-mer window across, if given.
    pub record: Option<String>,
}

impl Config {
    /// Creates a new configuration from string arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if `graph` does not exist, or `record` is given
    /// but empty.
    pub fn new(graph: &str, record: Option<String>) -> Result<Self, Box<dyn Error>> {
        let graph = match fs::metadata(graph) {
            Ok(_) => graph.into(),
            Err(e) => {
                return Err(
                    format!("Issue with file path: {err}", err = e.to_string().bold()).into(),
                )
            }
        };

        if let Some(ref sequence) = record {
            if sequence.is_empty() {
                return Err("--record sequence must not be empty".into());
            }
        }

        Ok(Self { graph, record })
    }
}
