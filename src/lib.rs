//! Boardmeta - Arduino board and library metadata publisher
//!
//! This library turns the output of an `arduino-cli` style board tool and a
//! remote library documentation database into static JSON for a website.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Extraction, scoring and aggregation logic
//! - [`infra`] - Infrastructure layer (processes, filesystem, network, SQLite)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
