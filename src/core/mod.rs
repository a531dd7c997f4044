//! Core business logic module
//!
//! Everything here except the two pipelines is pure. The pipelines reach
//! the outside world only through [`crate::infra`].
//!
//! # Submodules
//!
//! - [`fqbn`] - FQBN discovery in board listings
//! - [`package_url`] - Package index URL heuristic
//! - [`normalize`] - Known package URL corrections
//! - [`compact`] - Compact per-board entries
//! - [`sanitize`] - File names derived from FQBNs
//! - [`json`] - Published JSON encoding
//! - [`aggregate`] - Board detail aggregation pipeline
//! - [`libraries`] - Library reference export pipeline

pub mod aggregate;
pub mod compact;
pub mod fqbn;
pub mod json;
pub mod libraries;
pub mod normalize;
pub mod package_url;
pub mod sanitize;
