//! Infrastructure layer
//!
//! Handles all I/O operations: external processes, filesystem, network and
//! SQLite. This module is the only place where side effects occur.

pub mod board_tool;
pub mod download;
pub mod filesystem;
pub mod library_db;
