//! Core module - Shared plumbing around the scanner
//!
//! This module provides:
//! - Error types
//! - Line-oriented file reading
//! - Path normalization
//! - The serializable report model and its renderers

pub mod error;
pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
