//! Scan module - Files in, occurrence index out
//!
//! Provides:
//! - targets: expanding paths and directories into files to scan
//! - engine: per-line processing in cross-reference or spell-check mode
//! - index: the token -> file -> lines occurrence index and its statistics

pub mod engine;
pub mod index;
pub mod targets;
