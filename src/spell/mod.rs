//! Spell module - Turning lines into checked tokens
//!
//! This module provides:
//! - Line tokenizing
//! - Composite identifier splitting (`camelCase`, `snake_case`)
//! - The dictionary of known words and the built-in word lists
//! - Token normalization and flagging

pub mod composite;
pub mod dictionary;
pub mod filter;
pub mod tokenizer;
pub mod wordlists;
