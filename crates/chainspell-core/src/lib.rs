//! Shared types for chainspell.
//!
//! - [`character`] -- Character classification used by the tokenizer
//! - [`case`] -- Capitalization checks and lowercasing
//! - [`stats`] -- End-of-run statistics and derived averages

pub mod case;
pub mod character;
pub mod stats;
