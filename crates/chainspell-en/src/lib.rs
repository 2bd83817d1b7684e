//! English spell checking over a chained dictionary table.
//!
//! - [`morphology`] -- Suffix and capitalization rules tried after an exact miss
//! - [`tokenizer`] -- Lazy extraction of words from free text
//! - [`handle`] -- [`SpellChecker`](handle::SpellChecker), which owns the
//!   table and the run counters

pub mod handle;
pub mod morphology;
pub mod tokenizer;
