//! Dictionary hash table engine.
//!
//! A fixed-capacity table of word keys with separate chaining, a
//! multiplicative/XOR string hash, golden-ratio compression into slot
//! indices, and probe counters for measuring hash quality.
//!
//! # Architecture
//!
//! - [`hash`] -- String hash and golden-ratio compression
//! - [`table`] -- Slot array, collision chains, insert/lookup and counters

pub mod hash;
pub mod table;

pub use table::{HashTable, Occupancy, TableStats};

/// Number of slots in the table. Prime, so compressed indices spread evenly.
pub const TABLE_SIZE: usize = 28669;

/// Something that answers exact-match word queries.
///
/// Lookups may update instrumentation counters, so implementations are free
/// to use interior mutability; the query itself never changes the contents.
pub trait Lexicon {
    /// Exact, case-sensitive membership test.
    fn lookup(&self, word: &str) -> bool;
}
