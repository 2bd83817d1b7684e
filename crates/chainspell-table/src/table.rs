// Chained hash table with probe counting

use std::cell::Cell;
use std::fmt;

use crate::hash::slot_of;
use crate::{Lexicon, TABLE_SIZE};

/// One dictionary word in a collision chain.
///
/// Each entry owns its successor; the slot owns the chain head.
struct Entry {
    key: Box<str>,
    next: Option<Box<Entry>>,
}

impl Entry {
    fn new(key: &str) -> Box<Self> {
        Box::new(Self {
            key: key.into(),
            next: None,
        })
    }
}

/// Counter snapshot of a [`HashTable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStats {
    /// Entries inserted, duplicates included.
    pub dict_length: u64,
    /// Slot checks and key comparisons made by all lookups.
    pub total_probes: u64,
    /// Calls to [`HashTable::lookup`].
    pub total_lookups: u64,
}

/// How the entries are spread over the slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Occupancy {
    /// Slots holding at least one entry.
    pub occupied_slots: usize,
    /// Slots holding nothing.
    pub empty_slots: usize,
    /// Length of the longest collision chain.
    pub longest_chain: usize,
    /// Entries per slot.
    pub load_factor: f64,
}

/// Fixed-capacity dictionary table.
///
/// Words are placed by [`slot_of`]; colliding words are appended to the tail
/// of the slot's chain, so chain order is insertion order. The table never
/// resizes and never deduplicates.
///
/// Every lookup is counted. A lookup into an empty slot costs one probe, and
/// a lookup into an occupied slot costs one probe per chain entry compared.
/// The counters sit in [`Cell`]s so that queries only need `&self` once the
/// dictionary has been loaded.
pub struct HashTable {
    slots: Box<[Option<Box<Entry>>]>,
    dict_length: u64,
    total_probes: Cell<u64>,
    total_lookups: Cell<u64>,
}

impl HashTable {
    /// Create an empty table with [`TABLE_SIZE`] slots.
    pub fn new() -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(TABLE_SIZE).collect(),
            dict_length: 0,
            total_probes: Cell::new(0),
            total_lookups: Cell::new(0),
        }
    }

    /// Add a word to the table.
    ///
    /// An empty slot receives the word as its chain head; otherwise the word
    /// is appended after the current tail. Inserting a word twice stores it
    /// twice.
    pub fn insert(&mut self, word: &str) {
        let mut cursor = &mut self.slots[slot_of(word)];
        while let Some(entry) = cursor {
            cursor = &mut entry.next;
        }
        *cursor = Some(Entry::new(word));
        self.dict_length += 1;
    }

    /// Exact, case-sensitive membership test.
    ///
    /// Increments the lookup counter once. The probe counter grows by one
    /// for an empty slot, otherwise by one per chain entry compared up to
    /// and including the first match.
    pub fn lookup(&self, word: &str) -> bool {
        self.total_lookups.set(self.total_lookups.get() + 1);

        let mut probes: u64 = 0;
        let mut found = false;
        for key in self.chain(slot_of(word)) {
            probes += 1;
            if key == word {
                found = true;
                break;
            }
        }
        // An empty slot still costs the check that found it empty
        self.total_probes.set(self.total_probes.get() + probes.max(1));
        found
    }

    /// Keys stored in `slot`, head first.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= TABLE_SIZE`.
    pub fn chain(&self, slot: usize) -> Chain<'_> {
        Chain {
            next: self.slots[slot].as_deref(),
        }
    }

    /// Number of entries chained in `slot`.
    pub fn chain_len(&self, slot: usize) -> usize {
        self.chain(slot).count()
    }

    /// Number of entries inserted.
    pub fn dict_length(&self) -> u64 {
        self.dict_length
    }

    pub fn len(&self) -> usize {
        self.dict_length as usize
    }

    pub fn is_empty(&self) -> bool {
        self.dict_length == 0
    }

    /// Total probes over every lookup made so far.
    pub fn total_probes(&self) -> u64 {
        self.total_probes.get()
    }

    /// Number of lookups made so far.
    pub fn total_lookups(&self) -> u64 {
        self.total_lookups.get()
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            dict_length: self.dict_length,
            total_probes: self.total_probes(),
            total_lookups: self.total_lookups(),
        }
    }

    /// Walk every slot and summarize the chain lengths.
    pub fn occupancy(&self) -> Occupancy {
        let mut occupied_slots = 0;
        let mut longest_chain = 0;
        for slot in 0..self.slots.len() {
            let len = self.chain_len(slot);
            if len > 0 {
                occupied_slots += 1;
                longest_chain = longest_chain.max(len);
            }
        }
        Occupancy {
            occupied_slots,
            empty_slots: self.slots.len() - occupied_slots,
            longest_chain,
            load_factor: self.dict_length as f64 / self.slots.len() as f64,
        }
    }
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon for HashTable {
    fn lookup(&self, word: &str) -> bool {
        HashTable::lookup(self, word)
    }
}

impl fmt::Debug for HashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("dict_length", &self.dict_length)
            .field("total_probes", &self.total_probes.get())
            .field("total_lookups", &self.total_lookups.get())
            .finish_non_exhaustive()
    }
}

impl Drop for HashTable {
    // Unlink chains iteratively; the default recursive drop could overflow
    // the stack on a single very long chain.
    fn drop(&mut self) {
        for slot in self.slots.iter_mut() {
            let mut next = slot.take();
            while let Some(mut entry) = next {
                next = entry.next.take();
            }
        }
    }
}

/// Iterator over the keys of one collision chain.
pub struct Chain<'a> {
    next: Option<&'a Entry>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.next?;
        self.next = entry.next.as_deref();
        Some(&*entry.key)
    }
}
