// SpellChecker: owns the dictionary table and the counters of one run.
//
// The run has two phases. The load phase inserts every dictionary entry;
// the query phase checks words and only reads the table (its probe counters
// use interior mutability). Nothing is global: a caller that wants two
// independent runs creates two checkers.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;

use chainspell_core::stats::RunStats;
use chainspell_table::HashTable;
use hashbrown::HashMap;
use tracing::{debug, trace};

use crate::morphology::MorphologyMatcher;
use crate::tokenizer;

/// Error type for loading a dictionary or reading text.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The dictionary file could not be opened or read.
    #[error("cannot open dictionary file {}: {source}", .path.display())]
    Dictionary { path: PathBuf, source: io::Error },

    /// The text file could not be opened or read.
    #[error("cannot open input file {}: {source}", .path.display())]
    Text { path: PathBuf, source: io::Error },

    /// Reading from a stream failed.
    #[error("failed to read input: {0}")]
    Read(#[from] io::Error),
}

/// Options for a [`SpellChecker`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckerOptions {
    /// Count how often each distinct misspelled word occurs.
    pub tally_misspellings: bool,
}

/// Dictionary table plus the counters of one checking run.
#[derive(Debug)]
pub struct SpellChecker {
    table: HashTable,
    matcher: MorphologyMatcher,
    options: CheckerOptions,
    words_checked: u64,
    misspelled: u64,
    tally: HashMap<String, u64>,
}

impl SpellChecker {
    pub fn new(options: CheckerOptions) -> Self {
        Self {
            table: HashTable::new(),
            matcher: MorphologyMatcher::new(),
            options,
            words_checked: 0,
            misspelled: 0,
            tally: HashMap::new(),
        }
    }

    /// Add one dictionary entry.
    pub fn insert(&mut self, word: &str) {
        self.table.insert(word);
    }

    /// Insert every whitespace-separated token of `reader` as an entry.
    ///
    /// Returns the number of entries added.
    pub fn load_dictionary<R: BufRead>(&mut self, reader: R) -> Result<u64, CheckError> {
        let start = Instant::now();
        let mut added = 0u64;
        for line in reader.lines() {
            let line = line?;
            for word in line.split_whitespace() {
                self.insert(word);
                added += 1;
            }
        }
        debug!(
            entries = added,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "dictionary loaded"
        );
        Ok(added)
    }

    /// Load the dictionary from a file. See [`load_dictionary`](Self::load_dictionary).
    pub fn load_dictionary_file(&mut self, path: impl AsRef<Path>) -> Result<u64, CheckError> {
        let path = path.as_ref();
        let dictionary_error = |source: io::Error| CheckError::Dictionary {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(dictionary_error)?;
        self.load_dictionary(BufReader::new(file))
            .map_err(|e| match e {
                CheckError::Read(source) => dictionary_error(source),
                other => other,
            })
    }

    /// Check one word, updating the run counters.
    ///
    /// Returns `true` if the word or one of its permitted variants is in the
    /// dictionary.
    pub fn check(&mut self, word: &str) -> bool {
        self.words_checked += 1;
        match self.matcher.matching_rule(word, &self.table) {
            Some(rule) => {
                trace!(word, ?rule, "accepted");
                true
            }
            None => {
                trace!(word, "misspelled");
                self.misspelled += 1;
                if self.options.tally_misspellings {
                    if let Some(count) = self.tally.get_mut(word) {
                        *count += 1;
                    } else {
                        self.tally.insert(word.to_owned(), 1);
                    }
                }
                false
            }
        }
    }

    /// Check every word of `text`, calling `on_misspelled` for each rejected
    /// word in text order.
    ///
    /// Returns the number of words checked.
    pub fn check_text(&mut self, text: &str, mut on_misspelled: impl FnMut(&str)) -> u64 {
        let start = Instant::now();
        let mut count = 0u64;
        for word in tokenizer::words(text) {
            count += 1;
            if !self.check(&word) {
                on_misspelled(&word);
            }
        }
        debug!(
            words = count,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "text checked"
        );
        count
    }

    /// Read all of `reader` as UTF-8 text and check it.
    pub fn check_reader<R: Read>(
        &mut self,
        mut reader: R,
        on_misspelled: impl FnMut(&str),
    ) -> Result<u64, CheckError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(self.check_text(&text, on_misspelled))
    }

    /// Read a text file and check it.
    pub fn check_file(
        &mut self,
        path: impl AsRef<Path>,
        on_misspelled: impl FnMut(&str),
    ) -> Result<u64, CheckError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CheckError::Text {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.check_text(&text, on_misspelled))
    }

    /// Snapshot of all counters.
    pub fn stats(&self) -> RunStats {
        RunStats {
            dict_length: self.table.dict_length(),
            words_checked: self.words_checked,
            misspelled: self.misspelled,
            total_probes: self.table.total_probes(),
            total_lookups: self.table.total_lookups(),
        }
    }

    /// Distinct misspelled words with their counts, most frequent first and
    /// alphabetical among equal counts.
    ///
    /// Empty unless [`CheckerOptions::tally_misspellings`] is set.
    pub fn misspelled_tally(&self) -> Vec<(String, u64)> {
        let mut tally: Vec<(String, u64)> = self
            .tally
            .iter()
            .map(|(word, &count)| (word.clone(), count))
            .collect();
        tally.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        tally
    }

    pub fn table(&self) -> &HashTable {
        &self.table
    }

    pub fn options(&self) -> &CheckerOptions {
        &self.options
    }
}

impl Default for SpellChecker {
    fn default() -> Self {
        Self::new(CheckerOptions::default())
    }
}
