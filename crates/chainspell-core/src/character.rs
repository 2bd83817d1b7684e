// Character classification for word extraction

/// The apostrophe that may appear inside a word ("don't", "dog's").
pub const APOSTROPHE: char = '\'';

/// Character class as seen by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCII letter `A-Z` / `a-z`.
    Letter,
    /// The ASCII apostrophe `'`.
    Apostrophe,
    /// Anything else: digits, whitespace, punctuation, non-ASCII.
    Other,
}

/// Classify a character.
///
/// Only ASCII letters count as letters; every other alphabetic code point is
/// treated as a separator.
pub fn classify(c: char) -> CharClass {
    if c.is_ascii_alphabetic() {
        CharClass::Letter
    } else if c == APOSTROPHE {
        CharClass::Apostrophe
    } else {
        CharClass::Other
    }
}

/// Whether a word may start with this character.
///
/// Apostrophes continue a word but never open one.
pub fn starts_word(c: char) -> bool {
    classify(c) == CharClass::Letter
}

/// Whether this character extends a word that has already started.
pub fn continues_word(c: char) -> bool {
    matches!(classify(c), CharClass::Letter | CharClass::Apostrophe)
}
