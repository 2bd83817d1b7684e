// Word extraction from free text

use std::str::Chars;

use chainspell_core::character::{continues_word, starts_word};

/// Lazy iterator over the words of a character stream.
///
/// A word starts at an ASCII letter and runs over letters and apostrophes
/// until any other character or the end of input. Leading apostrophes are
/// skipped as separators; trailing ones stay part of the word, so
/// `"the dogs' bowls"` yields `the`, `dogs'`, `bowls`.
///
/// The iterator consumes its source and cannot be restarted.
#[derive(Debug, Clone)]
pub struct Words<I> {
    chars: I,
}

impl<I: Iterator<Item = char>> Words<I> {
    pub fn new(chars: I) -> Self {
        Self { chars }
    }
}

impl<I: Iterator<Item = char>> Iterator for Words<I> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let first = self.chars.by_ref().find(|&c| starts_word(c))?;

        let mut word = String::from(first);
        for c in self.chars.by_ref() {
            if !continues_word(c) {
                break;
            }
            word.push(c);
        }
        Some(word)
    }
}

/// Words of a string slice.
pub fn words(text: &str) -> Words<Chars<'_>> {
    Words::new(text.chars())
}
