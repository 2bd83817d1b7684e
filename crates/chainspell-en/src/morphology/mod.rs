// Suffix and capitalization rules for words missing from the dictionary

use chainspell_core::case::{lowercase, starts_uppercase};
use chainspell_table::Lexicon;

/// The rule variant that accepted a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchRule {
    /// The word itself is in the dictionary.
    Exact,
    /// Capitalized word found in lowercase: "Dog" -> "dog".
    Lowercase,
    /// Possessive `'s` removed: "dog's" -> "dog".
    Possessive,
    /// Plural `es` removed: "dishes" -> "dish".
    PluralEs,
    /// Plural `s` removed: "cats" -> "cat".
    PluralS,
    /// `ed` / `er` removed: "baked" -> "bak".
    EdErStem,
    /// Final `d` / `r` removed: "baked" -> "bake".
    EdErDropLast,
    /// `ing` removed: "walking" -> "walk".
    IngStem,
    /// `ing` replaced by `e`: "baking" -> "bake".
    IngStemAddE,
    /// `ly` removed: "quickly" -> "quick".
    LyStem,
}

/// Heuristic matcher that reduces false positives from inflection and
/// capitalization.
///
/// After an exact miss exactly one rule family is tried, chosen by the
/// surface form of the word in this order:
///
/// 1. first letter uppercase: the lowercased word;
/// 2. ends in `s`: strip `'s`, `es` or `s`;
/// 3. ends in `ed` / `er`: strip both letters, then only the last;
/// 4. ends in `ing`: strip it, then strip it and append `e`;
/// 5. ends in `ly`: strip it.
///
/// Stems are lowercased before the lookup. The families do not combine, so
/// "Cats" is only tried as "cats", never as "cat".
#[derive(Debug, Clone, Copy, Default)]
pub struct MorphologyMatcher;

impl MorphologyMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Whether `word` or one of its permitted variants is in `lexicon`.
    pub fn check<L: Lexicon + ?Sized>(&self, word: &str, lexicon: &L) -> bool {
        self.matching_rule(word, lexicon).is_some()
    }

    /// The rule that accepted `word`, or `None` if it is unmatched.
    ///
    /// Makes at most three lookups: the exact word and up to two variants.
    pub fn matching_rule<L: Lexicon + ?Sized>(
        &self,
        word: &str,
        lexicon: &L,
    ) -> Option<MatchRule> {
        if lexicon.lookup(word) {
            return Some(MatchRule::Exact);
        }

        if starts_uppercase(word) {
            return accept(lexicon, &lowercase(word), MatchRule::Lowercase);
        }

        // All suffix tests compare ASCII bytes. A multi-byte character never
        // yields an ASCII byte, so the offsets below are char boundaries.
        let bytes = word.as_bytes();
        let last = bytes.last().copied();
        let second_last = bytes.len().checked_sub(2).map(|i| bytes[i]);

        if last == Some(b's') {
            return match second_last {
                Some(b'\'') => strip(lexicon, word, 2, MatchRule::Possessive),
                Some(b'e') => strip(lexicon, word, 2, MatchRule::PluralEs),
                _ => strip(lexicon, word, 1, MatchRule::PluralS),
            };
        }

        if second_last == Some(b'e') {
            if matches!(last, Some(b'd' | b'r')) {
                return strip(lexicon, word, 2, MatchRule::EdErStem)
                    .or_else(|| strip(lexicon, word, 1, MatchRule::EdErDropLast));
            }
            return None;
        }

        if word.ends_with("ing") {
            let mut stem = stem_of(word, 3);
            if lexicon.lookup(&stem) {
                return Some(MatchRule::IngStem);
            }
            stem.push('e');
            return accept(lexicon, &stem, MatchRule::IngStemAddE);
        }

        if word.ends_with("ly") {
            return strip(lexicon, word, 2, MatchRule::LyStem);
        }

        None
    }
}

/// Lowercased `word` without its last `suffix_len` bytes.
fn stem_of(word: &str, suffix_len: usize) -> String {
    lowercase(&word[..word.len() - suffix_len])
}

fn strip<L: Lexicon + ?Sized>(
    lexicon: &L,
    word: &str,
    suffix_len: usize,
    rule: MatchRule,
) -> Option<MatchRule> {
    accept(lexicon, &stem_of(word, suffix_len), rule)
}

fn accept<L: Lexicon + ?Sized>(
    lexicon: &L,
    candidate: &str,
    rule: MatchRule,
) -> Option<MatchRule> {
    lexicon.lookup(candidate).then_some(rule)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashSet;

    use chainspell_table::HashTable;

    use super::*;

    /// Lexicon that records every query in order.
    struct Recording {
        words: HashSet<&'static str>,
        queries: RefCell<Vec<String>>,
    }

    impl Recording {
        fn new(words: &[&'static str]) -> Self {
            Self {
                words: words.iter().copied().collect(),
                queries: RefCell::new(Vec::new()),
            }
        }

        fn queries(&self) -> Vec<String> {
            self.queries.borrow().clone()
        }
    }

    impl Lexicon for Recording {
        fn lookup(&self, word: &str) -> bool {
            self.queries.borrow_mut().push(word.to_string());
            self.words.contains(word)
        }
    }

    fn run(dict: &[&'static str], word: &str) -> (Option<MatchRule>, Vec<String>) {
        let lexicon = Recording::new(dict);
        let rule = MorphologyMatcher::new().matching_rule(word, &lexicon);
        (rule, lexicon.queries())
    }

    #[test]
    fn exact_match_stops_immediately() {
        let (rule, queries) = run(&["Dog"], "Dog");
        assert_eq!(rule, Some(MatchRule::Exact));
        assert_eq!(queries, ["Dog"]);
    }

    #[test]
    fn capitalized_word_is_lowercased() {
        let (rule, queries) = run(&["dog"], "Dog");
        assert_eq!(rule, Some(MatchRule::Lowercase));
        assert_eq!(queries, ["Dog", "dog"]);
    }

    #[test]
    fn all_caps_word_is_lowercased() {
        let (rule, _) = run(&["dishes"], "DISHES");
        assert_eq!(rule, Some(MatchRule::Lowercase));
    }

    #[test]
    fn capitalized_plural_is_not_stripped() {
        let (rule, queries) = run(&["cat"], "Cats");
        assert_eq!(rule, None);
        assert_eq!(queries, ["Cats", "cats"]);
    }

    #[test]
    fn plural_s() {
        let (rule, queries) = run(&["cat"], "cats");
        assert_eq!(rule, Some(MatchRule::PluralS));
        assert_eq!(queries, ["cats", "cat"]);
    }

    #[test]
    fn plural_es() {
        let (rule, queries) = run(&["dish"], "dishes");
        assert_eq!(rule, Some(MatchRule::PluralEs));
        assert_eq!(queries, ["dishes", "dish"]);
    }

    #[test]
    fn plural_es_does_not_fall_back_to_s() {
        // "bees" strips to "be", never to "bee"
        let (rule, queries) = run(&["bee"], "bees");
        assert_eq!(rule, None);
        assert_eq!(queries, ["bees", "be"]);
    }

    #[test]
    fn possessive() {
        let (rule, queries) = run(&["dog"], "dog's");
        assert_eq!(rule, Some(MatchRule::Possessive));
        assert_eq!(queries, ["dog's", "dog"]);
    }

    #[test]
    fn single_s_strips_to_empty() {
        let (rule, queries) = run(&[], "s");
        assert_eq!(rule, None);
        assert_eq!(queries, ["s", ""]);
    }

    #[test]
    fn past_tense_tries_stem_then_drop_last() {
        let (rule, queries) = run(&["bake"], "baked");
        assert_eq!(rule, Some(MatchRule::EdErDropLast));
        assert_eq!(queries, ["baked", "bak", "bake"]);
    }

    #[test]
    fn past_tense_plain_stem() {
        let (rule, queries) = run(&["walk"], "walked");
        assert_eq!(rule, Some(MatchRule::EdErStem));
        assert_eq!(queries, ["walked", "walk"]);
    }

    #[test]
    fn agent_noun() {
        let (rule, _) = run(&["bake"], "baker");
        assert_eq!(rule, Some(MatchRule::EdErDropLast));
        let (rule, _) = run(&["read"], "reader");
        assert_eq!(rule, Some(MatchRule::EdErStem));
    }

    #[test]
    fn other_e_endings_make_no_extra_lookup() {
        let (rule, queries) = run(&["tre"], "tree");
        assert_eq!(rule, None);
        assert_eq!(queries, ["tree"]);
    }

    #[test]
    fn ing_stem() {
        let (rule, queries) = run(&["walk"], "walking");
        assert_eq!(rule, Some(MatchRule::IngStem));
        assert_eq!(queries, ["walking", "walk"]);
    }

    #[test]
    fn ing_stem_with_e() {
        let (rule, queries) = run(&["bake"], "baking");
        assert_eq!(rule, Some(MatchRule::IngStemAddE));
        assert_eq!(queries, ["baking", "bak", "bake"]);
    }

    #[test]
    fn ly_stem() {
        let (rule, queries) = run(&["quick"], "quickly");
        assert_eq!(rule, Some(MatchRule::LyStem));
        assert_eq!(queries, ["quickly", "quick"]);
    }

    #[test]
    fn unknown_word_without_suffix() {
        let (rule, queries) = run(&["cat", "dog"], "xyzzy");
        assert_eq!(rule, None);
        assert_eq!(queries, ["xyzzy"]);
    }

    #[test]
    fn empty_word_only_tries_exact() {
        let (rule, queries) = run(&[], "");
        assert_eq!(rule, None);
        assert_eq!(queries, [""]);
    }

    #[test]
    fn non_ascii_word_does_not_panic() {
        let (rule, queries) = run(&[], "caf\u{00E9}s");
        assert_eq!(rule, None);
        assert_eq!(queries, ["caf\u{00E9}s", "caf\u{00E9}"]);
    }

    #[test]
    fn check_against_hash_table() {
        let mut table = HashTable::new();
        table.insert("cat");
        table.insert("dog");
        let matcher = MorphologyMatcher::new();
        assert!(matcher.check("cats", &table));
        assert!(matcher.check("Dog", &table));
        assert!(!matcher.check("xyzzy", &table));
        // exact + "cat", exact + "dog", exact only
        assert_eq!(table.total_lookups(), 5);
    }
}
