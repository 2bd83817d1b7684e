//! End-to-end checks through `SpellChecker`: dictionary files on disk, text
//! files, counters and the suffix rules working together.

use std::io::Write;

use chainspell_en::handle::{CheckError, CheckerOptions, SpellChecker};
use tempfile::NamedTempFile;

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

fn check_all(checker: &mut SpellChecker, text: &str) -> Vec<String> {
    let mut misspelled = Vec::new();
    checker.check_text(text, |w| misspelled.push(w.to_string()));
    misspelled
}

#[test]
fn plural_of_dictionary_word_is_accepted() {
    let mut checker = SpellChecker::default();
    checker.insert("cat");
    checker.insert("dog");
    assert_eq!(checker.stats().dict_length, 2);

    assert!(checker.check("cats"));
    assert_eq!(checker.stats().misspelled, 0);
}

#[test]
fn past_tense_falls_back_to_drop_last() {
    let mut checker = SpellChecker::default();
    checker.insert("bake");
    assert!(checker.check("baked"));
    // "baked", "bak", "bake"
    assert_eq!(checker.stats().total_lookups, 3);
}

#[test]
fn capitalized_word_matches_lowercase_entry() {
    let mut checker = SpellChecker::default();
    checker.insert("dog");
    assert!(checker.check("Dog"));
}

#[test]
fn unknown_word_is_misspelled() {
    let mut checker = SpellChecker::default();
    checker.insert("cat");
    assert!(!checker.check("xyzzy"));
    assert_eq!(checker.stats().misspelled, 1);
}

#[test]
fn dictionary_and_text_files() {
    let dict = temp_file("the\nquick\nbrown\nfox\njump\nover\nlazy\ndog\nbake\n");
    let text = temp_file("The quick brown fox jumped over the lazy dogs.\nQuickly, teh fox was baking!\n");

    let mut checker = SpellChecker::default();
    let loaded = checker.load_dictionary_file(dict.path()).unwrap();
    assert_eq!(loaded, 9);

    let mut misspelled = Vec::new();
    let words = checker
        .check_file(text.path(), |w| misspelled.push(w.to_string()))
        .unwrap();

    assert_eq!(words, 14);
    // "Quickly" is capitalized, so the "ly" rule is never tried
    assert_eq!(misspelled, ["Quickly", "teh", "was"]);

    let stats = checker.stats();
    assert_eq!(stats.words_checked, 14);
    assert_eq!(stats.misspelled, 3);
    assert_eq!(stats.dict_length, 9);
    assert!(stats.total_probes >= stats.total_lookups);
    assert!(stats.probes_per_word().is_some());
}

#[test]
fn every_dictionary_word_checks_clean() {
    let words = [
        "apple", "banana", "cherry", "date", "elderberry", "fig", "grape", "honeydew", "kiwi",
        "lemon", "mango", "nectarine", "orange", "papaya", "quince", "raspberry",
    ];
    let mut checker = SpellChecker::default();
    checker
        .load_dictionary(words.join("\n").as_bytes())
        .unwrap();
    let misspelled = check_all(&mut checker, &words.join(" "));
    assert!(misspelled.is_empty(), "{misspelled:?}");
    // No suffix rule was needed, so one lookup per word
    assert_eq!(checker.stats().total_lookups, words.len() as u64);
}

#[test]
fn lookups_count_every_rule_attempt() {
    let mut checker = SpellChecker::default();
    checker.insert("walk");
    // exact + "walk" | exact + "bak" + "bake" | exact
    check_all(&mut checker, "walking baking zzz");
    let stats = checker.stats();
    assert_eq!(stats.words_checked, 3);
    assert_eq!(stats.misspelled, 2);
    assert_eq!(stats.total_lookups, 6);
}

#[test]
fn counters_accumulate_across_texts() {
    let mut checker = SpellChecker::default();
    checker.insert("cat");
    check_all(&mut checker, "cat cat");
    let first = checker.stats();
    check_all(&mut checker, "cat");
    let second = checker.stats();
    assert_eq!(second.words_checked, first.words_checked + 1);
    assert_eq!(second.total_lookups, first.total_lookups + 1);
    assert!(second.total_probes > first.total_probes);
}

#[test]
fn empty_text_leaves_averages_undefined() {
    let mut checker = SpellChecker::default();
    checker.insert("cat");
    assert_eq!(checker.check_text("", |_| {}), 0);
    let stats = checker.stats();
    assert_eq!(stats.probes_per_word(), None);
    assert_eq!(stats.probes_per_lookup(), None);
}

#[test]
fn tally_collects_repeated_misspellings() {
    let mut checker = SpellChecker::new(CheckerOptions {
        tally_misspellings: true,
    });
    checker.insert("the");
    check_all(&mut checker, "teh the teh hte teh");
    assert_eq!(
        checker.misspelled_tally(),
        [("teh".to_string(), 3), ("hte".to_string(), 1)]
    );
}

#[test]
fn missing_dictionary_reports_path() {
    let mut checker = SpellChecker::default();
    let err = checker
        .load_dictionary_file("/definitely/not/here.dict")
        .unwrap_err();
    match err {
        CheckError::Dictionary { ref path, .. } => {
            assert_eq!(path.to_str(), Some("/definitely/not/here.dict"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
