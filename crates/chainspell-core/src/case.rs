// Capitalization helpers used by the morphology rules

/// Whether the first character of `word` is an uppercase letter.
///
/// Returns `false` for an empty word.
pub fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Lowercase a whole word.
///
/// Uses the full Unicode mapping, so the result may differ in byte length
/// from the input for non-ASCII text. Callers that slice by byte offsets
/// must slice before lowercasing.
pub fn lowercase(word: &str) -> String {
    word.to_lowercase()
}
