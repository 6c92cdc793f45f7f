//! Query tokenization and text normalization.
//!
//! Queries and haystacks go through the same [`normalize`] step so the two
//! sides of a substring check always agree on case (and, optionally, on
//! diacritics).

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Split a query into lowercase tokens.
///
/// Runs of whitespace separate tokens; empty tokens are dropped. An empty or
/// all-whitespace query yields no tokens, and no tokens means no matches.
///
/// ```
/// assert_eq!(sifter::tokenize("  AI   Playground "), vec!["ai", "playground"]);
/// assert!(sifter::tokenize("").is_empty());
/// ```
pub fn tokenize(query: &str) -> Vec<String> {
    tokenize_with(query, false)
}

/// [`tokenize`], optionally folding diacritics first.
pub fn tokenize_with(query: &str, fold_diacritics: bool) -> Vec<String> {
    normalize(query, fold_diacritics)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Lowercase `value`, stripping combining marks first when `fold_diacritics`
/// is set:
/// - "café" → "cafe"
/// - "naïve" → "naive"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
///
/// Whitespace is left alone; callers split or join as they need.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str, fold_diacritics: bool) -> String {
    if fold_diacritics {
        value
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .collect::<String>()
            .to_lowercase()
    } else {
        value.to_lowercase()
    }
}

/// Without unicode-normalization there is nothing to fold with, so this only
/// lowercases.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str, _fold_diacritics: bool) -> String {
    value.to_lowercase()
}

/// Combining marks (Unicode category Mn) in the blocks that show up in
/// product names and article titles.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
