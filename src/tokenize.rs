// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word tokenizer shared by documents and queries.
//!
//! A token is a maximal run of word characters (Unicode alphanumerics plus `_`)
//! after lower-casing. Everything else is a separator. There is no stemming,
//! no stop-word list and no minimum length: "a" and "2" are tokens.
//!
//! Documents and queries MUST go through the same function, otherwise term
//! statistics computed at load time are not comparable with query terms.

/// Is this a word character?
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lowercase `text` and split it into word tokens.
///
/// ```
/// use design_intel::tokenize;
///
/// assert_eq!(tokenize("Dark-Mode SaaS, v2!"), vec!["dark", "mode", "saas", "v2"]);
/// assert!(tokenize("  \t ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in lowered.char_indices() {
        if is_word_char(c) {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            tokens.push(lowered[s..i].to_string());
        }
    }
    // Trailing token (no separator after it)
    if let Some(s) = start {
        tokens.push(lowered[s..].to_string());
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits_on_punctuation() {
        assert_eq!(
            tokenize("Glassmorphism/Neumorphism: SOFT-UI"),
            vec!["glassmorphism", "neumorphism", "soft", "ui"]
        );
    }

    #[test]
    fn test_underscore_is_a_word_char() {
        assert_eq!(tokenize("UI_Category anti_patterns"), vec!["ui_category", "anti_patterns"]);
    }

    #[test]
    fn test_keeps_digits_and_single_chars() {
        assert_eq!(tokenize("#2563EB a 3d"), vec!["2563eb", "a", "3d"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
        assert!(tokenize("--- !!! ...").is_empty());
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(tokenize("Café Überblick"), vec!["café", "überblick"]);
    }

    #[test]
    fn test_repeated_terms_are_kept() {
        assert_eq!(tokenize("modern modern"), vec!["modern", "modern"]);
    }
}
