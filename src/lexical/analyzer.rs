//! Word analyzer matching the vectorizer's default token pattern.
//!
//! A token is a maximal run of word characters that is at least two characters
//! long. Word characters are letters (`L*`), numbers (`N*`) and `_`. Combining
//! marks (`Mn`, `Mc`) end a token, so Thai vowel and tone marks split words the
//! same way the fitted vectorizer does. Single characters and punctuation never
//! reach the vocabulary.

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

fn is_word_char(c: char) -> bool {
    c == '_'
        || matches!(
            c.general_category_group(),
            GeneralCategoryGroup::Letter | GeneralCategoryGroup::Number
        )
}

/// Splits `text` into analyzer tokens. Does not change case.
pub fn word_tokens(text: &str) -> Vec<&str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|token| token.chars().nth(1).is_some())
        .collect()
}

/// Analyzer tokens expanded to word n-grams in `min_n..=max_n`, joined by a single space.
pub fn analyze(text: &str, min_n: usize, max_n: usize) -> Vec<String> {
    let tokens = word_tokens(text);

    if max_n <= 1 {
        return tokens.into_iter().map(str::to_string).collect();
    }

    let mut terms = Vec::new();
    for n in min_n.max(1)..=max_n.min(tokens.len()) {
        for window in tokens.windows(n) {
            terms.push(window.join(" "));
        }
    }
    terms
}
