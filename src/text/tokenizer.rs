//! Word tokenization.

use std::sync::LazyLock;

use regex::Regex;

/// Splits raw text into word tokens.
pub trait Tokenizer {
    /// Tokens of `text` in reading order. Whitespace-only text yields no tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

// Alternatives are tried in order at each position.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
          \b(?:Mrs|Mr|Ms|Mdm|Dr|Prof|Assoc|Er)\.   # honorifics keep their period
        | \d+(?:[.,]\d+)*        # 2019, 3.5, 1,200
        | \w+(?:-\w+)*           # words, COVID-19, co-payment
        | ['’]\w+                # clitics: 's 're 't
        | \.\.\.                 # ellipsis
        | [^\w\s]                # any other single symbol
        ",
    )
    .expect("token pattern is valid")
});

/// Regex word tokenizer in the style of Treebank tokenizers: clitics and
/// punctuation become tokens of their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a tokenizer.
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        TOKEN_PATTERN
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_punctuation_and_clitics() {
        let tokens = WordTokenizer.tokenize("Will the Minister's review (a) cover HDB flats?");
        assert_eq!(
            tokens,
            vec!["Will", "the", "Minister", "'s", "review", "(", "a", ")", "cover", "HDB", "flats", "?"]
        );
    }

    #[test]
    fn test_numbers_and_hyphens() {
        let tokens = WordTokenizer.tokenize("In 2019, S$1,200 for COVID-19 co-payments.");
        assert_eq!(
            tokens,
            vec!["In", "2019", ",", "S", "$", "1,200", "for", "COVID-19", "co-payments", "."]
        );
    }

    #[test]
    fn test_honorifics_keep_their_period() {
        let tokens = WordTokenizer.tokenize("Mr. Tan and Assoc. Prof. Lim asked Dr. Ng. Mrs. Er.");
        assert_eq!(
            tokens,
            vec!["Mr.", "Tan", "and", "Assoc.", "Prof.", "Lim", "asked", "Dr.", "Ng", ".", "Mrs.", "Er."]
        );

        let tokens = WordTokenizer.tokenize("Mrs Goh asked the Director.");
        assert_eq!(tokens, vec!["Mrs", "Goh", "asked", "the", "Director", "."]);
    }

    #[test]
    fn test_blank_text() {
        assert!(WordTokenizer.tokenize("").is_empty());
        assert!(WordTokenizer.tokenize("   \t\n ").is_empty());
    }
}
