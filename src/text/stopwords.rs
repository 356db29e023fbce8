//! Stopword filtering
//!
//! Language lists are the NLTK lists bundled with the `stop-words` crate;
//! callers can extend them with domain noise. The filtered tokens are only used for display, never as
//! clustering input.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Punctuation, enumerators and ubiquitous names in parliamentary questions.
pub const QUESTION_NOISE: &[&str] = &[
    "(", ")", ",", ".", "whether", "Ministry", "a", "b", "c", "d", "Singapore", "Singaporean",
    "i", "ii", "iii", ";", "'s",
];

/// A filter for removing stopwords from token sequences
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
    case_sensitive: bool,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a case-insensitive filter for the given language
    ///
    /// Unknown languages fall back to English.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
            case_sensitive: false,
        }
    }

    /// English list plus [`QUESTION_NOISE`], matched case-sensitively, so a
    /// capitalized "The" survives while "Singapore" is removed.
    pub fn question_noise() -> Self {
        let mut filter = Self::new("en").with_case_sensitive(true);
        filter.add_stopwords(QUESTION_NOISE);
        filter
    }

    /// Create an empty filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
            case_sensitive: false,
        }
    }

    /// Create a filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_string()).collect(),
            case_sensitive: false,
        }
    }

    /// Set case sensitivity
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Add additional stopwords, stored as given
    pub fn add_stopwords(&mut self, words: &[&str]) {
        self.stopwords.extend(words.iter().map(|w| w.to_string()));
    }

    /// Check if a word is a stopword
    ///
    /// Case-insensitive filters also try the lowercased word, so entries
    /// should be added in lowercase.
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.stopwords.contains(word)
        } else {
            self.stopwords.contains(word) || self.stopwords.contains(&word.to_lowercase())
        }
    }

    /// Tokens that are not stopwords, in order
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(AsRef::as_ref)
            .filter(|t| !self.is_stopword(t))
            .map(str::to_string)
            .collect()
    }

    /// Filtered tokens joined by single spaces
    pub fn render<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        self.filter(tokens).join(" ")
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            _ => LANGUAGE::English,
        };

        get(lang).iter().map(|s| s.to_string()).collect()
    }
}
