//! Question phrase extraction.
//!
//! Turns the raw text of a parliamentary question into the tokens that carry
//! its topic, by chunking the tagged text with the question grammar and
//! dropping the boilerplate spans ("Mr X asked the Minister for Y whether").

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::chunker::{ChunkNode, Chunker};
use super::grammar::{Disposition, Grammar};
use super::stopwords::StopwordFilter;
use super::tagger::{LexiconTagger, PosTagger};
use super::tokenizer::{Tokenizer, WordTokenizer};
use crate::error::{Error, Result};

/// Literal substring replacement applied to raw text before tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rewrite {
    /// Text to find.
    pub from: String,
    /// Replacement.
    pub to: String,
}

impl Rewrite {
    /// Create a rewrite.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Extractor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Rewrites, applied in order.
    pub rewrites: Vec<Rewrite>,
}

impl Default for ExtractorConfig {
    /// "Prime Minister" becomes "Minister of Prime" so it chunks like every
    /// other "Minister of X" title.
    fn default() -> Self {
        Self {
            rewrites: vec![Rewrite::new("Prime Minister", "Minister of Prime")],
        }
    }
}

/// The two derived views of one question.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionView {
    /// Extracted tokens, unfiltered. This is the clustering input.
    pub tokens: Vec<String>,
    /// Stopword-filtered tokens joined by spaces, for display and word clouds.
    pub display: String,
}

/// Grammar-driven phrase extractor.
#[derive(Debug, Clone)]
pub struct PhraseExtractor<T = WordTokenizer, P = LexiconTagger> {
    tokenizer: T,
    tagger: P,
    chunker: Chunker,
    config: ExtractorConfig,
}

impl Default for PhraseExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PhraseExtractor {
    /// Extractor with the built-in tokenizer, tagger and question grammar.
    pub fn new() -> Self {
        Self::with_components(WordTokenizer::new(), LexiconTagger::new())
    }
}

impl<T: Tokenizer, P: PosTagger> PhraseExtractor<T, P> {
    /// Extractor with a custom tokenizer and tagger.
    pub fn with_components(tokenizer: T, tagger: P) -> Self {
        Self {
            tokenizer,
            tagger,
            chunker: Chunker::default(),
            config: ExtractorConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the chunk grammar.
    pub fn with_grammar(mut self, grammar: Grammar) -> Self {
        self.chunker = Chunker::new(grammar);
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Apply the configured rewrites.
    pub fn normalize(&self, text: &str) -> String {
        self.config
            .rewrites
            .iter()
            .fold(text.to_string(), |acc, r| acc.replace(&r.from, &r.to))
    }

    /// Normalize, tokenize, tag and chunk `text`.
    pub fn parse(&self, text: &str) -> Result<Vec<ChunkNode>> {
        let normalized = self.normalize(text);
        let tokens = self.tokenizer.tokenize(&normalized);
        let tagged = self.tagger.tag(&tokens)?;
        if tagged.len() != tokens.len() {
            return Err(Error::Extraction(format!(
                "tagger returned {} tags for {} tokens",
                tagged.len(),
                tokens.len()
            )));
        }
        Ok(self.chunker.parse(tagged))
    }

    /// Tokens of `text` that survive boilerplate suppression, in order.
    pub fn extract(&self, text: &str) -> Result<Vec<String>> {
        let nodes = self.parse(text)?;
        let grammar = self.chunker.grammar();

        let mut tokens = Vec::new();
        for node in &nodes {
            let keep = match node {
                ChunkNode::Leaf(_) => true,
                ChunkNode::Chunk { label, .. } => match grammar.disposition(*label) {
                    Disposition::Keep => true,
                    Disposition::Drop => false,
                    Disposition::KeepUnless(marker) => !marker.occurs_in(node),
                },
            };
            if keep {
                tokens.extend(node.leaves().map(|t| t.text.clone()));
            }
        }
        Ok(tokens)
    }

    /// [`extract`](Self::extract), with failures downgraded to an empty document.
    pub fn extract_or_empty(&self, text: &str) -> Vec<String> {
        self.extract(text).unwrap_or_else(|err| {
            warn!(error = %err, "extraction failed; using an empty document");
            Vec::new()
        })
    }

    /// Extract every text; a failing text yields an empty document.
    pub fn extract_all<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Vec<String>> {
        texts
            .iter()
            .map(|t| self.extract_or_empty(t.as_ref()))
            .collect()
    }

    /// Clustering tokens and display text of one question.
    pub fn question_view(&self, text: &str, stopwords: &StopwordFilter) -> QuestionView {
        let tokens = self.extract_or_empty(text);
        let display = stopwords.render(&tokens);
        QuestionView { tokens, display }
    }
}
