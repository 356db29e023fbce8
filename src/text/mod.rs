//! Question text to clustering tokens.
//!
//! Extraction runs in four steps:
//!
//! 1. **Normalize**: literal [`Rewrite`]s on the raw text.
//! 2. **Tokenize**: [`Tokenizer`] (default [`WordTokenizer`]).
//! 3. **Tag**: [`PosTagger`] (default [`LexiconTagger`]).
//! 4. **Chunk and filter**: the [`Grammar`] is applied by a [`Chunker`]; every
//!    top-level chunk is kept or dropped according to its rule's
//!    [`Disposition`], and tokens outside chunks are kept.
//!
//! The output feeds clustering unfiltered. [`StopwordFilter`] produces a
//! separate display rendering ([`QuestionView::display`]).
//!
//! ## Usage
//!
//! ```rust
//! use dmmix::text::{PhraseExtractor, StopwordFilter};
//!
//! let extractor = PhraseExtractor::new();
//! let tokens = extractor
//!     .extract("Mr Tan asked the Minister for Health whether clinic fees will rise")
//!     .unwrap();
//! assert_eq!(tokens, vec!["whether", "clinic", "fees", "will", "rise"]);
//!
//! let view = extractor.question_view(
//!     "Mr Tan asked the Minister for Health whether clinic fees will rise",
//!     &StopwordFilter::question_noise(),
//! );
//! assert_eq!(view.tokens, tokens);
//! assert!(!view.display.contains("whether"));
//! ```

mod chunker;
mod extractor;
mod grammar;
mod stopwords;
mod tagger;
mod tokenizer;

pub use chunker::{ChunkNode, Chunker};
pub use extractor::{ExtractorConfig, PhraseExtractor, QuestionView, Rewrite};
pub use grammar::{
    ChunkLabel, ChunkRule, Disposition, Element, Grammar, Marker, Matcher, Piece, Repeat, ASKED,
    MINISTER,
};
pub use stopwords::{StopwordFilter, QUESTION_NOISE};
pub use tagger::{LexiconTagger, PosTag, PosTagger, TaggedToken};
pub use tokenizer::{Tokenizer, WordTokenizer};
