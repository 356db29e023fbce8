//! Topic clustering for short questions.
//!
//! `dmmix` groups short documents (parliamentary questions, titles, tweets)
//! into topics. It has two parts:
//!
//! - [`cluster`]: a Dirichlet Multinomial Mixture fitted by collapsed Gibbs
//!   sampling (GSDMM). `K` is an upper bound; the number of populated clusters
//!   is discovered.
//! - [`text`]: a grammar-driven phrase extractor that strips the formulaic
//!   preamble of a question ("Mr X asked the Minister for Y whether") before
//!   the remaining tokens are clustered.
//!
//! ```rust
//! use dmmix::{Gsdmm, PhraseExtractor, Vocabulary};
//!
//! let extractor = PhraseExtractor::new();
//! let docs = extractor.extract_all(&[
//!     "Mr Tan asked the Minister for Health whether clinic fees will rise",
//!     "Ms Lim asked the Minister for Health how clinic fees are set",
//!     "Mr Ong asked the Minister for Education whether school fees will rise",
//! ]);
//!
//! let v = Vocabulary::from_documents(&docs).len();
//! let fit = Gsdmm::new(3).with_seed(7).fit(&docs, v).unwrap();
//! assert_eq!(fit.labels().len(), 3);
//! ```

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod text;

pub use cluster::{ClusterStats, Clustering, Gsdmm, GsdmmFit, GsdmmParams, SweepReport, Vocabulary};
pub use error::{Error, Result};
pub use text::{PhraseExtractor, QuestionView, StopwordFilter};
