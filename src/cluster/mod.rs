//! Short-text clustering.
//!
//! This module provides a Dirichlet Multinomial Mixture fitted by collapsed
//! Gibbs sampling (GSDMM), the model of choice for very short documents such
//! as questions, titles, or tweets.
//!
//! ## Why not LDA or k-means?
//!
//! LDA assumes every document mixes several topics. A one-sentence question
//! rarely does, and with a dozen tokens there is too little evidence to
//! estimate a per-document topic mixture. GSDMM instead assumes **one topic
//! per document**, which suits short text and also lets the sampler leave
//! clusters empty: `K` is an upper bound and the populated count is learned.
//!
//! K-means on bag-of-words vectors needs the true `K` and a distance that is
//! meaningful for sparse counts. GSDMM needs neither.
//!
//! ## State
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | `m_k` | documents in cluster `k` |
//! | `n_k` | tokens in cluster `k` |
//! | `n_k[w]` | occurrences of token `w` in cluster `k` |
//!
//! These live in [`ClusterStats`]; labels index into them.
//!
//! ## Usage
//!
//! ```rust
//! use dmmix::cluster::{Clustering, Gsdmm, Vocabulary};
//!
//! let docs: Vec<Vec<String>> = [
//!     "housing grant flat",
//!     "housing flat",
//!     "school exam teacher",
//!     "school teacher",
//! ]
//! .iter()
//! .map(|d| d.split_whitespace().map(String::from).collect())
//! .collect();
//!
//! let v = Vocabulary::from_documents(&docs).len();
//! let labels = Gsdmm::new(4).with_seed(42).fit_predict(&docs, v).unwrap();
//! assert_eq!(labels.len(), docs.len());
//! assert!(labels.iter().all(|&l| l < 4));
//! ```

mod gsdmm;
mod stats;
mod traits;
mod vocab;

pub use gsdmm::{Gsdmm, GsdmmFit, GsdmmParams, SweepReport};
pub use stats::ClusterStats;
pub use traits::Clustering;
pub use vocab::{EncodedDocument, Vocabulary};
