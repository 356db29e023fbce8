//! GSDMM: collapsed Gibbs sampling for the Dirichlet Multinomial Mixture.
//!
//! # The Model (Yin & Wang, 2014)
//!
//! Every document is generated by exactly one of `K` components. A component
//! is a multinomial over the vocabulary drawn from `Dirichlet(beta)`, and the
//! mixture weights are drawn from `Dirichlet(alpha)`. Both are integrated out,
//! so the sampler only tracks, per cluster, how many documents and tokens it
//! holds and how often each token occurs in it.
//!
//! ## Sweep
//!
//! For every document `d`, in corpus order:
//!
//! 1. Remove `d` from its cluster's counts.
//! 2. Score every cluster `k`:
//!
//! ```text
//! p(z_d = k) ∝ (m_k + α) / (N - 1 + Kα)
//!            × Π_i (n_k[w_i] + β + c_i) / (n_k + Vβ + i)
//! ```
//!
//!    where `c_i` counts earlier occurrences of `w_i` inside `d`.
//! 3. Draw the new cluster from the normalized scores and add `d` back.
//!
//! A sweep in which no document changes cluster ends the fit early.
//!
//! ## Intuition ("Movie Group Process")
//!
//! - `alpha` is how willing a student is to sit at an empty table. Small values
//!   let tables die out, so the populated count ends well below `K`.
//! - `beta` is how much a student cares about shared interests. Small values
//!   make tables homogeneous; large values make popularity dominate.
//!
//! ## Numerics
//!
//! Scores are accumulated in log space and normalized with log-sum-exp, so long
//! documents do not underflow. A non-finite score is reported as
//! [`Error::Numerical`] and is never replaced by a uniform draw.
//!
//! ## References
//!
//! Yin, J. & Wang, J. (2014). "A Dirichlet Multinomial Mixture Model-based
//! Approach for Short Text Clustering." KDD '14.

use rand::distr::weighted::WeightedIndex;
use rand::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::stats::ClusterStats;
use super::traits::Clustering;
use super::vocab::{EncodedDocument, Vocabulary};
use crate::error::{Error, Result};

/// GSDMM hyperparameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GsdmmParams {
    /// Upper bound on the number of clusters.
    pub k: usize,
    /// Maximum number of sweeps.
    pub n_iters: usize,
    /// Mixture-weight concentration.
    pub alpha: f64,
    /// Per-word concentration within a cluster.
    pub beta: f64,
    /// Optional RNG seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for GsdmmParams {
    fn default() -> Self {
        Self {
            k: 8,
            n_iters: 30,
            alpha: 0.1,
            beta: 0.1,
            seed: None,
        }
    }
}

impl GsdmmParams {
    fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }
        if self.n_iters == 0 {
            return Err(Error::InvalidParameter {
                name: "n_iters",
                message: "must be at least 1",
            });
        }
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(Error::InvalidParameter {
                name: "alpha",
                message: "must be positive and finite",
            });
        }
        if !(self.beta.is_finite() && self.beta > 0.0) {
            return Err(Error::InvalidParameter {
                name: "beta",
                message: "must be positive and finite",
            });
        }
        Ok(())
    }
}

/// Outcome of one sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    /// Zero-based sweep index.
    pub sweep: usize,
    /// Documents that changed cluster during the sweep.
    pub transfers: usize,
    /// Non-empty clusters after the sweep.
    pub populated: usize,
}

/// GSDMM short-text clusterer.
#[derive(Debug, Clone, Default)]
pub struct Gsdmm {
    params: GsdmmParams,
}

impl Gsdmm {
    /// Create a clusterer with at most `k` clusters and default hyperparameters.
    ///
    /// Defaults: `n_iters = 30`, `alpha = 0.1`, `beta = 0.1`, no seed.
    pub fn new(k: usize) -> Self {
        Self {
            params: GsdmmParams {
                k,
                ..GsdmmParams::default()
            },
        }
    }

    /// Create a clusterer from a full parameter set.
    pub fn from_params(params: GsdmmParams) -> Self {
        Self { params }
    }

    /// Set the maximum number of sweeps.
    pub fn with_n_iters(mut self, n_iters: usize) -> Self {
        self.params.n_iters = n_iters;
        self
    }

    /// Set the mixture-weight concentration.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.params.alpha = alpha;
        self
    }

    /// Set the per-word concentration.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.params.beta = beta;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.params.seed = Some(seed);
        self
    }

    /// Current hyperparameters.
    pub fn params(&self) -> &GsdmmParams {
        &self.params
    }

    /// Fit on token documents using the configured seed (or thread RNG).
    ///
    /// `vocabulary_size` is the `V` of the smoothing term, normally
    /// [`Vocabulary::from_documents`]`(documents).len()`.
    ///
    /// An empty corpus is valid: the fit has no labels and stops after one
    /// quiet sweep.
    pub fn fit<D, S>(&self, documents: &[D], vocabulary_size: usize) -> Result<GsdmmFit>
    where
        D: AsRef<[S]>,
        S: AsRef<str>,
    {
        match self.params.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.fit_with_rng(documents, vocabulary_size, &mut rng)
            }
            None => self.fit_with_rng(documents, vocabulary_size, &mut rand::rng()),
        }
    }

    /// Fit on token documents drawing from an explicit random source.
    ///
    /// The configured seed is ignored.
    pub fn fit_with_rng<D, S, R>(
        &self,
        documents: &[D],
        vocabulary_size: usize,
        rng: &mut R,
    ) -> Result<GsdmmFit>
    where
        D: AsRef<[S]>,
        S: AsRef<str>,
        R: Rng,
    {
        self.params.validate()?;

        let non_empty_documents = documents
            .iter()
            .filter(|d| !d.as_ref().is_empty())
            .count();
        if vocabulary_size == 0 && non_empty_documents > 0 {
            return Err(Error::InvalidVocabularySize {
                vocabulary_size,
                non_empty_documents,
            });
        }

        let mut vocabulary = Vocabulary::new();
        let docs: Vec<EncodedDocument> = documents
            .iter()
            .map(|d| vocabulary.encode(d.as_ref()))
            .collect();
        if vocabulary.len() > vocabulary_size {
            warn!(
                declared = vocabulary_size,
                observed = vocabulary.len(),
                "vocabulary size is smaller than the number of distinct tokens"
            );
        }

        let k = self.params.k;
        let n = docs.len();
        let scorer = Scorer::new(&self.params, vocabulary_size, n);

        // Uniform random initial assignment.
        let mut clusters = vec![ClusterStats::default(); k];
        let mut labels: Vec<usize> = Vec::with_capacity(n);
        for doc in &docs {
            let z = rng.random_range(0..k);
            clusters[z].add(doc);
            labels.push(z);
        }

        let mut probs = vec![0.0f64; k];
        let mut history: Vec<SweepReport> = Vec::new();
        let mut converged = false;

        for sweep in 0..self.params.n_iters {
            let mut transfers = 0usize;

            for (i, doc) in docs.iter().enumerate() {
                let old = labels[i];
                clusters[old].remove(doc);

                scorer
                    .posterior(doc, &clusters, &mut probs)
                    .map_err(|detail| Error::Numerical {
                        detail: format!("document {i}: {detail}"),
                    })?;
                let new = draw(&probs, rng).map_err(|detail| Error::Numerical {
                    detail: format!("document {i}: {detail}"),
                })?;

                clusters[new].add(doc);
                if new != old {
                    labels[i] = new;
                    transfers += 1;
                }
            }

            debug_assert!(statistics_hold(&clusters, n));
            let populated = clusters.iter().filter(|c| !c.is_empty()).count();
            debug!(sweep, transfers, populated, "gsdmm sweep");
            history.push(SweepReport {
                sweep,
                transfers,
                populated,
            });

            if transfers == 0 {
                converged = true;
                break;
            }
        }

        let fit = GsdmmFit {
            labels,
            clusters,
            vocabulary,
            scorer,
            history,
            converged,
        };
        info!(
            documents = n,
            sweeps = fit.sweeps(),
            converged = fit.converged,
            populated = fit.n_populated(),
            "gsdmm fit finished"
        );
        Ok(fit)
    }
}

impl Clustering for Gsdmm {
    fn fit_predict(&self, documents: &[Vec<String>], vocabulary_size: usize) -> Result<Vec<usize>> {
        Ok(self.fit(documents, vocabulary_size)?.into_labels())
    }

    fn n_clusters(&self) -> usize {
        self.params.k
    }
}

/// Result of [`Gsdmm::fit`]: labels plus the final cluster statistics.
#[derive(Debug, Clone)]
pub struct GsdmmFit {
    labels: Vec<usize>,
    clusters: Vec<ClusterStats>,
    vocabulary: Vocabulary,
    scorer: Scorer,
    history: Vec<SweepReport>,
    converged: bool,
}

impl GsdmmFit {
    /// One label per input document, in input order.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Consume the fit, keeping only the labels.
    pub fn into_labels(self) -> Vec<usize> {
        self.labels
    }

    /// Final statistics of every cluster (including empty ones).
    pub fn clusters(&self) -> &[ClusterStats] {
        &self.clusters
    }

    /// Documents per cluster.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(ClusterStats::doc_count).collect()
    }

    /// Number of non-empty clusters.
    pub fn n_populated(&self) -> usize {
        self.clusters.iter().filter(|c| !c.is_empty()).count()
    }

    /// Number of sweeps that ran.
    pub fn sweeps(&self) -> usize {
        self.history.len()
    }

    /// Whether the fit stopped on a sweep without transfers.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Per-sweep transfer and population counts.
    pub fn history(&self) -> &[SweepReport] {
        &self.history
    }

    /// Vocabulary interned from the training documents.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Posterior over clusters for a token sequence, against the final counts.
    ///
    /// Tokens never seen during the fit are scored through the `beta` term alone.
    pub fn score<S: AsRef<str>>(&self, document: &[S]) -> Result<Vec<f64>> {
        let doc = self.encode_unseen(document);
        let mut probs = vec![0.0f64; self.clusters.len()];
        self.scorer
            .posterior(&doc, &self.clusters, &mut probs)
            .map_err(|detail| Error::Numerical { detail })?;
        Ok(probs)
    }

    /// Most probable cluster for a token sequence and its probability.
    pub fn choose_best_label<S: AsRef<str>>(&self, document: &[S]) -> Result<(usize, f64)> {
        let probs = self.score(document)?;
        probs
            .into_iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .ok_or_else(|| Error::Other("fit has no clusters".to_string()))
    }

    /// `(token, count)` pairs of a cluster, most frequent first, ties by token.
    ///
    /// Returns an empty list for an out-of-range cluster.
    pub fn cluster_word_distribution(&self, cluster: usize) -> Vec<(&str, u32)> {
        let Some(stats) = self.clusters.get(cluster) else {
            return Vec::new();
        };
        let mut words: Vec<(&str, u32)> = stats
            .word_occurrence()
            .iter()
            .filter_map(|(&id, &count)| self.vocabulary.token(id).map(|t| (t, count)))
            .collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        words
    }

    /// The `n` most frequent tokens of a cluster.
    pub fn top_words(&self, cluster: usize, n: usize) -> Vec<(&str, u32)> {
        let mut words = self.cluster_word_distribution(cluster);
        words.truncate(n);
        words
    }

    fn encode_unseen<S: AsRef<str>>(&self, document: &[S]) -> EncodedDocument {
        // Unseen tokens get ids past the vocabulary, which no cluster holds.
        let first_fresh = self.vocabulary.len() as u32;
        let mut fresh: FxHashMap<&str, u32> = FxHashMap::default();
        let ids = document
            .iter()
            .map(|t| {
                let t = t.as_ref();
                self.vocabulary.id(t).unwrap_or_else(|| {
                    let next = first_fresh + fresh.len() as u32;
                    *fresh.entry(t).or_insert(next)
                })
            })
            .collect();
        EncodedDocument::from_ids(ids)
    }
}

/// Log-space cluster scoring with the hyperparameters of one fit.
#[derive(Debug, Clone)]
struct Scorer {
    alpha: f64,
    beta: f64,
    vocab_beta: f64,
    ln_mixture_norm: f64,
}

impl Scorer {
    fn new(params: &GsdmmParams, vocabulary_size: usize, n_docs: usize) -> Self {
        let k = params.k as f64;
        let others = n_docs.saturating_sub(1) as f64;
        Self {
            alpha: params.alpha,
            beta: params.beta,
            vocab_beta: vocabulary_size as f64 * params.beta,
            ln_mixture_norm: (others + k * params.alpha).ln(),
        }
    }

    /// Unnormalized log score of `doc` under each cluster.
    fn log_scores(&self, doc: &EncodedDocument, clusters: &[ClusterStats], out: &mut [f64]) {
        for (score, cluster) in out.iter_mut().zip(clusters) {
            let mut s = (cluster.doc_count() as f64 + self.alpha).ln() - self.ln_mixture_norm;
            let base = cluster.word_count() as f64 + self.vocab_beta;
            for (pos, (&id, &repeat)) in doc.ids().iter().zip(doc.repeats()).enumerate() {
                let numerator = cluster.occurrences(id) as f64 + self.beta + repeat as f64;
                s += numerator.ln() - (base + pos as f64).ln();
            }
            *score = s;
        }
    }

    fn posterior(
        &self,
        doc: &EncodedDocument,
        clusters: &[ClusterStats],
        out: &mut [f64],
    ) -> std::result::Result<(), String> {
        self.log_scores(doc, clusters, out);
        normalize_log_in_place(out)
    }
}

/// Turn log scores into probabilities (log-sum-exp).
fn normalize_log_in_place(v: &mut [f64]) -> std::result::Result<(), String> {
    let max = v.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return Err(format!("largest log score is {max}"));
    }
    let mut total = 0.0;
    for x in v.iter_mut() {
        *x = (*x - max).exp();
        total += *x;
    }
    if !(total.is_finite() && total > 0.0) {
        return Err(format!("score mass is {total}"));
    }
    for x in v.iter_mut() {
        *x /= total;
    }
    Ok(())
}

fn draw<R: Rng>(probs: &[f64], rng: &mut R) -> std::result::Result<usize, String> {
    let dist = WeightedIndex::new(probs).map_err(|e| e.to_string())?;
    Ok(dist.sample(rng))
}

fn statistics_hold(clusters: &[ClusterStats], n_docs: usize) -> bool {
    clusters.iter().map(ClusterStats::doc_count).sum::<usize>() == n_docs
        && clusters.iter().all(ClusterStats::is_consistent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic_corpus() -> Vec<Vec<&'static str>> {
        let mut docs = Vec::new();
        for _ in 0..10 {
            docs.push(vec!["housing", "flat", "grant"]);
            docs.push(vec!["school", "teacher", "exam"]);
        }
        docs
    }

    #[test]
    fn test_gsdmm_labels_cover_all_documents() {
        let docs = topic_corpus();
        let v = Vocabulary::from_documents(&docs).len();
        let fit = Gsdmm::new(5).with_n_iters(50).with_seed(42).fit(&docs, v).unwrap();

        assert_eq!(fit.labels().len(), docs.len());
        assert!(fit.labels().iter().all(|&l| l < 5));
        assert_eq!(fit.cluster_sizes().iter().sum::<usize>(), docs.len());
        assert!(statistics_hold(fit.clusters(), docs.len()));
    }

    #[test]
    fn test_gsdmm_separates_disjoint_topics() {
        let docs = topic_corpus();
        let v = Vocabulary::from_documents(&docs).len();
        let fit = Gsdmm::new(5).with_n_iters(50).with_seed(7).fit(&docs, v).unwrap();

        // No cluster may hold both a housing and a school document.
        for (i, &li) in fit.labels().iter().enumerate() {
            for (j, &lj) in fit.labels().iter().enumerate() {
                if i % 2 != j % 2 {
                    assert_ne!(li, lj, "documents {i} and {j} share a cluster");
                }
            }
        }
    }

    #[test]
    fn test_gsdmm_seeded_runs_match() {
        let docs = topic_corpus();
        let model = Gsdmm::new(4).with_seed(123);
        let a = model.fit(&docs, 6).unwrap();
        let b = model.fit(&docs, 6).unwrap();
        assert_eq!(a.labels(), b.labels());
        assert_eq!(a.history(), b.history());
    }

    #[test]
    fn test_gsdmm_converged_fit_ends_on_quiet_sweep() {
        let docs: Vec<Vec<&str>> = (0..20).map(|_| vec!["a", "b", "c"]).collect();
        let fit = Gsdmm::new(4).with_n_iters(200).with_seed(1).fit(&docs, 3).unwrap();

        if fit.converged() {
            let last = fit.history().last().unwrap();
            assert_eq!(last.transfers, 0);
            assert_eq!(last.sweep + 1, fit.sweeps());
            assert!(fit.history()[..fit.sweeps() - 1]
                .iter()
                .all(|r| r.transfers > 0));
        } else {
            assert_eq!(fit.sweeps(), 200);
        }
    }

    #[test]
    fn test_gsdmm_identical_documents_collapse() {
        let docs: Vec<Vec<&str>> = (0..20).map(|_| vec!["a", "b", "c"]).collect();
        let single = (0..10u64)
            .filter(|&seed| {
                let fit = Gsdmm::new(4)
                    .with_n_iters(200)
                    .with_seed(seed)
                    .fit(&docs, 3)
                    .unwrap();
                fit.n_populated() == 1
            })
            .count();
        assert!(single >= 8, "only {single} of 10 seeds collapsed to one cluster");
    }

    #[test]
    fn test_gsdmm_empty_documents() {
        let docs: Vec<Vec<String>> = vec![vec![], vec![], vec![]];
        let fit = Gsdmm::new(3).with_seed(0).fit(&docs, 0).unwrap();
        assert_eq!(fit.labels().len(), 3);
        assert!(fit.labels().iter().all(|&l| l < 3));
    }

    #[test]
    fn test_gsdmm_mixed_empty_and_unique_documents() {
        let docs = vec![vec!["x"], vec![], vec!["y", "y"], vec!["z"]];
        let fit = Gsdmm::new(2).with_seed(3).fit(&docs, 3).unwrap();
        assert_eq!(fit.labels().len(), 4);
        assert!(statistics_hold(fit.clusters(), 4));
    }

    #[test]
    fn test_gsdmm_invalid_params() {
        let docs = vec![vec!["a"]];
        assert!(matches!(
            Gsdmm::new(0).fit(&docs, 1),
            Err(Error::InvalidParameter { name: "k", .. })
        ));
        assert!(matches!(
            Gsdmm::new(2).with_alpha(0.0).fit(&docs, 1),
            Err(Error::InvalidParameter { name: "alpha", .. })
        ));
        assert!(matches!(
            Gsdmm::new(2).with_beta(-1.0).fit(&docs, 1),
            Err(Error::InvalidParameter { name: "beta", .. })
        ));
        assert!(matches!(
            Gsdmm::new(2).with_beta(f64::NAN).fit(&docs, 1),
            Err(Error::InvalidParameter { name: "beta", .. })
        ));
        assert!(matches!(
            Gsdmm::new(2).with_n_iters(0).fit(&docs, 1),
            Err(Error::InvalidParameter { name: "n_iters", .. })
        ));
    }

    #[test]
    fn test_gsdmm_zero_vocabulary_rejected() {
        let docs = vec![vec!["a"], vec![]];
        let err = Gsdmm::new(2).fit(&docs, 0).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidVocabularySize {
                vocabulary_size: 0,
                non_empty_documents: 1
            }
        ));
    }

    #[test]
    fn test_gsdmm_empty_corpus_yields_empty_labels() {
        let docs: Vec<Vec<String>> = vec![];
        let fit = Gsdmm::new(2).with_seed(1).fit(&docs, 0).unwrap();

        assert!(fit.labels().is_empty());
        assert_eq!(fit.cluster_sizes(), vec![0, 0]);
        assert_eq!(fit.n_populated(), 0);
        assert!(fit.converged());
        assert_eq!(fit.sweeps(), 1);

        let labels = Gsdmm::new(3).fit_predict(&docs, 5).unwrap();
        assert!(labels.is_empty());
    }

    #[test]
    fn test_repeated_tokens_use_running_counts() {
        // One cluster holding the document [0]; score [0, 0] with alpha = beta = 1, V = 2.
        let params = GsdmmParams {
            k: 1,
            alpha: 1.0,
            beta: 1.0,
            ..GsdmmParams::default()
        };
        let scorer = Scorer::new(&params, 2, 2);
        let mut cluster = ClusterStats::default();
        cluster.add(&EncodedDocument::from_ids(vec![0]));

        let mut out = [0.0];
        scorer.log_scores(
            &EncodedDocument::from_ids(vec![0, 0]),
            std::slice::from_ref(&cluster),
            &mut out,
        );

        // ln(2/2) + ln(2/3) + ln(3/4) = ln(1/2)
        assert!((out[0] - 0.5f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_long_documents_do_not_underflow() {
        let long: Vec<String> = (0..5000).map(|i| format!("w{}", i % 700)).collect();
        let docs = vec![long.clone(), long, vec!["other".to_string()]];
        let v = Vocabulary::from_documents(&docs).len();
        let fit = Gsdmm::new(3).with_n_iters(5).with_seed(9).fit(&docs, v).unwrap();
        assert_eq!(fit.labels().len(), 3);
    }

    #[test]
    fn test_normalize_rejects_non_finite() {
        let mut v = [f64::NEG_INFINITY, f64::NEG_INFINITY];
        assert!(normalize_log_in_place(&mut v).is_err());

        let mut v = [0.0, f64::NAN];
        assert!(normalize_log_in_place(&mut v).is_err());

        let mut v = [-1000.0, -1000.0];
        normalize_log_in_place(&mut v).unwrap();
        assert!((v[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_score_and_best_label() {
        let docs = topic_corpus();
        let v = Vocabulary::from_documents(&docs).len();
        let fit = Gsdmm::new(5).with_n_iters(50).with_seed(42).fit(&docs, v).unwrap();

        let probs = fit.score(&["school", "exam"]).unwrap();
        assert_eq!(probs.len(), 5);
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-9);

        let (label, p) = fit.choose_best_label(&["school", "teacher", "exam"]).unwrap();
        let school_labels: Vec<usize> = fit.labels().iter().skip(1).step_by(2).copied().collect();
        assert!(school_labels.contains(&label));
        assert!(p >= 1.0 / 5.0);

        // Unseen tokens are still scorable.
        let probs = fit.score(&["transport", "transport"]).unwrap();
        assert!(probs.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_top_words() {
        let docs = vec![
            vec!["grant", "grant", "flat"],
            vec!["grant", "flat", "housing"],
        ];
        let fit = Gsdmm::new(1).with_seed(0).fit(&docs, 3).unwrap();

        assert_eq!(
            fit.cluster_word_distribution(0),
            vec![("grant", 3), ("flat", 2), ("housing", 1)]
        );
        assert_eq!(fit.top_words(0, 1), vec![("grant", 3)]);
        assert!(fit.top_words(5, 3).is_empty());
    }

    #[test]
    fn test_params_deserialize_with_defaults() {
        let params: GsdmmParams =
            serde_json::from_str(r#"{ "k": 12, "alpha": 0.2, "beta": 0.01, "n_iters": 100 }"#)
                .unwrap();
        assert_eq!(params.k, 12);
        assert_eq!(params.n_iters, 100);
        assert_eq!(params.seed, None);

        let model = Gsdmm::from_params(params);
        assert_eq!(model.n_clusters(), 12);
    }
}
