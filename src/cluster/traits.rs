use crate::error::Result;

/// Common interface for hard clustering of token documents (one label per document).
pub trait Clustering {
    /// Fit the model and return one cluster label per input document.
    ///
    /// `vocabulary_size` is the number of distinct tokens the documents are drawn from.
    fn fit_predict(&self, documents: &[Vec<String>], vocabulary_size: usize) -> Result<Vec<usize>>;

    /// The configured upper bound on the number of clusters.
    ///
    /// Models that leave clusters empty may use fewer; inspect the labels after
    /// `fit_predict` for the populated count.
    fn n_clusters(&self) -> usize;
}
