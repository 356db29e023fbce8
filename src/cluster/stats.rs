use rustc_hash::FxHashMap;

use super::vocab::EncodedDocument;

/// Sufficient statistics of one mixture component.
///
/// `word_count` always equals the sum of `word_occurrence`; zero entries are
/// removed from the map so it stays sparse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterStats {
    doc_count: usize,
    word_count: usize,
    word_occurrence: FxHashMap<u32, u32>,
}

impl ClusterStats {
    /// Number of documents assigned to the cluster.
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Token occurrences (with repetition) across the cluster's documents.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Occurrences of a token id in the cluster (0 when absent).
    pub fn occurrences(&self, token: u32) -> u32 {
        self.word_occurrence.get(&token).copied().unwrap_or(0)
    }

    /// Sparse token id -> occurrence map.
    pub fn word_occurrence(&self) -> &FxHashMap<u32, u32> {
        &self.word_occurrence
    }

    /// Whether no document is assigned.
    pub fn is_empty(&self) -> bool {
        self.doc_count == 0
    }

    pub(crate) fn add(&mut self, doc: &EncodedDocument) {
        self.doc_count += 1;
        self.word_count += doc.len();
        for &id in doc.ids() {
            *self.word_occurrence.entry(id).or_insert(0) += 1;
        }
    }

    pub(crate) fn remove(&mut self, doc: &EncodedDocument) {
        debug_assert!(self.doc_count > 0, "removing from an empty cluster");
        self.doc_count -= 1;
        self.word_count -= doc.len();
        for &id in doc.ids() {
            if let Some(count) = self.word_occurrence.get_mut(&id) {
                *count -= 1;
                if *count == 0 {
                    self.word_occurrence.remove(&id);
                }
            }
        }
    }

    /// Check `word_count == sum(word_occurrence)`.
    pub fn is_consistent(&self) -> bool {
        let total: usize = self.word_occurrence.values().map(|&c| c as usize).sum();
        total == self.word_count && (self.doc_count > 0 || self.word_count == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(ids: &[u32]) -> EncodedDocument {
        EncodedDocument::from_ids(ids.to_vec())
    }

    #[test]
    fn add_then_remove_restores_empty() {
        let mut stats = ClusterStats::default();
        let d = doc(&[3, 1, 3]);

        stats.add(&d);
        assert_eq!(stats.doc_count(), 1);
        assert_eq!(stats.word_count(), 3);
        assert_eq!(stats.occurrences(3), 2);
        assert_eq!(stats.occurrences(1), 1);
        assert!(stats.is_consistent());

        stats.remove(&d);
        assert_eq!(stats, ClusterStats::default());
        assert!(stats.word_occurrence().is_empty());
    }

    #[test]
    fn empty_document_only_counts_membership() {
        let mut stats = ClusterStats::default();
        stats.add(&doc(&[]));
        assert_eq!(stats.doc_count(), 1);
        assert_eq!(stats.word_count(), 0);
        assert!(stats.is_consistent());
    }

    #[test]
    fn remove_keeps_other_documents() {
        let mut stats = ClusterStats::default();
        let a = doc(&[0, 1]);
        let b = doc(&[1, 2]);
        stats.add(&a);
        stats.add(&b);
        stats.remove(&a);

        assert_eq!(stats.doc_count(), 1);
        assert_eq!(stats.word_count(), 2);
        assert_eq!(stats.occurrences(0), 0);
        assert_eq!(stats.occurrences(1), 1);
        assert_eq!(stats.occurrences(2), 1);
        assert!(stats.is_consistent());
    }
}
