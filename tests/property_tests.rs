use dmmix::cluster::{Clustering, Gsdmm, Vocabulary};
use proptest::prelude::*;

fn corpus() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(vec!["hdb", "levy", "school", "fees", "grant", "flat"]), 0..6),
        0..20,
    )
    .prop_map(|docs| {
        docs.into_iter()
            .map(|d| d.into_iter().map(str::to_string).collect())
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_gsdmm_all_assigned(docs in corpus(), k in 1usize..6) {
        let v = Vocabulary::from_documents(&docs).len();
        let model = Gsdmm::new(k).with_n_iters(5).with_seed(42);
        let labels = model.fit_predict(&docs, v).unwrap();

        prop_assert_eq!(labels.len(), docs.len());
        for &l in &labels {
            prop_assert!(l < k);
        }
    }

    #[test]
    fn prop_cluster_statistics_match_labels(docs in corpus(), k in 1usize..6) {
        let v = Vocabulary::from_documents(&docs).len();
        let fit = Gsdmm::new(k).with_n_iters(5).with_seed(3).fit(&docs, v).unwrap();

        let sizes = fit.cluster_sizes();
        prop_assert_eq!(sizes.iter().sum::<usize>(), docs.len());
        for (z, cluster) in fit.clusters().iter().enumerate() {
            prop_assert!(cluster.is_consistent());
            let expected = fit.labels().iter().filter(|&&l| l == z).count();
            prop_assert_eq!(cluster.doc_count(), expected);
            let words: usize = docs
                .iter()
                .zip(fit.labels())
                .filter(|&(_, &l)| l == z)
                .map(|(d, _)| d.len())
                .sum();
            prop_assert_eq!(cluster.word_count(), words);
        }
    }

    #[test]
    fn prop_seeded_fits_are_reproducible(docs in corpus(), seed in any::<u64>()) {
        let v = Vocabulary::from_documents(&docs).len();
        let model = Gsdmm::new(4).with_n_iters(5).with_seed(seed);
        let a = model.fit_predict(&docs, v).unwrap();
        let b = model.fit_predict(&docs, v).unwrap();
        prop_assert_eq!(a, b);
    }
}
