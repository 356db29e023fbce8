//! Extract topic phrases from parliamentary questions and cluster them.
//!
//! Run with `RUST_LOG=dmmix=debug` to see per-sweep progress.

use dmmix::{Gsdmm, PhraseExtractor, StopwordFilter, Vocabulary};

const QUESTIONS: &[&str] = &[
    "Mr Tan asked the Minister for Health whether polyclinic fees will be raised next year",
    "Ms Lim asked the Minister for Health how many polyclinic patients receive subsidies",
    "Mr Lee asked the Minister for Health whether polyclinic waiting times have improved",
    "Mr Ong asked the Minister for National Development whether HDB resale levy rules will change",
    "Ms Goh asked the Minister for National Development how many HDB flats were sold in 2023",
    "Mr Ng asked the Minister for National Development whether HDB resale prices have peaked",
    "Mr Chua asked the Minister for Education whether school bursary quotas will expand",
    "Ms Teo asked the Minister for Education how school bursary applications are assessed",
    "Mr Koh asked the Prime Minister whether school bursary funding will be reviewed",
    "The honourable member asked in the debate on Healthier SG how polyclinic enrolment works",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let extractor = PhraseExtractor::new();
    let stopwords = StopwordFilter::question_noise();

    let views: Vec<_> = QUESTIONS
        .iter()
        .map(|q| extractor.question_view(q, &stopwords))
        .collect();
    let docs: Vec<Vec<String>> = views.iter().map(|v| v.tokens.clone()).collect();
    let vocabulary_size = Vocabulary::from_documents(&docs).len();

    let fit = Gsdmm::new(8)
        .with_n_iters(100)
        .with_alpha(0.2)
        .with_beta(0.01)
        .with_seed(2024)
        .fit(&docs, vocabulary_size)?;

    println!(
        "{} questions, {} populated clusters after {} sweeps (converged: {})",
        docs.len(),
        fit.n_populated(),
        fit.sweeps(),
        fit.converged()
    );

    for (z, size) in fit.cluster_sizes().into_iter().enumerate() {
        if size == 0 {
            continue;
        }
        let top: Vec<String> = fit
            .top_words(z, 5)
            .into_iter()
            .map(|(word, count)| format!("{word}({count})"))
            .collect();
        println!("\n=== cluster {z} ({size} questions) ===");
        println!("  top words: {}", top.join(" "));
        for (view, _) in views.iter().zip(fit.labels()).filter(|&(_, &l)| l == z) {
            println!("  - {}", view.display);
        }
    }

    Ok(())
}
