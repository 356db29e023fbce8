use dmmix::text::{ChunkLabel, PhraseExtractor, StopwordFilter};
use dmmix::{Gsdmm, Vocabulary};

#[test]
fn boilerplate_is_stripped_from_typical_questions() {
    let extractor = PhraseExtractor::new();

    let cases = [
        (
            "Mr Tan asked the Minister for Health whether clinic fees will rise",
            vec!["whether", "clinic", "fees", "will", "rise"],
        ),
        (
            "Ms Lim asked the Minister for Culture, Community and Youth how grants are awarded",
            vec!["how", "grants", "are", "awarded"],
        ),
        (
            "Mr Ong asked the Prime Minister whether the review is complete",
            vec!["whether", "the", "review", "is", "complete"],
        ),
        (
            "The honourable member asked in the debate on Healthier SG how enrolment works",
            vec!["how", "enrolment", "works"],
        ),
    ];

    for (text, expected) in cases {
        assert_eq!(extractor.extract(text).unwrap(), expected, "{text}");
    }
}

#[test]
fn text_without_preamble_passes_through() {
    let extractor = PhraseExtractor::new();
    let tokens = extractor.extract("Will clinic fees rise ?").unwrap();
    assert_eq!(tokens, vec!["Will", "clinic", "fees", "rise", "?"]);
}

#[test]
fn parse_exposes_the_chunk_tree() {
    let extractor = PhraseExtractor::new();
    let nodes = extractor
        .parse("Mr Tan asked the Minister for Health whether fees will rise")
        .unwrap();
    assert_eq!(nodes[0].label(), Some(ChunkLabel::Ask1));
    assert!(nodes[1..].iter().all(|n| n.label().is_none()));
}

#[test]
fn display_text_keeps_content_words() {
    let extractor = PhraseExtractor::new();
    let view = extractor.question_view(
        "Dr. Tan asked the Minister for Health whether the number of new cases will change this year",
        &StopwordFilter::question_noise(),
    );
    assert_eq!(
        view.tokens,
        vec!["whether", "the", "number", "of", "new", "cases", "will", "change", "this", "year"]
    );
    assert_eq!(view.display, "number new cases change year");
}

#[test]
fn blank_questions_become_empty_documents() {
    let extractor = PhraseExtractor::new();
    let docs = extractor.extract_all(&["", "   "]);
    assert!(docs.iter().all(Vec::is_empty));

    let view = extractor.question_view("", &StopwordFilter::question_noise());
    assert!(view.tokens.is_empty());
    assert!(view.display.is_empty());
}

#[test]
fn extracted_questions_cluster_by_topic() {
    let extractor = PhraseExtractor::new();
    let questions = [
        "Mr Tan asked the Minister for Health whether clinic fees will rise",
        "Ms Lim asked the Minister for Health whether clinic fees are subsidised",
        "Mr Lee asked the Minister for Health whether clinic fees cover polyclinics",
        "Mr Ong asked the Minister for Education whether school bursary quotas expand",
        "Ms Goh asked the Minister for Education whether school bursary quotas shrink",
        "Mr Ng asked the Minister for Education whether school bursary quotas change",
    ];
    let docs = extractor.extract_all(&questions);
    let v = Vocabulary::from_documents(&docs).len();

    let fit = Gsdmm::new(4)
        .with_n_iters(50)
        .with_alpha(0.2)
        .with_beta(0.01)
        .with_seed(11)
        .fit(&docs, v)
        .unwrap();

    let labels = fit.labels();
    assert_eq!(labels.len(), questions.len());
    assert!(fit.n_populated() >= 1);
    assert!(fit.clusters().iter().all(|c| c.is_consistent()));

    let best = fit.choose_best_label(&["clinic", "fees"]).unwrap();
    assert!(best.0 < 4);
    assert!(best.1 > 0.0 && best.1 <= 1.0);
}
