//! End-to-end scoring over artifacts loaded from disk.

mod common;

use common::fixtures::{LONG_D_ANSWER, SNIPPETS, write_artifacts};
use disc::corpus::CorpusError;
use disc::lexical::LexicalError;
use disc::scoring::{AnswerVerdict, DiscScorer, ScoringError};
use disc::taxonomy::{DiscDimension, QuestionId};

#[test]
fn test_load_from_config_with_stub_encoder() {
    let artifacts = write_artifacts(&[QuestionId::Q1, QuestionId::Q3]);
    let scorer = DiscScorer::load(&artifacts.config()).expect("scorer loads");

    assert_eq!(scorer.embedding_dim(), 384);
    assert_eq!(scorer.corpus().len(), 8);
    assert_eq!(scorer.corpus().question_len(QuestionId::Q1), 4);
    assert_eq!(scorer.corpus().question_len(QuestionId::Q2), 0);
}

#[test]
fn test_reference_text_retrieves_itself() {
    let artifacts = write_artifacts(&[QuestionId::Q1]);
    let scorer = DiscScorer::load(&artifacts.config()).unwrap();

    for (dimension, text) in SNIPPETS {
        let results = scorer.retrieve_top_n(text, QuestionId::Q1, 4).unwrap();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].dimension, dimension, "snippet: {text}");
        assert!((results[0].score - 1.0).abs() < 1e-4);
        assert_eq!(results[0].entry.text.as_deref(), Some(text));

        let max = scorer.get_max_similarity(text, QuestionId::Q1).unwrap();
        assert!((max - results[0].score).abs() < 1e-6);
    }
}

#[test]
fn test_results_are_sorted_descending() {
    let artifacts = write_artifacts(&[QuestionId::Q2]);
    let scorer = DiscScorer::load(&artifacts.config()).unwrap();

    let results = scorer
        .retrieve_top_n("people with energy check every detail", QuestionId::Q2, 4)
        .unwrap();
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_negation_switches_by_question_group() {
    let artifacts = write_artifacts(&[QuestionId::Q1, QuestionId::Q3]);
    let scorer = DiscScorer::load(&artifacts.config()).unwrap();
    let answer = "I would never take charge and decide quickly";

    let q1 = scorer.retrieve_top_n(answer, QuestionId::Q1, 4).unwrap();
    assert_eq!(q1[0].entry.dimension, DiscDimension::D);
    assert_eq!(q1[0].dimension, DiscDimension::C);

    let q3 = scorer.retrieve_top_n(answer, QuestionId::Q3, 4).unwrap();
    assert_eq!(q3[0].entry.dimension, DiscDimension::D);
    assert_eq!(q3[0].dimension, DiscDimension::I);

    assert!(q1[1..].iter().all(|r| !r.is_switched()));
}

#[test]
fn test_out_of_vocabulary_answer_scores_zero() {
    let artifacts = write_artifacts(&[QuestionId::Q3]);
    let scorer = DiscScorer::load(&artifacts.config()).unwrap();

    let max = scorer
        .get_max_similarity("zzz qqq nothing overlaps here", QuestionId::Q3)
        .unwrap();
    assert_eq!(max, 0.0);

    let results = scorer
        .retrieve_top_n("zzz qqq nothing overlaps here", QuestionId::Q3, 2)
        .unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.score == 0.0));
}

#[test]
fn test_evaluate_long_answer() {
    let artifacts = write_artifacts(&[QuestionId::Q4]);
    let scorer = DiscScorer::load(&artifacts.config()).unwrap();

    let evaluation = scorer.evaluate_answer(LONG_D_ANSWER, QuestionId::Q4).unwrap();
    assert!(evaluation.is_accepted());
    assert_eq!(evaluation.word_count, 19);
    assert_eq!(evaluation.matches.len(), 4);
    assert_eq!(evaluation.top().unwrap().dimension, DiscDimension::D);

    let short = scorer
        .evaluate_answer("I take charge", QuestionId::Q4)
        .unwrap();
    assert!(matches!(short.verdict, AnswerVerdict::TooShort { words: 3, .. }));
}

#[test]
fn test_gate_settings_come_from_config() {
    let artifacts = write_artifacts(&[QuestionId::Q1]);
    let mut config = artifacts.config();
    config.top_n = 2;
    config.min_answer_words = 3;
    config.relevance_threshold = 0.2;
    config.token_cache_capacity = 0;

    let scorer = DiscScorer::load(&config).unwrap();
    let evaluation = scorer
        .evaluate_answer("I take charge", QuestionId::Q1)
        .unwrap();
    assert!(evaluation.is_accepted());
    assert_eq!(evaluation.matches.len(), 2);
}

#[test]
fn test_unknown_question_code() {
    let artifacts = write_artifacts(&[QuestionId::Q1]);
    let scorer = DiscScorer::load(&artifacts.config()).unwrap();

    assert_eq!(
        scorer
            .get_max_similarity_by_code(SNIPPETS[0].1, "Q7")
            .unwrap(),
        0.0
    );
    assert!(scorer
        .retrieve_top_n_by_code(SNIPPETS[0].1, "", 4)
        .unwrap()
        .is_empty());
}

#[test]
fn test_malformed_vectorizer_fails_to_load() {
    let artifacts = write_artifacts(&[QuestionId::Q1]);
    std::fs::write(&artifacts.vectorizer_path, b"{\"vocabulary\": 3}").unwrap();

    let err = DiscScorer::load(&artifacts.config()).unwrap_err();
    assert!(matches!(err, ScoringError::Lexical(LexicalError::Artifact(_))));
}

#[test]
fn test_corpus_with_wrong_dimension_fails_to_load() {
    let artifacts = write_artifacts(&[QuestionId::Q1]);
    std::fs::write(
        &artifacts.corpus_path,
        br#"[{"question_id": "Q1", "type": "D", "hybrid_vector": [1.0, 0.0]}]"#,
    )
    .unwrap();

    let err = DiscScorer::load(&artifacts.config()).unwrap_err();
    assert!(matches!(
        err,
        ScoringError::Corpus(CorpusError::DimensionMismatch {
            expected: 384,
            actual: 2,
            ..
        })
    ));
}

#[test]
fn test_scorer_is_shareable_across_threads() {
    let artifacts = write_artifacts(&[QuestionId::Q1]);
    let scorer = DiscScorer::load(&artifacts.config()).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = SNIPPETS
            .iter()
            .map(|&(dimension, text)| {
                let scorer = &scorer;
                s.spawn(move || {
                    let top = scorer.retrieve_top_n(text, QuestionId::Q1, 1).unwrap();
                    assert_eq!(top[0].dimension, dimension);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    });
}
