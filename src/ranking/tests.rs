use super::*;

use crate::corpus::{ReferenceCorpus, ReferenceEntry};
use crate::taxonomy::{DiscDimension, QuestionId};

fn corpus(entries: &[(QuestionId, DiscDimension, [f32; 2])]) -> ReferenceCorpus {
    ReferenceCorpus::from_entries(
        entries
            .iter()
            .map(|(q, d, v)| ReferenceEntry::new(*q, *d, v.to_vec()))
            .collect(),
        2,
    )
    .unwrap()
}

fn two_entry_corpus() -> ReferenceCorpus {
    corpus(&[
        (QuestionId::Q1, DiscDimension::D, [1.0, 0.0]),
        (QuestionId::Q1, DiscDimension::I, [0.0, 1.0]),
    ])
}

mod cosine_tests {
    use super::*;

    #[test]
    fn test_identical_vectors() {
        assert!((cosine_similarity(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_orthogonal_vectors() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_opposite_vectors() {
        assert!((cosine_similarity(&[1.0, 0.0], &[-2.0, 0.0]) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_scale_invariant() {
        assert!((cosine_similarity(&[1.0, 2.0], &[3.0, 6.0]) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_vector_scores_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_mismatched_or_empty() {
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }
}

#[test]
fn test_rank_two_entry_scenario() {
    let corpus = two_entry_corpus();
    let ranker = SimilarityRanker::new(&corpus);

    let ranked = ranker.rank(&[1.0, 0.0], QuestionId::Q1, 4);
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].score, 1.0);
    assert_eq!(ranked[0].dimension, DiscDimension::D);
    assert_eq!(ranked[1].score, 0.0);
    assert_eq!(ranked[1].dimension, DiscDimension::I);
}

#[test]
fn test_rank_sorted_descending_and_filtered() {
    let corpus = corpus(&[
        (QuestionId::Q2, DiscDimension::D, [0.2, 1.0]),
        (QuestionId::Q1, DiscDimension::C, [1.0, 0.0]),
        (QuestionId::Q2, DiscDimension::S, [1.0, 0.1]),
        (QuestionId::Q2, DiscDimension::I, [-1.0, 0.0]),
        (QuestionId::Q2, DiscDimension::C, [1.0, 1.0]),
    ]);
    let ranker = SimilarityRanker::new(&corpus);

    let ranked = ranker.rank(&[1.0, 0.0], QuestionId::Q2, 10);
    assert_eq!(ranked.len(), 4);
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert!(ranked.iter().all(|s| s.question_id() == QuestionId::Q2));
    assert_eq!(ranked[0].dimension, DiscDimension::S);
    assert_eq!(ranked[3].dimension, DiscDimension::I);
    assert!(ranked[3].score < 0.0);
}

#[test]
fn test_rank_truncates_to_top_n() {
    let corpus = two_entry_corpus();
    let ranker = SimilarityRanker::new(&corpus);

    assert_eq!(ranker.rank(&[1.0, 0.0], QuestionId::Q1, 1).len(), 1);
    assert!(ranker.rank(&[1.0, 0.0], QuestionId::Q1, 0).is_empty());
}

#[test]
fn test_ties_keep_corpus_order() {
    let corpus = corpus(&[
        (QuestionId::Q3, DiscDimension::S, [0.6, 0.8]),
        (QuestionId::Q3, DiscDimension::D, [0.6, 0.8]),
        (QuestionId::Q3, DiscDimension::C, [0.6, 0.8]),
    ]);
    let ranker = SimilarityRanker::new(&corpus);

    let dims: Vec<DiscDimension> = ranker
        .rank(&[1.0, 0.0], QuestionId::Q3, 3)
        .iter()
        .map(|s| s.dimension)
        .collect();
    assert_eq!(dims, vec![DiscDimension::S, DiscDimension::D, DiscDimension::C]);
}

#[test]
fn test_zero_query_scores_zero_everywhere() {
    let corpus = two_entry_corpus();
    let ranker = SimilarityRanker::new(&corpus);

    let ranked = ranker.rank(&[0.0, 0.0], QuestionId::Q1, 4);
    assert!(ranked.iter().all(|s| s.score == 0.0));
    // stable: corpus order survives an all-zero ranking
    assert_eq!(ranked[0].dimension, DiscDimension::D);
    assert_eq!(ranker.max_similarity(&[0.0, 0.0], QuestionId::Q1), 0.0);
}

#[test]
fn test_empty_question_partition() {
    let corpus = two_entry_corpus();
    let ranker = SimilarityRanker::new(&corpus);

    assert!(ranker.rank(&[1.0, 0.0], QuestionId::Q6, 4).is_empty());
    assert_eq!(ranker.max_similarity(&[1.0, 0.0], QuestionId::Q6), 0.0);
}

#[test]
fn test_max_similarity_matches_top_rank() {
    let corpus = corpus(&[
        (QuestionId::Q4, DiscDimension::D, [0.3, 0.7]),
        (QuestionId::Q4, DiscDimension::I, [0.9, -0.2]),
        (QuestionId::Q4, DiscDimension::S, [-0.5, -0.5]),
    ]);
    let ranker = SimilarityRanker::new(&corpus);

    for query in [[1.0, 0.0], [0.0, 1.0], [-1.0, -1.0], [0.6, 0.8]] {
        let top = ranker.rank(&query, QuestionId::Q4, 1)[0].score;
        assert_eq!(ranker.max_similarity(&query, QuestionId::Q4), top);
    }
}

#[test]
fn test_max_similarity_can_be_negative() {
    let corpus = corpus(&[(QuestionId::Q5, DiscDimension::C, [-1.0, 0.0])]);
    let ranker = SimilarityRanker::new(&corpus);
    assert!((ranker.max_similarity(&[1.0, 0.0], QuestionId::Q5) + 1.0).abs() < 1e-6);
}

#[test]
fn test_scored_reference_serializes_reported_and_stored_type() {
    let corpus = two_entry_corpus();
    let mut scored = ScoredReference::new(0.9, &corpus.entries()[0]);
    scored.dimension = DiscDimension::C;
    assert!(scored.is_switched());

    let json = serde_json::to_value(scored).unwrap();
    assert_eq!(json["type"], "C");
    assert_eq!(json["stored_type"], "D");
    assert_eq!(json["question_id"], "Q1");
    assert!(json["text"].is_null());
    assert_eq!(corpus.entries()[0].dimension, DiscDimension::D);
}

#[test]
fn test_score_order_is_total_with_nan() {
    use super::ranker::by_score_desc;

    let mut scores: Vec<f32> = (0..64)
        .map(|i| if i % 3 == 0 { f32::NAN } else { (i as f32 * 0.37).sin() })
        .collect();
    scores.sort_by(|a, b| by_score_desc(*a, *b));

    let finite = scores.iter().take_while(|s| !s.is_nan()).count();
    assert_eq!(finite, 42);
    assert!(scores[finite..].iter().all(|s| s.is_nan()));
    assert!(scores[..finite].windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_nan_query_does_not_panic() {
    let corpus = two_entry_corpus();
    let ranker = SimilarityRanker::new(&corpus);

    let ranked = ranker.rank_all(&[f32::NAN, 0.0], QuestionId::Q1);
    assert_eq!(ranked.len(), 2);
}
