use super::*;
use std::collections::HashMap;

use crate::embedding::{FailingEncoder, MockEncoder, SemanticEncoder};
use crate::lexical::{TfidfArtifact, TfidfModel, TfidfNorm};

fn model(terms: &[(&str, f32)]) -> TfidfModel {
    let vocabulary: HashMap<String, usize> = terms
        .iter()
        .enumerate()
        .map(|(i, (t, _))| (t.to_string(), i))
        .collect();
    TfidfModel::from_artifact(TfidfArtifact {
        vocabulary,
        idf: terms.iter().map(|(_, w)| *w).collect(),
        norm: Some(TfidfNorm::L2),
        sublinear_tf: false,
        lowercase: true,
        ngram_range: (1, 1),
    })
    .unwrap()
}

fn encoder() -> MockEncoder {
    MockEncoder::new(3)
        .with_token("plan", [1.0, 0.0, 0.0])
        .with_token("adapt", [0.0, 1.0, 0.0])
        .with_token("quickly", [0.0, 0.0, 1.0])
}

fn assert_unit(v: &QueryVector) {
    assert!((v.norm() - 1.0).abs() < 1e-5, "norm was {}", v.norm());
}

#[test]
fn test_out_of_vocabulary_text_is_zero_vector() {
    let model = model(&[("plan", 1.0)]);
    let encoder = encoder();
    let builder = HybridVectorBuilder::new(&model, &encoder);

    let v = builder.build("something entirely different").unwrap();
    assert_eq!(v, QueryVector::zeros(3));
    assert!(v.is_zero());
    assert_eq!(encoder.calls(), 0);
}

#[test]
fn test_empty_text_is_zero_vector() {
    let model = model(&[("plan", 1.0)]);
    let encoder = encoder();
    let builder = HybridVectorBuilder::new(&model, &encoder);

    assert_eq!(builder.build("").unwrap().dim(), 3);
    assert!(builder.build("   \n\t").unwrap().is_zero());
}

#[test]
fn test_single_token_yields_its_direction() {
    let model = model(&[("plan", 2.0)]);
    let encoder = encoder();
    let builder = HybridVectorBuilder::new(&model, &encoder);

    let v = builder.build("PLAN").unwrap();
    assert_eq!(v.as_slice(), &[1.0, 0.0, 0.0]);
}

#[test]
fn test_weights_follow_tfidf() {
    // idf 1 vs 3 with one occurrence each: l2 weights 1/sqrt(10), 3/sqrt(10)
    let model = model(&[("plan", 1.0), ("adapt", 3.0)]);
    let encoder = encoder();
    let builder = HybridVectorBuilder::new(&model, &encoder);

    let v = builder.build("plan adapt").unwrap();
    assert_unit(&v);
    let s = v.as_slice();
    assert!((s[1] / s[0] - 3.0).abs() < 1e-5);
    assert_eq!(s[2], 0.0);
}

#[test]
fn test_repeated_tokens_contribute_per_occurrence() {
    let model = model(&[("plan", 1.0), ("adapt", 1.0)]);
    let encoder = encoder();
    let builder = HybridVectorBuilder::new(&model, &encoder);

    // tf plan = 2 -> weight 2/sqrt5, added twice -> 4/sqrt5 vs 1/sqrt5
    let v = builder.build("plan plan adapt").unwrap();
    let s = v.as_slice();
    assert!((s[0] / s[1] - 4.0).abs() < 1e-5);
    assert_eq!(encoder.calls(), 3);
}

#[test]
fn test_trailing_punctuation_blocks_token_match() {
    let model = model(&[("plan", 1.0), ("adapt", 1.0)]);
    let encoder = encoder();
    let builder = HybridVectorBuilder::new(&model, &encoder);

    // "plan." is weighted by the vectorizer but never matches as a whitespace token
    let v = builder.build("adapt plan.").unwrap();
    assert_eq!(v.as_slice(), &[0.0, 1.0, 0.0]);

    assert!(builder.build("plan.").unwrap().is_zero());
}

#[test]
fn test_zero_magnitude_sum_stays_zero() {
    let model = model(&[("plan", 1.0), ("nalp", 1.0)]);
    let encoder = MockEncoder::new(2)
        .with_token("plan", [1.0, 0.0])
        .with_token("nalp", [-1.0, 0.0]);
    let builder = HybridVectorBuilder::new(&model, &encoder);

    let v = builder.build("plan nalp").unwrap();
    assert!(v.is_zero());
    assert!(v.as_slice().iter().all(|x| x.is_finite()));
}

#[test]
fn test_zero_idf_token_is_skipped() {
    let model = model(&[("plan", 0.0), ("adapt", 1.0)]);
    let encoder = encoder();
    let builder = HybridVectorBuilder::new(&model, &encoder);

    let v = builder.build("plan adapt").unwrap();
    assert_eq!(v.as_slice(), &[0.0, 1.0, 0.0]);
    assert_eq!(encoder.calls(), 1);
}

#[test]
fn test_output_is_unit_or_zero_for_many_inputs() {
    let model = model(&[("plan", 1.3), ("adapt", 0.7), ("quickly", 2.1)]);
    let encoder = encoder();
    let builder = HybridVectorBuilder::new(&model, &encoder);

    let inputs = [
        "I adapt quickly",
        "plan plan plan",
        "quickly, I plan and adapt",
        "nothing here",
        "Adapt! quickly",
    ];
    for input in inputs {
        let v = builder.build(input).unwrap();
        assert_eq!(v.dim(), 3);
        if v.is_zero() {
            assert_eq!(v.norm(), 0.0);
        } else {
            assert_unit(&v);
        }
    }
}

#[test]
fn test_encoder_failure_propagates() {
    let model = model(&[("plan", 1.0)]);
    let encoder = FailingEncoder { dim: 3 };
    let builder = HybridVectorBuilder::new(&model, &encoder);

    assert!(builder.build("plan").is_err());
    // no recognized token means the encoder is never consulted
    assert!(builder.build("nothing").unwrap().is_zero());
}

#[test]
fn test_wrong_token_dimension_is_rejected() {
    let model = model(&[("plan", 1.0)]);
    let encoder = MockEncoder::new(3).with_token("plan", [1.0, 0.0]);
    let builder = HybridVectorBuilder::new(&model, &encoder);

    assert!(matches!(
        builder.build("plan"),
        Err(crate::embedding::EmbeddingError::DimensionMismatch {
            expected: 3,
            actual: 2
        })
    ));
}

#[test]
fn test_non_finite_token_embedding_is_rejected() {
    let model = model(&[("plan", 1.0), ("adapt", 1.0)]);
    let encoder = MockEncoder::new(3)
        .with_token("plan", [1.0, 0.0, 0.0])
        .with_token("adapt", [f32::NAN, 0.0, 0.0]);
    let builder = HybridVectorBuilder::new(&model, &encoder);

    assert!(matches!(
        builder.build("plan then adapt"),
        Err(crate::embedding::EmbeddingError::InferenceFailed { .. })
    ));
    assert_unit(&builder.build("plan").unwrap());
}

#[test]
fn test_normalize_text_lowercases_only() {
    assert_eq!(normalize_text("  Don't PLAN. "), "  don't plan. ");
    assert_eq!(encoder().embedding_dim(), 3);
}
