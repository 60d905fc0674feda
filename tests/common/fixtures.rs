//! Artifact fixtures built with the stub encoder and written to a temp dir.

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use disc::config::Config;
use disc::corpus::ReferenceEntry;
use disc::embedding::MiniLmEncoder;
use disc::hybrid::HybridVectorBuilder;
use disc::lexical::{TfidfArtifact, TfidfModel, TfidfNorm, word_tokens};
use disc::taxonomy::{DiscDimension, QuestionId};
use tempfile::TempDir;

/// One reference snippet per dimension, reused for every question.
pub const SNIPPETS: [(DiscDimension, &str); 4] = [
    (DiscDimension::D, "I take charge and decide quickly"),
    (DiscDimension::I, "I rally people with energy and enthusiasm"),
    (DiscDimension::S, "I support colleagues patiently and steadily"),
    (DiscDimension::C, "I check every detail and follow procedures"),
];

/// Shares exactly the recognized tokens of the D snippet; 19 words.
pub const LONG_D_ANSWER: &str = "I take charge and decide quickly whenever a deadline gets close \
since somebody has got a job ahead overall";

pub struct Artifacts {
    pub dir: TempDir,
    pub vectorizer_path: PathBuf,
    pub corpus_path: PathBuf,
    pub entries: Vec<ReferenceEntry>,
}

impl Artifacts {
    pub fn config(&self) -> Config {
        Config {
            vectorizer_path: Some(self.vectorizer_path.clone()),
            corpus_path: Some(self.corpus_path.clone()),
            ..Default::default()
        }
    }
}

pub fn tfidf_artifact() -> TfidfArtifact {
    let terms: BTreeSet<String> = SNIPPETS
        .iter()
        .flat_map(|(_, text)| {
            let lower = text.to_lowercase();
            word_tokens(&lower)
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();

    let vocabulary: HashMap<String, usize> = terms
        .into_iter()
        .enumerate()
        .map(|(i, term)| (term, i))
        .collect();

    // "and" appears in every snippet and gets the lowest weight.
    let mut idf = vec![0.0; vocabulary.len()];
    for (term, &index) in &vocabulary {
        idf[index] = if term == "and" {
            1.0
        } else {
            1.5 + (index % 3) as f32 * 0.25
        };
    }

    TfidfArtifact {
        vocabulary,
        idf,
        norm: Some(TfidfNorm::L2),
        sublinear_tf: false,
        lowercase: true,
        ngram_range: (1, 1),
    }
}

/// Writes a vectorizer and a corpus covering `questions`, embedded with the stub encoder.
pub fn write_artifacts(questions: &[QuestionId]) -> Artifacts {
    let artifact = tfidf_artifact();
    let model = TfidfModel::from_artifact(artifact.clone()).expect("valid vectorizer");
    let encoder = MiniLmEncoder::stub().expect("stub encoder");
    let builder = HybridVectorBuilder::new(&model, &encoder);

    let entries: Vec<ReferenceEntry> = questions
        .iter()
        .flat_map(|question| {
            SNIPPETS.iter().map(|(dimension, text)| {
                let vector = builder.build(text).expect("stub encoding");
                ReferenceEntry::new(*question, *dimension, vector.into_inner()).with_text(*text)
            })
        })
        .collect();

    let dir = tempfile::tempdir().expect("tempdir");
    let vectorizer_path = dir.path().join("tfidf.json");
    let corpus_path = dir.path().join("corpus.json");

    std::fs::write(
        &vectorizer_path,
        serde_json::to_vec(&artifact).expect("serialize vectorizer"),
    )
    .expect("write vectorizer");
    std::fs::write(
        &corpus_path,
        serde_json::to_vec(&entries).expect("serialize corpus"),
    )
    .expect("write corpus");

    Artifacts {
        dir,
        vectorizer_path,
        corpus_path,
        entries,
    }
}
