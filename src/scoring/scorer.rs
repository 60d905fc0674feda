use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::constants::validate_embedding_dim;
use crate::corpus::ReferenceCorpus;
use crate::embedding::{CachedEncoder, MiniLmConfig, MiniLmEncoder, SemanticEncoder};
use crate::hybrid::{HybridVectorBuilder, QueryVector};
use crate::lexical::TfidfModel;
use crate::negation::apply_negation_switch;
use crate::ranking::{ScoredReference, SimilarityRanker};
use crate::taxonomy::QuestionId;

use super::error::ScoringError;
use super::gate::{AnswerGate, AnswerVerdict, word_count};

/// Everything learned about one answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerEvaluation<'a> {
    pub question: QuestionId,
    pub word_count: usize,
    pub verdict: AnswerVerdict,
    /// Best matches after the negation switch; empty unless accepted.
    pub matches: Vec<ScoredReference<'a>>,
    /// Whether the top match was relabeled.
    pub negated: bool,
}

impl AnswerEvaluation<'_> {
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }

    /// Top match, if the answer was accepted.
    pub fn top(&self) -> Option<&ScoredReference<'_>> {
        self.matches.first()
    }
}

/// Loaded vectorizer, encoder and corpus, shared read-only across calls.
pub struct DiscScorer {
    model: TfidfModel,
    encoder: Box<dyn SemanticEncoder>,
    corpus: ReferenceCorpus,
    gate: AnswerGate,
}

impl std::fmt::Debug for DiscScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscScorer")
            .field("vocabulary_len", &self.model.vocabulary_len())
            .field("embedding_dim", &self.encoder.embedding_dim())
            .field("corpus_len", &self.corpus.len())
            .field("gate", &self.gate)
            .finish()
    }
}

impl DiscScorer {
    /// Loads all artifacts named by `config`.
    ///
    /// Without an encoder path the encoder runs in stub mode, which only makes
    /// sense against a corpus built with the same stub.
    pub fn load(config: &Config) -> Result<Self, ScoringError> {
        config.validate()?;
        let (vectorizer_path, corpus_path) = config.require_artifacts()?;

        let encoder_config = match &config.encoder_path {
            Some(dir) => MiniLmConfig::new(dir),
            None => {
                warn!("No encoder path configured, using stub encoder");
                MiniLmConfig::stub()
            }
        };
        let encoder = CachedEncoder::new(
            MiniLmEncoder::load(encoder_config)?,
            config.token_cache_capacity,
        );

        let model = TfidfModel::load(vectorizer_path)?;
        let corpus = ReferenceCorpus::load(corpus_path, encoder.embedding_dim())?;

        Self::from_parts(model, Box::new(encoder), corpus, AnswerGate::from_config(config))
    }

    /// Assembles a scorer from already loaded parts.
    pub fn from_parts(
        model: TfidfModel,
        encoder: Box<dyn SemanticEncoder>,
        corpus: ReferenceCorpus,
        gate: AnswerGate,
    ) -> Result<Self, ScoringError> {
        validate_embedding_dim(corpus.dim(), encoder.embedding_dim())?;

        info!(
            vocabulary_len = model.vocabulary_len(),
            embedding_dim = encoder.embedding_dim(),
            corpus_len = corpus.len(),
            top_n = gate.top_n,
            relevance_threshold = gate.relevance_threshold,
            min_words = gate.min_words,
            "DiSC scorer ready"
        );

        Ok(Self {
            model,
            encoder,
            corpus,
            gate,
        })
    }

    pub fn model(&self) -> &TfidfModel {
        &self.model
    }

    pub fn corpus(&self) -> &ReferenceCorpus {
        &self.corpus
    }

    pub fn gate(&self) -> &AnswerGate {
        &self.gate
    }

    pub fn embedding_dim(&self) -> usize {
        self.encoder.embedding_dim()
    }

    fn builder(&self) -> HybridVectorBuilder<'_> {
        HybridVectorBuilder::new(&self.model, self.encoder.as_ref())
    }

    fn ranker(&self) -> SimilarityRanker<'_> {
        SimilarityRanker::new(&self.corpus)
    }

    /// Hybrid query vector for an answer.
    pub fn build_query_vector(&self, answer: &str) -> Result<QueryVector, ScoringError> {
        Ok(self.builder().build(answer)?)
    }

    /// Best cosine similarity between `answer` and the references for `question`.
    pub fn get_max_similarity(
        &self,
        answer: &str,
        question: QuestionId,
    ) -> Result<f32, ScoringError> {
        let query = self.build_query_vector(answer)?;
        Ok(self.ranker().max_similarity(query.as_slice(), question))
    }

    /// Best `n` references for `question`, with the negation switch applied to the top one.
    pub fn retrieve_top_n(
        &self,
        answer: &str,
        question: QuestionId,
        n: usize,
    ) -> Result<Vec<ScoredReference<'_>>, ScoringError> {
        if n == 0 {
            return Ok(Vec::new());
        }
        let query = self.build_query_vector(answer)?;
        let mut ranked = self.ranker().rank(query.as_slice(), question, n);
        apply_negation_switch(&mut ranked, question, answer);
        Ok(ranked)
    }

    /// [`get_max_similarity`](Self::get_max_similarity) keyed by a raw code.
    /// Unknown codes score `0.0`.
    pub fn get_max_similarity_by_code(&self, answer: &str, code: &str) -> Result<f32, ScoringError> {
        match QuestionId::parse_code(code) {
            Some(question) => self.get_max_similarity(answer, question),
            None => {
                debug!(code, "Unknown question code");
                Ok(0.0)
            }
        }
    }

    /// [`retrieve_top_n`](Self::retrieve_top_n) keyed by a raw code.
    /// Unknown codes return no matches.
    pub fn retrieve_top_n_by_code(
        &self,
        answer: &str,
        code: &str,
        n: usize,
    ) -> Result<Vec<ScoredReference<'_>>, ScoringError> {
        match QuestionId::parse_code(code) {
            Some(question) => self.retrieve_top_n(answer, question, n),
            None => {
                debug!(code, "Unknown question code");
                Ok(Vec::new())
            }
        }
    }

    /// Runs the gate and, for accepted answers, retrieval.
    ///
    /// Short answers are rejected before any encoding happens. The query vector
    /// is built once and shared by the relevance check and the ranking.
    pub fn evaluate_answer(
        &self,
        answer: &str,
        question: QuestionId,
    ) -> Result<AnswerEvaluation<'_>, ScoringError> {
        let words = word_count(answer);

        if let Some(verdict) = self.gate.check_length(answer) {
            debug!(question = %question, verdict = %verdict, "Answer rejected");
            return Ok(AnswerEvaluation {
                question,
                word_count: words,
                verdict,
                matches: Vec::new(),
                negated: false,
            });
        }

        let query = self.build_query_vector(answer)?;
        let ranker = self.ranker();
        let verdict = self.gate.judge(ranker.max_similarity(query.as_slice(), question));

        if !verdict.is_accepted() {
            debug!(question = %question, verdict = %verdict, "Answer rejected");
            return Ok(AnswerEvaluation {
                question,
                word_count: words,
                verdict,
                matches: Vec::new(),
                negated: false,
            });
        }

        let mut matches = ranker.rank(query.as_slice(), question, self.gate.top_n);
        let negated = apply_negation_switch(&mut matches, question, answer);

        debug!(
            question = %question,
            verdict = %verdict,
            matches = matches.len(),
            negated,
            "Answer accepted"
        );

        Ok(AnswerEvaluation {
            question,
            word_count: words,
            verdict,
            matches,
            negated,
        })
    }
}
