//! QueryOrchestrator: the full pipeline behind `query` and
//! `query_general`.
//!
//! query → embed → vector search → entity backfill → re-rank →
//! synthesize → relevance score → citations → assemble response.
//!
//! Retrieval failure (post-retry) fails the request; synthesis failure
//! degrades it — passages and citations are never hidden behind a slow
//! or broken LLM.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use tracing::{debug, info, warn};

use proteon_core::config::EngineConfig;
use proteon_core::errors::{RetrievalError, VocabularyError};
use proteon_core::models::{
    EmptyResultReason, PassageRecord, Query, QueryResponse, ResponseMetadata, SearchFilters,
};
use proteon_core::traits::{IEmbeddingProvider, ILlmProvider, IVectorIndex};
use proteon_retrieval::confidence::confidence;
use proteon_retrieval::{citations, AgingRelevanceScorer, Reranker, Retriever};
use proteon_synthesis::AnswerSynthesizer;
use proteon_vocab::{EntityExtractor, Vocabulary};

use crate::query_log::{QueryLog, QueryLogEntry};

pub struct QueryOrchestrator {
    retriever: Retriever,
    reranker: Reranker,
    scorer: AgingRelevanceScorer,
    synthesizer: AnswerSynthesizer,
    extractor: Arc<EntityExtractor>,
    log: Mutex<QueryLog>,
}

impl QueryOrchestrator {
    /// Wire the pipeline from its collaborators and config. Compiles the
    /// vocabulary matchers once; fails only on malformed vocabulary.
    pub fn new(
        embeddings: Arc<dyn IEmbeddingProvider>,
        index: Arc<dyn IVectorIndex>,
        llm: Arc<dyn ILlmProvider>,
        vocabulary: Arc<Vocabulary>,
        config: EngineConfig,
    ) -> Result<Self, VocabularyError> {
        let extractor = Arc::new(EntityExtractor::new(&vocabulary)?);
        info!(
            proteins = vocabulary.proteins.len(),
            theories = vocabulary.theories.len(),
            keywords = vocabulary.keywords.len(),
            "query orchestrator initialized"
        );
        Ok(Self {
            retriever: Retriever::new(embeddings, index, config.retrieval.clone()),
            reranker: Reranker::new(config.rerank.clone()),
            scorer: AgingRelevanceScorer::new(
                vocabulary.clone(),
                extractor.clone(),
                config.relevance.clone(),
            ),
            synthesizer: AnswerSynthesizer::new(llm, config.synthesis.clone()),
            extractor,
            log: Mutex::new(QueryLog::new()),
        })
    }

    /// The filtered query path. A query without filters is treated as
    /// general and additionally scored for aging relevance.
    pub async fn query(&self, query: Query) -> Result<QueryResponse, RetrievalError> {
        self.run(query).await
    }

    /// The unfiltered path: answers any protein question and always runs
    /// the aging-relevance scorer, since the query was not pre-scoped to
    /// aging.
    pub async fn query_general(
        &self,
        text: impl Into<String>,
        top_k: usize,
        synthesize: bool,
    ) -> Result<QueryResponse, RetrievalError> {
        self.run(
            Query::new(text)
                .with_top_k(top_k)
                .with_synthesis(synthesize),
        )
        .await
    }

    /// Recent query log entries, newest last.
    pub fn recent_queries(&self) -> Vec<QueryLogEntry> {
        match self.log.lock() {
            Ok(log) => log.entries().to_vec(),
            Err(_) => Vec::new(),
        }
    }

    async fn run(&self, query: Query) -> Result<QueryResponse, RetrievalError> {
        let started = Instant::now();
        let filters = SearchFilters::from_query(&query);
        let is_general_query = !query.has_filters();
        let top_k = self.retriever.effective_top_k(query.top_k);

        // Stage 1: embed + search (retried, timed out inside).
        let passages = self.retriever.retrieve(&query).await?;
        let passages = self.backfill_entities(passages);

        // Stage 2: re-rank and truncate to the requested count.
        let ranked = self.reranker.rerank_now(passages, &filters, top_k);
        debug!(ranked = ranked.len(), top_k, "re-ranking complete");

        // Stage 3: citations for the synthesis context slice. Built even
        // when synthesis is disabled, so citations always reflect what
        // would ground an answer.
        let context_len = ranked.len().min(self.synthesizer.context_size());
        let context = &ranked[..context_len];
        let cites = citations::build(context);

        // Stage 4: synthesis, degrading on failure.
        let (answer, degraded) = if query.synthesize && !ranked.is_empty() {
            match self.synthesizer.synthesize(&query, context, &cites).await {
                Ok(text) => (text, false),
                Err(error) => {
                    warn!(%error, "synthesis failed, returning degraded response");
                    (String::new(), true)
                }
            }
        } else {
            (String::new(), false)
        };

        // Stage 5: response entities — union of passage tags and answer
        // mentions, sorted for stable output.
        let answer_hits = self.extractor.extract(&answer);
        let proteins_mentioned = sorted_union(
            ranked.iter().flat_map(|r| r.passage.proteins.iter()),
            &answer_hits.proteins,
        );
        let theories_identified = sorted_union(
            ranked.iter().flat_map(|r| r.passage.theories.iter()),
            &answer_hits.theories,
        );

        // Stage 6: aging relevance on the general path.
        let relevance = is_general_query.then(|| self.scorer.score(&answer, &ranked));

        let empty_reason = if ranked.is_empty() {
            Some(if filters.is_empty() {
                EmptyResultReason::NoMatches
            } else {
                EmptyResultReason::FilterTooNarrow
            })
        } else {
            None
        };

        let elapsed = started.elapsed();
        let metadata = ResponseMetadata {
            confidence: confidence(&ranked),
            proteins_mentioned,
            theories_identified,
            query_time_ms: elapsed.as_secs_f64() * 1_000.0,
            filters_applied: filters,
            chunks_retrieved: ranked.len(),
            degraded,
        };

        if let Ok(mut log) = self.log.lock() {
            log.record(QueryLogEntry::new(
                query.text.clone(),
                elapsed,
                metadata.chunks_retrieved,
                metadata.confidence,
                metadata.degraded,
            ));
        }

        info!(
            chunks = metadata.chunks_retrieved,
            citations = cites.len(),
            confidence = metadata.confidence,
            degraded = metadata.degraded,
            elapsed_ms = metadata.query_time_ms,
            general = is_general_query,
            "query complete"
        );

        Ok(QueryResponse {
            query,
            answer,
            ranked_passages: ranked,
            citations: cites,
            relevance,
            metadata,
            is_general_query,
            empty_reason,
        })
    }

    /// Populate entity metadata on passages whose index record carries no
    /// tags. Passages are immutable downstream of this point.
    fn backfill_entities(&self, passages: Vec<PassageRecord>) -> Vec<PassageRecord> {
        passages
            .into_iter()
            .map(|mut passage| {
                if passage.proteins.is_empty() {
                    passage.proteins = self.extractor.extract_proteins(&passage.text);
                }
                if passage.theories.is_empty() {
                    passage.theories = self.extractor.extract_theories(&passage.text);
                }
                passage
            })
            .collect()
    }
}

fn sorted_union<'a>(
    from_passages: impl Iterator<Item = &'a String>,
    from_answer: &[String],
) -> Vec<String> {
    let mut set: BTreeSet<String> = from_passages.cloned().collect();
    set.extend(from_answer.iter().cloned());
    set.into_iter().collect()
}
