//! Shared test fixtures: deterministic mock providers, an in-memory
//! vector index, and a small vocabulary/corpus for integration tests.
//!
//! The mock embedder hashes words into buckets, so texts sharing words
//! land near each other — enough signal for deterministic retrieval
//! tests without a real model.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use proteon_core::errors::ProviderError;
use proteon_core::models::{PassageRecord, SearchFilters, Similarity};
use proteon_core::traits::{IEmbeddingProvider, ILlmProvider, IVectorIndex, LlmRequest};
use proteon_vocab::{ProteinEntry, ProteinRegistry, TheoryRegistry, Vocabulary};

/// Deterministic bag-of-words embedder: each word hashes into a bucket,
/// the vector is L2-normalized.
pub struct HashEmbeddings {
    dimensions: usize,
    pub calls: AtomicU32,
}

impl HashEmbeddings {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            calls: AtomicU32::new(0),
        }
    }

    pub fn embed_sync(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimensions];
        for word in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            let hash = blake3::hash(word.to_lowercase().as_bytes());
            let bucket = u64::from_le_bytes(hash.as_bytes()[..8].try_into().unwrap())
                % self.dimensions as u64;
            vector[bucket as usize] += 1.0;
        }
        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut vector {
                *x /= norm;
            }
        }
        vector
    }
}

#[async_trait]
impl IEmbeddingProvider for HashEmbeddings {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.embed_sync(text))
    }

    fn name(&self) -> &str {
        "hash-embeddings"
    }
}

/// Embedding provider that always fails with a transient error.
#[derive(Default)]
pub struct FailingEmbeddings {
    pub calls: AtomicU32,
}

#[async_trait]
impl IEmbeddingProvider for FailingEmbeddings {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ProviderError::Unavailable {
            reason: "embeddings down".into(),
        })
    }

    fn name(&self) -> &str {
        "failing-embeddings"
    }
}

/// Brute-force cosine index over seeded passages. Honors filters and `k`
/// like a production index adapter would.
pub struct InMemoryIndex {
    embedder: HashEmbeddings,
    records: Mutex<Vec<(Vec<f32>, PassageRecord)>>,
}

impl InMemoryIndex {
    pub fn new(dimensions: usize) -> Self {
        Self {
            embedder: HashEmbeddings::new(dimensions),
            records: Mutex::new(Vec::new()),
        }
    }

    /// Seed a passage; its text is embedded with the same hashing scheme
    /// queries use.
    pub fn seed(&self, passage: PassageRecord) {
        let vector = self.embedder.embed_sync(&passage.text);
        self.records.lock().unwrap().push((vector, passage));
    }

    pub fn seed_all(&self, passages: impl IntoIterator<Item = PassageRecord>) {
        for p in passages {
            self.seed(p);
        }
    }
}

fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

#[async_trait]
impl IVectorIndex for InMemoryIndex {
    async fn search(
        &self,
        vector: &[f32],
        k: usize,
        filters: &SearchFilters,
    ) -> Result<Vec<PassageRecord>, ProviderError> {
        let records = self.records.lock().unwrap();
        let mut scored: Vec<PassageRecord> = records
            .iter()
            .filter(|(_, p)| filters.matches(p))
            .map(|(v, p)| {
                let mut passage = p.clone();
                passage.similarity = Similarity::new(cosine(vector, v) as f64);
                passage
            })
            .collect();
        scored.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(k);
        Ok(scored)
    }

    fn name(&self) -> &str {
        "in-memory-index"
    }
}

/// Vector index that always fails with a transient error.
#[derive(Default)]
pub struct FailingIndex {
    pub calls: AtomicU32,
}

#[async_trait]
impl IVectorIndex for FailingIndex {
    async fn search(
        &self,
        _vector: &[f32],
        _k: usize,
        _filters: &SearchFilters,
    ) -> Result<Vec<PassageRecord>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ProviderError::Unavailable {
            reason: "index down".into(),
        })
    }

    fn name(&self) -> &str {
        "failing-index"
    }
}

/// LLM that returns a canned answer.
pub struct ScriptedLlm {
    response: String,
}

impl ScriptedLlm {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl ILlmProvider for ScriptedLlm {
    async fn complete(&self, _request: &LlmRequest) -> Result<String, ProviderError> {
        Ok(self.response.clone())
    }

    fn name(&self) -> &str {
        "scripted-llm"
    }
}

/// LLM that always fails with a transient error.
#[derive(Default)]
pub struct FailingLlm {
    pub calls: AtomicU32,
}

#[async_trait]
impl ILlmProvider for FailingLlm {
    async fn complete(&self, _request: &LlmRequest) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ProviderError::Unavailable {
            reason: "llm down".into(),
        })
    }

    fn name(&self) -> &str {
        "failing-llm"
    }
}

/// LLM that hangs far longer than any sane timeout.
pub struct HangingLlm;

#[async_trait]
impl ILlmProvider for HangingLlm {
    async fn complete(&self, _request: &LlmRequest) -> Result<String, ProviderError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(String::new())
    }

    fn name(&self) -> &str {
        "hanging-llm"
    }
}

/// A small protein vocabulary plus the builtin theories and keywords.
pub fn test_vocabulary() -> Vocabulary {
    let proteins = ProteinRegistry::new(vec![
        entry("TP53", "Cellular tumor antigen p53", &["P53"]),
        entry("SIRT1", "Sirtuin-1", &[]),
        entry("SIRT6", "Sirtuin-6", &[]),
        entry("APOE", "Apolipoprotein E", &[]),
        entry("FOXO3", "Forkhead box protein O3", &[]),
        entry("IGF1", "Insulin-like growth factor 1", &["IGF-1"]),
        entry("IGF1R", "Insulin-like growth factor 1 receptor", &[]),
        entry("TERT", "Telomerase reverse transcriptase", &[]),
    ]);
    Vocabulary::new(
        proteins,
        TheoryRegistry::builtin(),
        proteon_vocab::keywords::AGING_KEYWORDS
            .iter()
            .map(|s| s.to_string())
            .collect(),
    )
}

fn entry(symbol: &str, name: &str, aliases: &[&str]) -> ProteinEntry {
    ProteinEntry {
        symbol: symbol.into(),
        name: name.into(),
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
    }
}

/// Construct a passage record with empty entity tags; the index fills in
/// similarity at search time.
pub fn passage(
    id: &str,
    pmcid: &str,
    pmid: Option<&str>,
    title: &str,
    year: i32,
    text: &str,
) -> PassageRecord {
    PassageRecord {
        id: id.into(),
        pmcid: pmcid.into(),
        pmid: pmid.map(String::from),
        title: title.into(),
        year,
        text: text.into(),
        similarity: Similarity::default(),
        proteins: Vec::new(),
        theories: Vec::new(),
    }
}

/// A small longevity-paper corpus covering the scenario tests.
pub fn longevity_corpus() -> Vec<PassageRecord> {
    vec![
        passage(
            "chunk-p53-1",
            "PMC7001",
            Some("31001"),
            "p53 function in tumor suppression and aging",
            2022,
            "The TP53 protein coordinates the DNA damage response and guards \
             genomic stability. Loss of p53 function permits mutation \
             accumulation and drives cellular senescence in aged tissues.",
        ),
        passage(
            "chunk-p53-2",
            "PMC7001",
            Some("31001"),
            "p53 function in tumor suppression and aging",
            2022,
            "p53 activation triggers apoptosis in cells with irreparable \
             DNA damage, a checkpoint that weakens with age.",
        ),
        passage(
            "chunk-sirt1",
            "PMC7002",
            Some("31002"),
            "SIRT1 links NAD metabolism to autophagy",
            2023,
            "SIRT1 is a NAD-dependent deacetylase. Caloric restriction \
             raises SIRT1 activity, stimulating autophagy and extending \
             lifespan in model organisms.",
        ),
        passage(
            "chunk-apoe",
            "PMC7003",
            None,
            "APOE variants and human longevity",
            2015,
            "APOE allele distribution shifts in centenarian cohorts, \
             implicating lipid transport in longevity.",
        ),
        passage(
            "chunk-tert",
            "PMC7004",
            Some("31004"),
            "Telomerase activity in stem cells",
            2021,
            "TERT expression maintains telomere length in stem cell \
             compartments; telomere attrition limits replicative capacity.",
        ),
        passage(
            "chunk-foxo3",
            "PMC7005",
            Some("31005"),
            "FOXO3 and oxidative stress resistance",
            2024,
            "FOXO3 upregulates antioxidant defenses under oxidative stress, \
             protecting mitochondrial function in long-lived individuals.",
        ),
    ]
}
