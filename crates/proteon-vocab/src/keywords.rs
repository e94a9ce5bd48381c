//! Aging-domain keyword list used by the relevance scorer.
//!
//! Product content, not algorithm: ships as versioned data. The engine
//! accepts any replacement list through `Vocabulary::new`.

/// Default aging keywords, matched case-insensitively on word boundaries.
pub const AGING_KEYWORDS: &[&str] = &[
    "aging",
    "ageing",
    "longevity",
    "lifespan",
    "senescence",
    "age-related",
    "elderly",
    "geriatric",
    "telomere",
    "oxidative stress",
    "mitochondrial",
    "autophagy",
    "apoptosis",
    "inflammation",
    "proteostasis",
    "genomic instability",
    "cellular senescence",
    "stem cell",
    "epigenetic",
    "caloric restriction",
    "rapamycin",
    "metformin",
    "resveratrol",
    "sirtuin",
    "mtor",
    "ampk",
    "healthspan",
    "age-associated",
    "gerontology",
    "rejuvenation",
];
