/// Proteon system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard ceiling on requested result counts.
pub const MAX_TOP_K: usize = 50;

/// Default result count when the caller does not specify one.
pub const DEFAULT_TOP_K: usize = 10;

/// Papers published within this many years count as recent.
pub const RECENT_WINDOW_YEARS: i32 = 5;

/// Maximum connection phrases attached to a relevance verdict.
pub const MAX_CONNECTIONS: usize = 10;

/// Passages embedded into the synthesis prompt as grounding context.
pub const SYNTHESIS_CONTEXT_PASSAGES: usize = 5;

/// Paper titles longer than this are truncated in citation references.
pub const CITATION_TITLE_MAX_CHARS: usize = 100;
