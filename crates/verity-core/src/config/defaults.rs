// Single source of truth for all default values.

// --- Freshness ---
pub const DEFAULT_FRESHNESS_WINDOW_DAYS: i64 = crate::constants::FRESHNESS_WINDOW_DAYS;

// --- Resolution ---
pub const DEFAULT_TREAT_EXPIRED_AS_UNVERIFIED: bool = false;

// --- Synthesis ---
pub const DEFAULT_MAX_CONTEXT_ASSERTIONS: usize = 50;
pub const DEFAULT_MAX_CONTENT_CHARS: usize = 2_000;
pub const DEFAULT_MAX_CONTEXT_TOKENS: usize = 6_000;
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_TOKEN_CACHE_CAPACITY: u64 = 10_000;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "verity.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
