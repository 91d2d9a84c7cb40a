//! v002: current syntheses and their citation edges.
//!
//! `entity_id` is unique: an entity has at most one current synthesis.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS syntheses (
    id               TEXT PRIMARY KEY,
    entity_id        TEXT NOT NULL UNIQUE,
    synthesis_text   TEXT NOT NULL,
    confidence_score REAL NOT NULL,
    model_version    TEXT NOT NULL,
    created_at       TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS synthesis_citations (
    synthesis_id TEXT NOT NULL REFERENCES syntheses(id) ON DELETE CASCADE,
    assertion_id TEXT NOT NULL,
    PRIMARY KEY (synthesis_id, assertion_id)
);

CREATE INDEX IF NOT EXISTS idx_citations_assertion ON synthesis_citations(assertion_id);
";
