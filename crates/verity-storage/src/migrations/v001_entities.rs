//! v001: entities and knowledge assertions.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS entities (
    id          TEXT PRIMARY KEY,
    kind        TEXT NOT NULL CHECK (kind IN ('table', 'column')),
    path        TEXT NOT NULL,
    data_type   TEXT,
    description TEXT,
    parent_id   TEXT REFERENCES entities(id),
    created_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_entities_parent ON entities(parent_id);

CREATE TABLE IF NOT EXISTS assertions (
    id                TEXT PRIMARY KEY,
    entity_id         TEXT NOT NULL REFERENCES entities(id),
    source_type       TEXT NOT NULL,
    status            TEXT NOT NULL,
    kind              TEXT NOT NULL,
    content_primary   TEXT,
    content_secondary TEXT,
    author            TEXT,
    is_canonical      INTEGER NOT NULL DEFAULT 0,
    verified_at       TEXT,
    updated_at        TEXT NOT NULL,
    confidence        REAL
);

CREATE INDEX IF NOT EXISTS idx_assertions_entity ON assertions(entity_id);
CREATE INDEX IF NOT EXISTS idx_assertions_entity_status ON assertions(entity_id, status);
";
