//! Migration v1: asides table

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS asides (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    body TEXT NOT NULL UNIQUE CHECK (length(body) > 0),
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL CHECK (updated_at >= created_at)
);

CREATE INDEX IF NOT EXISTS idx_asides_updated ON asides (updated_at DESC, id DESC);
";
