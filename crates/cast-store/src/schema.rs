/// SQL DDL for the cast database.
/// WAL mode + foreign keys enabled at connection time.
pub const SCHEMA_VERSION: u32 = 1;

pub const CASTS_TABLE: &str = "casts";

/// Column list shared by every `SELECT` on the casts table.
/// Order must match `casts::row_to_cast`.
pub const CASTS_COLUMNS: &str = "id, name, nationality";

pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS casts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    nationality TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);
"#;

pub const PRAGMAS: &str = r#"
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;
PRAGMA busy_timeout = 5000;
PRAGMA synchronous = NORMAL;
"#;
