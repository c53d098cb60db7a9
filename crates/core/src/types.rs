/// All database primary keys are SQLite INTEGER (rowid-backed).
pub type DbId = i64;

/// All timestamps are naive UTC, matching SQLite's `CURRENT_TIMESTAMP`.
pub type Timestamp = chrono::NaiveDateTime;
