//! Database schema for the board service.

use crate::db::Migrations;

/// Migrations for the boards database.
///
/// `author_id` is a plain value: users live in another service's database,
/// so there is no foreign key and no existence check.
pub const MIGRATIONS: Migrations = &[
    // v1: boards table
    r#"
CREATE TABLE boards (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    content     TEXT NOT NULL,
    author_id   INTEGER NOT NULL,
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_boards_author_id ON boards(author_id);
"#,
];
