//! `SQLite` schema definitions for zoo-manager.
//!
//! The column set and types match files written by earlier versions of the
//! program, so existing databases open without conversion.

/// SQL statement to create the animals table.
///
/// `AUTOINCREMENT` keeps identifiers from ever being handed out twice, even
/// after the highest row is deleted.
pub const CREATE_ANIMALS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS animals (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    dob TEXT,
    weight REAL,
    height REAL,
    medical_condition TEXT
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[CREATE_ANIMALS_TABLE];
