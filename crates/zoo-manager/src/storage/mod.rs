//! Storage layer for zoo-manager.
//!
//! This module provides `SQLite`-based persistent storage for animal records:
//! schema creation, insertion, listing and deletion over a single table.

pub mod schema;

use std::path::{Path, PathBuf};

use rusqlite::types::Type;
use rusqlite::{params, Connection};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::{parse_stored_date, AnimalRecord, NewAnimal, STORAGE_DATE_FORMAT};

use self::schema::SCHEMA_STATEMENTS;

/// Persistence operations the record controller depends on.
///
/// [`Storage`] is the production implementation; anything else that can
/// keep records (a test double, another backend) can stand in for it.
pub trait RecordStore {
    /// Ensure the record table exists. Safe to call on every startup.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created.
    fn initialize(&self) -> Result<()>;

    /// Insert one record and return its newly assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium is unavailable.
    fn create(&self, animal: &NewAnimal) -> Result<i64>;

    /// Return every record in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be read.
    fn list_all(&self) -> Result<Vec<AnimalRecord>>;

    /// Remove the record with the given identifier.
    ///
    /// Returns `false` when no such record existed, which is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium is unavailable.
    fn delete_by_id(&self, id: i64) -> Result<bool>;
}

/// Storage engine for animal records.
///
/// Owns the single open connection to the database file. The connection is
/// opened once by [`Storage::open`] and closed when the value is dropped.
#[derive(Debug)]
pub struct Storage {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl Storage {
    /// Open or create a storage database at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist,
    /// then makes sure the record table is present.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        let storage = Self { path, conn };
        storage.initialize()?;

        info!("Database opened successfully at {}", storage.path.display());
        Ok(storage)
    }

    /// Create an in-memory storage instance for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        let storage = Self {
            path: PathBuf::from(":memory:"),
            conn,
        };
        storage.initialize()?;
        Ok(storage)
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Count total records in storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM animals", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Convert a database row to an `AnimalRecord`.
    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<AnimalRecord> {
        let id: i64 = row.get(0)?;
        let name: String = row.get(1)?;
        let dob: String = row.get(2)?;
        let weight_kg: f64 = row.get(3)?;
        let height_m: f64 = row.get(4)?;
        let medical_condition: Option<String> = row.get(5)?;

        let date_of_birth = parse_stored_date(&dob).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                Type::Text,
                format!("unrecognised date of birth '{dob}' for animal {id}").into(),
            )
        })?;

        Ok(AnimalRecord {
            id,
            name,
            date_of_birth,
            weight_kg,
            height_m,
            medical_condition: medical_condition.unwrap_or_default(),
        })
    }
}

impl RecordStore for Storage {
    fn initialize(&self) -> Result<()> {
        for statement in SCHEMA_STATEMENTS {
            self.conn.execute(statement, [])?;
        }
        Ok(())
    }

    fn create(&self, animal: &NewAnimal) -> Result<i64> {
        let dob = animal.date_of_birth.format(STORAGE_DATE_FORMAT).to_string();

        self.conn.execute(
            r"
            INSERT INTO animals (name, dob, weight, height, medical_condition)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
            params![
                animal.name,
                dob,
                animal.weight_kg,
                animal.height_m,
                animal.medical_condition,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        info!("Added animal '{}' with id {}", animal.name, id);
        Ok(id)
    }

    fn list_all(&self) -> Result<Vec<AnimalRecord>> {
        let mut stmt = self.conn.prepare(
            r"
            SELECT id, name, dob, weight, height, medical_condition
            FROM animals ORDER BY id ASC
            ",
        )?;

        let records = stmt
            .query_map([], Self::row_to_record)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!("Listed {} animals", records.len());
        Ok(records)
    }

    fn delete_by_id(&self, id: i64) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM animals WHERE id = ?1", [id])?;

        if affected > 0 {
            info!("Deleted animal with id {}", id);
        } else {
            debug!("No animal with id {} to delete", id);
        }
        Ok(affected > 0)
    }
}
