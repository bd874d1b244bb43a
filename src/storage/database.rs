//! `SQLite` database connection and the persistent key/value scope.
//!
//! The database lives at `~/.quotebox/quotebox.db` and holds a single
//! `local_storage` table of string keys to string values.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::QuoteboxError;

use super::migrations;
use super::KeyValueStore;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at a specific path, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &std::path::Path) -> Result<Self, QuoteboxError> {
        let conn = Connection::open(path).map_err(|e| {
            QuoteboxError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;

        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, QuoteboxError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            QuoteboxError::Database(format!("Failed to open in-memory database: {e}"))
        })?;

        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), QuoteboxError> {
        migrations::run(&self.conn)
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, QuoteboxError> {
        migrations::get_version(&self.conn)
    }
}

impl KeyValueStore for Database {
    fn get_item(&self, key: &str) -> Result<Option<String>, QuoteboxError> {
        self.conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| QuoteboxError::Database(format!("Failed to read key '{key}': {e}")))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), QuoteboxError> {
        self.conn
            .execute(
                r"INSERT INTO local_storage (key, value, updated_at) VALUES (?1, ?2, ?3)
                  ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, Utc::now().to_rfc3339()],
            )
            .map_err(|e| QuoteboxError::Database(format!("Failed to write key '{key}': {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.schema_version().unwrap() > 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut db = Database::open_in_memory().unwrap();

        assert_eq!(db.get_item("quotes").unwrap(), None);

        db.set_item("quotes", "[]").unwrap();
        assert_eq!(db.get_item("quotes").unwrap(), Some("[]".to_string()));

        // Overwrites, never appends
        db.set_item("quotes", "[1]").unwrap();
        assert_eq!(db.get_item("quotes").unwrap(), Some("[1]".to_string()));
    }

    #[test]
    fn test_reopen_keeps_values() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        {
            let mut db = Database::open_at(&db_path).unwrap();
            db.set_item("selectedCategory", "Motivation").unwrap();
        }

        let db = Database::open_at(&db_path).unwrap();
        assert_eq!(
            db.get_item("selectedCategory").unwrap(),
            Some("Motivation".to_string())
        );
    }
}
