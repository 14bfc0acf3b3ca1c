//! Durable key-value medium on top of a single SQLite table.

use super::medium::StorageMedium;
use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

pub struct SqliteMedium {
    conn: Connection,
}

impl SqliteMedium {
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Self::init(&conn)?;
        Ok(Self { conn })
    }

    /// In-memory database, used by tests.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(&conn)?;
        Ok(Self { conn })
    }

    fn init(conn: &Connection) -> AppResult<()> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS storage (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }
}

impl StorageMedium for SqliteMedium {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM storage WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO storage (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.conn
            .execute("DELETE FROM storage WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_semantics() {
        let mut m = SqliteMedium::open_in_memory().unwrap();
        assert_eq!(m.get("workouts").unwrap(), None);

        m.put("workouts", "[]").unwrap();
        m.put("workouts", "[1]").unwrap();
        assert_eq!(m.get("workouts").unwrap().as_deref(), Some("[1]"));

        m.remove("workouts").unwrap();
        m.remove("workouts").unwrap();
        assert_eq!(m.get("workouts").unwrap(), None);
    }

    #[test]
    fn keys_are_independent() {
        let mut m = SqliteMedium::open_in_memory().unwrap();
        m.put("a", "1").unwrap();
        m.put("b", "2").unwrap();
        m.remove("a").unwrap();
        assert_eq!(m.get("b").unwrap().as_deref(), Some("2"));
    }
}
