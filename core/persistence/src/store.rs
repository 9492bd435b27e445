//! FILENAME: core/persistence/src/store.rs
//! PURPOSE: SQLite-backed record store for ticket entries.
//! CONTEXT: The store is an explicit handle owned by whoever needs it; there
//! is no process-wide connection. Only three mutations exist: insert one,
//! read all, delete all.

use std::path::Path;

use engine::{NewTicket, TicketEntry};
use rusqlite::{params, Connection};

use crate::PersistenceError;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS tickets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        ticket_number TEXT NOT NULL,
        item_type TEXT NOT NULL,
        quantity INTEGER NOT NULL
    );
";

/// Handle to the ticket table.
#[derive(Debug)]
pub struct TicketStore {
    conn: Connection,
}

impl TicketStore {
    /// Opens (or creates) the database file at `path` and ensures the schema.
    pub fn open(path: &Path) -> Result<Self, PersistenceError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        log::debug!(target: "STORE", "opened {}", path.display());
        Self::with_connection(conn)
    }

    /// In-memory store with the same schema. Contents vanish on drop.
    pub fn open_in_memory() -> Result<Self, PersistenceError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, PersistenceError> {
        conn.execute_batch(SCHEMA)?;
        Ok(TicketStore { conn })
    }

    /// Inserts a validated ticket and returns the id the database assigned.
    pub fn insert(&self, ticket: &NewTicket) -> Result<i64, PersistenceError> {
        self.conn.execute(
            "INSERT INTO tickets (ticket_number, item_type, quantity) VALUES (?1, ?2, ?3)",
            params![ticket.ticket_number, ticket.item_type, ticket.quantity],
        )?;
        let id = self.conn.last_insert_rowid();
        log::debug!(target: "STORE", "inserted id={} ticket={}", id, ticket.ticket_number);
        Ok(id)
    }

    /// Every stored entry, oldest first.
    pub fn fetch_all(&self) -> Result<Vec<TicketEntry>, PersistenceError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, ticket_number, item_type, quantity FROM tickets ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let ticket_number: String = row.get(1)?;
            let item_type: String = row.get(2)?;
            let quantity: i64 = row.get(3)?;
            Ok((id, ticket_number, item_type, quantity))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, ticket_number, item_type, quantity) = row?;
            let quantity = u32::try_from(quantity)
                .ok()
                .filter(|q| *q >= 1)
                .ok_or_else(|| PersistenceError::InvalidRecord {
                    id,
                    reason: format!("quantity {} is not a positive integer", quantity),
                })?;
            entries.push(TicketEntry {
                id,
                ticket_number,
                item_type,
                quantity,
            });
        }
        Ok(entries)
    }

    /// Removes every entry. Returns how many rows were deleted.
    pub fn delete_all(&self) -> Result<usize, PersistenceError> {
        let removed = self.conn.execute("DELETE FROM tickets", [])?;
        log::debug!(target: "STORE", "deleted {} rows", removed);
        Ok(removed)
    }

    pub fn count(&self) -> Result<usize, PersistenceError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM tickets", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn ticket(number: &str, item_type: &str, quantity: u32) -> NewTicket {
        NewTicket {
            ticket_number: number.to_string(),
            item_type: item_type.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_insert_and_fetch_in_order() {
        let store = TicketStore::open_in_memory().unwrap();
        let first = store.insert(&ticket("SC-1", "Mouse Dell", 1)).unwrap();
        let second = store.insert(&ticket("SC-2", "Cabo HDMI", 3)).unwrap();
        assert!(second > first);

        let entries = store.fetch_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, first);
        assert_eq!(entries[0].pair(), ("SC-1", "Mouse Dell"));
        assert_eq!(entries[1].quantity, 3);
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_delete_all() {
        let store = TicketStore::open_in_memory().unwrap();
        store.insert(&ticket("SC-1", "Mouse Dell", 1)).unwrap();
        store.insert(&ticket("SC-2", "Mouse Dell", 1)).unwrap();

        assert_eq!(store.delete_all().unwrap(), 2);
        assert!(store.fetch_all().unwrap().is_empty());
        assert_eq!(store.delete_all().unwrap(), 0);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("chamados.db");
        {
            let store = TicketStore::open(&path).unwrap();
            store.insert(&ticket("SC-10", "Headset Jabra", 2)).unwrap();
        }
        let store = TicketStore::open(&path).unwrap();
        let entries = store.fetch_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].ticket_number, "SC-10");
        assert_eq!(entries[0].quantity, 2);
    }

    #[test]
    fn test_accented_text_round_trips() {
        let store = TicketStore::open_in_memory().unwrap();
        store.insert(&ticket("SC-ç1", "Cabo Elétrico", 1)).unwrap();
        let entries = store.fetch_all().unwrap();
        assert_eq!(entries[0].pair(), ("SC-ç1", "Cabo Elétrico"));
    }

    #[test]
    fn test_bad_quantity_in_db_is_reported() {
        let store = TicketStore::open_in_memory().unwrap();
        store
            .conn
            .execute(
                "INSERT INTO tickets (ticket_number, item_type, quantity) VALUES ('SC-1', 'Cabo HDMI', 0)",
                [],
            )
            .unwrap();
        match store.fetch_all() {
            Err(PersistenceError::InvalidRecord { reason, .. }) => {
                assert!(reason.contains("quantity 0"));
            }
            other => panic!("expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_open_fails_on_directory_path() {
        let dir = tempdir().unwrap();
        assert!(TicketStore::open(dir.path()).is_err());
    }
}
