use anyhow::{Context, Result};
use rusqlite::Connection;

const LEDGER_STATE: &str = "CREATE TABLE IF NOT EXISTS ledger_state (
    key TEXT PRIMARY KEY,
    value BLOB NOT NULL
)";

/// Create the `ledger_state` table if it does not exist yet. Existing rows are
/// left untouched.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(LEDGER_STATE)
        .context("Failed to create ledger_state table")?;
    tracing::debug!("ledger_state schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_count(conn: &Connection) -> i32 {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='ledger_state'",
            [],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn creates_ledger_state_on_fresh_db() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        assert_eq!(table_count(&conn), 1);
    }

    #[test]
    fn rerunning_keeps_existing_rows() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO ledger_state (key, value) VALUES ('test', x'73656564')",
            [],
        )
        .unwrap();

        ensure_schema(&conn).unwrap();

        let rows: i32 = conn
            .query_row("SELECT COUNT(*) FROM ledger_state", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
        assert_eq!(table_count(&conn), 1);
    }
}
