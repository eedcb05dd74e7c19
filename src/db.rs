use crate::config::Config;
use anyhow::Result;
use libsql::{Builder, Connection};
use std::path::Path;

const SYSTEM_MIGRATIONS: &[(&str, &str)] = &[(
    "system/000_migrations_table.sql",
    include_str!("migrations/system/000_migrations_table.sql"),
)];

/// A connected local database with all migrations applied.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub async fn new(cfg: &Config, data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(&cfg.app.database);
        Self::open(&path.to_string_lossy()).await
    }

    /// Opens (or creates) the database at `path` and brings the schema up
    /// to date. `:memory:` works and is what the tests use.
    pub async fn open(path: &str) -> Result<Self> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        conn.query("SELECT 1", ()).await?;

        for (name, sql) in SYSTEM_MIGRATIONS {
            run_migration(&conn, name, sql).await?;
        }
        for (name, sql) in crate::bookmarks::migrations() {
            run_migration(&conn, name, sql).await?;
        }

        Ok(Database { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

async fn is_migration_applied(conn: &Connection, name: &str) -> Result<bool> {
    let query = "SELECT 1 FROM _migrations WHERE name = ?";
    match conn.query(query, libsql::params![name]).await {
        Ok(mut rows) => Ok(rows.next().await?.is_some()),
        // First boot: the ledger table itself does not exist yet.
        Err(e) if e.to_string().contains("no such table") => Ok(false),
        Err(e) => Err(e.into()),
    }
}

async fn record_migration(conn: &Connection, name: &str) -> Result<()> {
    let query = r#"
        INSERT INTO _migrations (name, applied_at)
        VALUES (?, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
    "#;
    conn.execute(query, libsql::params![name]).await?;
    Ok(())
}

async fn run_migration(conn: &Connection, name: &str, sql: &str) -> Result<()> {
    if is_migration_applied(conn, name).await? {
        tracing::debug!("migration {} already applied, skipping", name);
        return Ok(());
    }

    tracing::info!("applying migration: {}", name);
    conn.execute_batch(sql)
        .await
        .map_err(|e| anyhow::anyhow!("failed to execute migration {name}: {e}"))?;

    record_migration(conn, name).await?;
    Ok(())
}
