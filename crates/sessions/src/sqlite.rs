//! SQLite-backed session storage. One row per sender with the session as a
//! JSON blob, so changes to the session shape need no schema migration.

use std::path::Path;

use {async_trait::async_trait, casita_dialog::Session, sqlx::SqlitePool, tracing::warn};

use crate::{
    error::{Context, Result},
    store::SessionStore,
};

pub struct SqliteSessionStore {
    pool: SqlitePool,
}

impl SqliteSessionStore {
    /// Open or create the database file at `path` and ensure the schema
    /// exists. The parent directory must already exist.
    pub async fn open(path: &Path) -> Result<Self> {
        let db_url = format!("sqlite:{}?mode=rwc", path.display());
        let pool = SqlitePool::connect(&db_url)
            .await
            .with_context(|| format!("open session database at {}", path.display()))?;
        Self::init(&pool).await?;
        Ok(Self { pool })
    }

    /// Use an existing pool. [`Self::init`] must have been run on it.
    pub fn with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn init(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS sessions (
                sender_id  TEXT    PRIMARY KEY,
                session    TEXT    NOT NULL,
                updated_at INTEGER NOT NULL
            )"#,
        )
        .execute(pool)
        .await?;
        Ok(())
    }
}

fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn get(&self, sender_id: &str) -> Result<Option<Session>> {
        let blob =
            sqlx::query_scalar::<_, String>("SELECT session FROM sessions WHERE sender_id = ?")
                .bind(sender_id)
                .fetch_optional(&self.pool)
                .await?;
        let Some(blob) = blob else {
            return Ok(None);
        };
        match serde_json::from_str(&blob) {
            Ok(session) => Ok(Some(session)),
            Err(error) => {
                // An undecodable row starts the conversation over rather
                // than failing every turn for that sender.
                warn!(sender_id, %error, "discarding corrupt session row");
                Ok(None)
            },
        }
    }

    async fn put(&self, sender_id: &str, session: &Session) -> Result<()> {
        let blob = serde_json::to_string(session)?;
        sqlx::query(
            "INSERT INTO sessions (sender_id, session, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(sender_id) DO UPDATE SET
               session = excluded.session,
               updated_at = excluded.updated_at",
        )
        .bind(sender_id)
        .bind(&blob)
        .bind(unix_now())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, sender_id: &str) -> Result<()> {
        sqlx::query("DELETE FROM sessions WHERE sender_id = ?")
            .bind(sender_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_senders(&self) -> Result<Vec<String>> {
        let senders = sqlx::query_scalar::<_, String>(
            "SELECT sender_id FROM sessions ORDER BY updated_at DESC, sender_id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(senders)
    }

    async fn count(&self) -> Result<usize> {
        let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sessions")
            .fetch_one(&self.pool)
            .await?;
        Ok(n as usize)
    }
}
