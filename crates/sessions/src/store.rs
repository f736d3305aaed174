//! Storage contract for conversation sessions.

use async_trait::async_trait;
use casita_dialog::Session;

use crate::error::Result;

/// Session storage keyed by sender identifier (phone number or channel
/// handle). Durability is the implementation's concern; callers treat any
/// error as a failed turn and leave the stored session untouched.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, sender_id: &str) -> Result<Option<Session>>;

    async fn put(&self, sender_id: &str, session: &Session) -> Result<()>;

    async fn delete(&self, sender_id: &str) -> Result<()>;

    /// All sender ids with a stored session.
    async fn list_senders(&self) -> Result<Vec<String>>;

    async fn count(&self) -> Result<usize>;
}
