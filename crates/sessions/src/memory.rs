//! In-process session storage. The default for single-instance deployments;
//! nothing survives a restart.

use {async_trait::async_trait, casita_dialog::Session, dashmap::DashMap};

use crate::{error::Result, store::SessionStore};

#[derive(Default)]
pub struct MemorySessionStore {
    sessions: DashMap<String, Session>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, sender_id: &str) -> Result<Option<Session>> {
        Ok(self.sessions.get(sender_id).map(|entry| entry.clone()))
    }

    async fn put(&self, sender_id: &str, session: &Session) -> Result<()> {
        self.sessions.insert(sender_id.to_string(), session.clone());
        Ok(())
    }

    async fn delete(&self, sender_id: &str) -> Result<()> {
        self.sessions.remove(sender_id);
        Ok(())
    }

    async fn list_senders(&self) -> Result<Vec<String>> {
        Ok(self.sessions.iter().map(|entry| entry.key().clone()).collect())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.sessions.len())
    }
}
