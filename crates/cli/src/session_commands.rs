use {anyhow::Result, clap::Subcommand};

use {
    casita_config::{CasitaConfig, SessionBackend},
    casita_sessions::{SessionStore, SqliteSessionStore},
};

#[derive(Subcommand)]
pub enum SessionAction {
    /// List senders with a stored conversation.
    List,
    /// Delete one sender's stored conversation.
    Clear { sender: String },
}

pub async fn handle_sessions(action: SessionAction) -> Result<()> {
    let config = casita_config::discover_and_load();
    let store = open_store(&config).await?;

    match action {
        SessionAction::List => {
            let senders = store.list_senders().await?;
            if senders.is_empty() {
                println!("No stored sessions.");
                return Ok(());
            }
            for sender in senders {
                match store.get(&sender).await? {
                    Some(session) => {
                        let sub = session
                            .sub_state
                            .map(|s| format!(" [{s:?}]"))
                            .unwrap_or_default();
                        println!("  {sender} — {:?}{sub}", session.state);
                    },
                    None => println!("  {sender}"),
                }
            }
        },
        SessionAction::Clear { sender } => {
            store.delete(&sender).await?;
            println!("Cleared session for {sender}.");
        },
    }

    Ok(())
}

async fn open_store(config: &CasitaConfig) -> Result<SqliteSessionStore> {
    match config.sessions.backend {
        SessionBackend::Memory => anyhow::bail!(
            "sessions.backend is \"memory\"; sessions exist only inside a running gateway. \
             Switch to the sqlite backend to inspect them here."
        ),
        SessionBackend::Sqlite => {
            let path = config.sessions.resolved_sqlite_path();
            Ok(SqliteSessionStore::open(&path).await?)
        },
    }
}
