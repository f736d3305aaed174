//! Session storage and turn serialization.
//!
//! One conversation session per sender id, behind the [`SessionStore`]
//! trait. The in-memory store is the default; the SQLite store survives
//! restarts. [`TurnGate`] keeps turns for one sender from interleaving.

pub mod error;
pub mod gate;
pub mod memory;
pub mod sqlite;
pub mod store;

pub use {
    error::{Error, Result},
    gate::TurnGate,
    memory::MemorySessionStore,
    sqlite::SqliteSessionStore,
    store::SessionStore,
};
