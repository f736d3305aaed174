//! Webhook gateway: the axum server that wires the Twilio transport around
//! the dialog engine.
//!
//! Lifecycle:
//! 1. Load + validate config
//! 2. Assemble content provider, listings, session store, flow
//! 3. Bind and serve `POST /webhook` and `GET /health`
//!
//! Conversation logic lives in `casita-dialog`; this crate only moves
//! messages in and TwiML out.

pub mod engine;
pub mod server;
pub mod state;
pub mod webhook;

pub use {
    engine::TurnEngine,
    server::{build_app, build_state, start_gateway},
    state::AppState,
};
