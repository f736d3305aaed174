//! One inbound message, one turn: gate, load, step, persist.

use std::sync::Arc;

use {
    casita_common::types::InboundMessage,
    casita_dialog::{Flow, NormalizedInput, ReplyEffects},
    casita_sessions::{Result, SessionStore, TurnGate},
    tracing::info,
};

/// Runs complete read-step-write turns against the session store, one at a
/// time per sender. Different senders proceed in parallel.
pub struct TurnEngine {
    flow: Flow,
    store: Arc<dyn SessionStore>,
    gate: TurnGate,
}

impl TurnEngine {
    pub fn new(flow: Flow, store: Arc<dyn SessionStore>) -> Self {
        Self {
            flow,
            store,
            gate: TurnGate::new(),
        }
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Run one turn. A store error aborts before anything is written, so the
    /// stored session is never half-updated; the transport decides what the
    /// sender hears in that case.
    pub async fn run_turn(&self, message: &InboundMessage) -> Result<ReplyEffects> {
        let _guard = self.gate.acquire(&message.sender_id).await;

        let mut session = self
            .store
            .get(&message.sender_id)
            .await?
            .unwrap_or_default();
        let state_before = session.state;

        let input = NormalizedInput::parse(&message.body);
        let effects = self.flow.step(&mut session, &input).await;

        if effects.terminate {
            self.store.delete(&message.sender_id).await?;
        } else {
            self.store.put(&message.sender_id, &session).await?;
        }

        info!(
            sender_id = %message.sender_id,
            message_sid = message.message_sid.as_deref().unwrap_or("-"),
            state_before = ?state_before,
            state_after = ?session.state,
            terminate = effects.terminate,
            "turn complete"
        );
        Ok(effects)
    }
}
