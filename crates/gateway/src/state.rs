use std::sync::Arc;

use casita_twilio::SignatureValidator;

use crate::engine::TurnEngine;

/// Shared state threaded through the webhook handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<TurnEngine>,
    /// Present when signature verification is configured; `None` accepts
    /// every request.
    pub validator: Option<Arc<SignatureValidator>>,
    pub version: &'static str,
}

impl AppState {
    pub fn new(engine: TurnEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            validator: None,
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    #[must_use]
    pub fn with_validator(mut self, validator: SignatureValidator) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }
}
