use serde::{Deserialize, Serialize};

/// One inbound message as handed from the transport to the turn engine.
///
/// `sender_id` is the opaque conversation key (phone number or channel
/// handle); `body` is the raw text, possibly empty for media-only messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    pub sender_id: String,
    pub body: String,
    /// Provider-side message id, when the transport supplies one. Logged,
    /// never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_sid: Option<String>,
}

impl InboundMessage {
    pub fn new(sender_id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
            body: body.into(),
            message_sid: None,
        }
    }

    #[must_use]
    pub fn with_message_sid(mut self, sid: impl Into<String>) -> Self {
        self.message_sid = Some(sid.into());
        self
    }
}
