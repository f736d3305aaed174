//! Inbound webhook form decoding.
//!
//! Twilio posts `application/x-www-form-urlencoded` bodies with PascalCase
//! field names. The raw pairs are kept around for signature verification, so
//! decoding happens in two steps: [`parse_form`] on the body bytes, then
//! [`inbound_from_form`] to pull out the fields the dialog engine needs.

use casita_common::types::InboundMessage;

use crate::error::{Error, Result};

/// Decode a urlencoded body into its key/value pairs, in wire order.
#[must_use]
pub fn parse_form(body: &[u8]) -> Vec<(String, String)> {
    url::form_urlencoded::parse(body).into_owned().collect()
}

/// Extract the inbound message from decoded form pairs.
///
/// `From` is required and non-empty; a missing `Body` is treated as an empty
/// message rather than an error, since media-only messages arrive without one.
pub fn inbound_from_form(pairs: &[(String, String)]) -> Result<InboundMessage> {
    let field = |name: &str| {
        pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    };

    let sender_id = field("From")
        .filter(|from| !from.is_empty())
        .ok_or(Error::MissingField("From"))?;
    let body = field("Body").unwrap_or_default();

    let mut message = InboundMessage::new(sender_id, body);
    if let Some(sid) = field("MessageSid").filter(|sid| !sid.is_empty()) {
        message = message.with_message_sid(sid);
    }
    Ok(message)
}
