//! Twilio-flavored transport plumbing: inbound form decoding, webhook
//! signature verification, TwiML rendering, and the outbound Messages API
//! client. The gateway wires these around the dialog engine; nothing here
//! knows about conversation state.

pub mod client;
pub mod error;
pub mod message;
pub mod signature;
pub mod twiml;

pub use {
    client::TwilioClient,
    error::{Error, Result},
    message::{inbound_from_form, parse_form},
    signature::{SIGNATURE_HEADER, SignatureValidator},
    twiml::message_response,
};
