//! Content providers for the dialog engine.
//!
//! [`StaticContent`] serves canned jokes and info texts with no I/O, and
//! [`LlmContent`] asks an OpenAI-compatible completion endpoint instead.
//! Both implement [`casita_dialog::ContentProvider`].

pub mod error;
pub mod llm;
pub mod static_provider;

pub use {
    error::{Error, Result},
    llm::{LlmContent, LlmOptions},
    static_provider::StaticContent,
};
