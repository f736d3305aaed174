//! Config schema types (server, twilio, dialog, content, sessions, listings).
//!
//! Every section is optional in the file; `#[serde(default)]` fills in the
//! documented defaults so an empty config is a working config.

use std::{path::PathBuf, time::Duration};

use {
    casita_dialog::{Listing, Menu, MenuEntry, PropertyFlowMode, text},
    secrecy::{ExposeSecret, Secret},
    serde::{Deserialize, Serialize},
};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CasitaConfig {
    pub server: ServerConfig,
    pub twilio: TwilioConfig,
    pub dialog: DialogConfig,
    pub content: ContentConfig,
    pub sessions: SessionsConfig,
    pub listings: ListingsConfig,
}

/// Webhook server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to. Defaults to "127.0.0.1".
    pub bind: String,
    /// Port to listen on. Defaults to 8787.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".into(),
            port: 8787,
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

/// Twilio account credentials and webhook settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TwilioConfig {
    /// Account SID (`AC…`). Required for the outbound client.
    pub account_sid: Option<String>,
    /// Auth token. Signs webhooks and authenticates the REST API.
    #[serde(
        default,
        serialize_with = "serialize_option_secret",
        skip_serializing_if = "Option::is_none"
    )]
    pub auth_token: Option<Secret<String>>,
    /// Sender number for outbound messages, e.g. "whatsapp:+15550001111".
    pub from_number: Option<String>,
    /// REST API base. Defaults to "https://api.twilio.com".
    pub api_base: String,
    /// Verify the `X-Twilio-Signature` header on inbound webhooks. Defaults
    /// to true; only takes effect when `auth_token` and `public_webhook_url`
    /// are both set.
    pub validate_signatures: bool,
    /// Public URL Twilio posts to, as it appears in the console. Part of the
    /// signed payload.
    pub public_webhook_url: Option<String>,
}

impl Default for TwilioConfig {
    fn default() -> Self {
        Self {
            account_sid: None,
            auth_token: None,
            from_number: None,
            api_base: "https://api.twilio.com".into(),
            validate_signatures: true,
            public_webhook_url: None,
        }
    }
}

/// Conversation flow configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    /// What a property selection does: `brochure` offers a brochure or agent
    /// handoff, `collect` walks location and budget then searches listings.
    pub property_flow: PropertyFlowMode,
    /// Media URL attached to the brochure reply. Defaults to the hosted demo
    /// brochure, so brochure mode sends media without any configuration.
    pub brochure_url: Option<String>,
    /// Menu layout, in display order. Digits are 1-based positions.
    pub menu: Vec<MenuEntry>,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            property_flow: PropertyFlowMode::default(),
            brochure_url: Some(text::DEFAULT_BROCHURE_URL.into()),
            menu: Menu::default().entries().to_vec(),
        }
    }
}

impl DialogConfig {
    /// The configured menu as the dialog engine consumes it.
    #[must_use]
    pub fn menu(&self) -> Menu {
        Menu::new(self.menu.clone())
    }
}

/// Which content provider backs jokes, info texts, and goodbyes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentProviderKind {
    #[default]
    Static,
    Llm,
}

/// Content provider configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Provider selection. Defaults to `static`.
    pub provider: ContentProviderKind,
    pub llm: LlmConfig,
}

/// Settings for the completion-backed content provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// OpenAI-compatible API base. Defaults to "https://api.openai.com/v1".
    pub api_base: String,
    /// API key. Required when `content.provider = "llm"`.
    #[serde(
        default,
        serialize_with = "serialize_option_secret",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_key: Option<Secret<String>>,
    /// Model to use. Defaults to "gpt-4o-mini".
    pub model: String,
    /// Request timeout in seconds. Defaults to 10.
    pub timeout_seconds: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.openai.com/v1".into(),
            api_key: None,
            model: "gpt-4o-mini".into(),
            timeout_seconds: 10,
        }
    }
}

impl LlmConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Session persistence backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionBackend {
    #[default]
    Memory,
    Sqlite,
}

/// Session store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionsConfig {
    /// Backend selection. Defaults to `memory`.
    pub backend: SessionBackend,
    /// SQLite database path. Defaults to `casita.db` under the data dir.
    pub sqlite_path: Option<PathBuf>,
}

impl SessionsConfig {
    /// The SQLite path after applying the data-dir default.
    #[must_use]
    pub fn resolved_sqlite_path(&self) -> PathBuf {
        self.sqlite_path
            .clone()
            .unwrap_or_else(|| crate::loader::data_dir().join("casita.db"))
    }
}

/// Listing catalog configuration for the collect flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingsConfig {
    /// Catalog entries. Empty means the built-in demo catalog.
    pub entries: Vec<Listing>,
}

// ── Serde helpers for Secret<String> ────────────────────────────────────────

fn serialize_option_secret<S: serde::Serializer>(
    secret: &Option<Secret<String>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match secret {
        Some(s) => serializer.serialize_some(s.expose_secret()),
        None => serializer.serialize_none(),
    }
}
