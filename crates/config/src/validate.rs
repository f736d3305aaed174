//! Configuration validation.
//!
//! A lightweight pass over the parsed config that surfaces likely
//! misconfigurations as diagnostics. Nothing here stops startup; the gateway
//! logs what it finds and keeps serving.

use std::path::PathBuf;

use casita_dialog::PropertyFlowMode;

use crate::schema::{CasitaConfig, ContentProviderKind};

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A single validation diagnostic.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Category: "dialog", "url", "security", "content"
    pub category: &'static str,
    /// Dotted path, e.g. "twilio.auth_token"
    pub path: String,
    pub message: String,
}

/// Result of validating a configuration.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
    pub config_path: Option<PathBuf>,
}

impl ValidationResult {
    /// Returns `true` if any diagnostic is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Count diagnostics by severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

/// Run all checks against a parsed config.
#[must_use]
pub fn validate(config: &CasitaConfig, config_path: Option<PathBuf>) -> ValidationResult {
    let mut diagnostics = Vec::new();

    if config.dialog.menu.is_empty() {
        diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            category: "dialog",
            path: "dialog.menu".into(),
            message: "menu has no entries; digit selections will all fall through".into(),
        });
    }

    if config.dialog.property_flow == PropertyFlowMode::Brochure
        && config.dialog.brochure_url.is_none()
    {
        diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            category: "dialog",
            path: "dialog.brochure_url".into(),
            message: "brochure flow is active but no brochure_url is set; the brochure reply \
                      will carry no media"
                .into(),
        });
    }

    check_url(
        &mut diagnostics,
        "dialog.brochure_url",
        config.dialog.brochure_url.as_deref(),
    );
    check_url(
        &mut diagnostics,
        "twilio.public_webhook_url",
        config.twilio.public_webhook_url.as_deref(),
    );
    check_url(
        &mut diagnostics,
        "content.llm.api_base",
        Some(&config.content.llm.api_base),
    );

    check_signature_setup(&mut diagnostics, config);

    if config.content.provider == ContentProviderKind::Llm && config.content.llm.api_key.is_none()
    {
        diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            category: "content",
            path: "content.llm.api_key".into(),
            message: "llm provider selected but no api key is set; every call will fail and \
                      replies will fall back to the apology text"
                .into(),
        });
    }

    ValidationResult {
        diagnostics,
        config_path,
    }
}

fn check_url(diagnostics: &mut Vec<Diagnostic>, path: &str, value: Option<&str>) {
    let Some(value) = value else { return };
    if url::Url::parse(value).is_err() {
        diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            category: "url",
            path: path.to_string(),
            message: format!("{value:?} is not a valid URL"),
        });
    }
}

fn check_signature_setup(diagnostics: &mut Vec<Diagnostic>, config: &CasitaConfig) {
    let twilio = &config.twilio;
    if !twilio.validate_signatures {
        diagnostics.push(Diagnostic {
            severity: Severity::Info,
            category: "security",
            path: "twilio.validate_signatures".into(),
            message: "webhook signature validation is disabled".into(),
        });
        return;
    }
    match (&twilio.auth_token, &twilio.public_webhook_url) {
        (Some(_), None) => diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            category: "security",
            path: "twilio.public_webhook_url".into(),
            message: "auth token is set but public_webhook_url is not; signatures cannot be \
                      checked and webhooks are accepted unverified"
                .into(),
        }),
        (None, Some(_)) => diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            category: "security",
            path: "twilio.auth_token".into(),
            message: "public_webhook_url is set but auth_token is not; signatures cannot be \
                      checked and webhooks are accepted unverified"
                .into(),
        }),
        (None, None) => diagnostics.push(Diagnostic {
            severity: Severity::Info,
            category: "security",
            path: "twilio".into(),
            message: "signature validation inactive; set twilio.auth_token and \
                      twilio.public_webhook_url to enable it"
                .into(),
        }),
        (Some(_), Some(_)) => {},
    }
}

/// Emit diagnostics through `tracing` at their severity.
pub fn log_diagnostics(result: &ValidationResult) {
    for d in &result.diagnostics {
        match d.severity {
            Severity::Error => {
                tracing::error!(path = %d.path, category = d.category, "{}", d.message);
            },
            Severity::Warning => {
                tracing::warn!(path = %d.path, category = d.category, "{}", d.message);
            },
            Severity::Info => {
                tracing::info!(path = %d.path, category = d.category, "{}", d.message);
            },
        }
    }
}
