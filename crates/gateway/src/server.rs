//! Server assembly: build the axum app from config and serve it.

use std::sync::Arc;

use {
    axum::{
        Router,
        routing::{get, post},
    },
    casita_config::{CasitaConfig, ContentProviderKind, SessionBackend, TwilioConfig},
    casita_content::{LlmContent, LlmOptions, StaticContent},
    casita_dialog::{ContentProvider, Flow, FlowOptions, ListingQuery},
    casita_listings::ListingCatalog,
    casita_sessions::{MemorySessionStore, SessionStore, SqliteSessionStore},
    casita_twilio::SignatureValidator,
    secrecy::Secret,
    tower_http::trace::TraceLayer,
    tracing::info,
};

use crate::{
    engine::TurnEngine,
    state::AppState,
    webhook::{health_handler, webhook_handler},
};

/// Build the webhook router (shared between production startup and tests).
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/webhook", post(webhook_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Assemble the full application state from config.
pub async fn build_state(config: &CasitaConfig) -> anyhow::Result<AppState> {
    let content: Arc<dyn ContentProvider> = match config.content.provider {
        ContentProviderKind::Static => Arc::new(StaticContent::new()),
        ContentProviderKind::Llm => {
            let llm = &config.content.llm;
            // Validation already warned about a missing key; an empty one
            // keeps startup working and fails per-call instead.
            let api_key = llm
                .api_key
                .clone()
                .unwrap_or_else(|| Secret::new(String::new()));
            Arc::new(LlmContent::new(LlmOptions {
                api_base: llm.api_base.clone(),
                api_key,
                model: llm.model.clone(),
                timeout: llm.timeout(),
            })?)
        },
    };

    let listings: Arc<dyn ListingQuery> = if config.listings.entries.is_empty() {
        Arc::new(ListingCatalog::default())
    } else {
        Arc::new(ListingCatalog::new(config.listings.entries.clone()))
    };

    let flow = Flow::new(
        FlowOptions {
            menu: config.dialog.menu(),
            property_flow: config.dialog.property_flow,
            brochure_url: config.dialog.brochure_url.clone(),
        },
        content,
        listings,
    );

    let store: Arc<dyn SessionStore> = match config.sessions.backend {
        SessionBackend::Memory => Arc::new(MemorySessionStore::new()),
        SessionBackend::Sqlite => {
            let path = config.sessions.resolved_sqlite_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).ok();
            }
            Arc::new(SqliteSessionStore::open(&path).await?)
        },
    };

    let mut state = AppState::new(TurnEngine::new(flow, store));
    if let Some(validator) = signature_validator(&config.twilio) {
        state = state.with_validator(validator);
    }
    Ok(state)
}

fn signature_validator(twilio: &TwilioConfig) -> Option<SignatureValidator> {
    if !twilio.validate_signatures {
        return None;
    }
    let token = twilio.auth_token.clone()?;
    let public_url = twilio.public_webhook_url.clone()?;
    Some(SignatureValidator::new(token, public_url))
}

/// Start the webhook server and serve until shutdown.
pub async fn start_gateway(config: CasitaConfig) -> anyhow::Result<()> {
    let config_path = casita_config::find_or_default_config_path();
    casita_config::log_diagnostics(&casita_config::validate(&config, Some(config_path.clone())));

    let state = build_state(&config).await?;
    let signatures = state.validator.is_some();
    let version = state.version;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(config.server.listen_addr()).await?;
    let addr = listener.local_addr()?;

    let backend = match config.sessions.backend {
        SessionBackend::Memory => "memory",
        SessionBackend::Sqlite => "sqlite",
    };
    let provider = match config.content.provider {
        ContentProviderKind::Static => "static",
        ContentProviderKind::Llm => "llm",
    };

    // Startup banner.
    let lines = vec![
        format!("casita gateway v{version}"),
        format!("listening on http://{addr}"),
        format!("config: {}", config_path.display()),
        format!("sessions: {backend} backend"),
        format!("content: {provider} provider"),
        format!(
            "signatures: {}",
            if signatures { "verified" } else { "not verified" }
        ),
    ];
    let width = lines.iter().map(|l| l.len()).max().unwrap_or(0) + 4;
    info!("┌{}┐", "─".repeat(width));
    for line in &lines {
        info!("│  {:<w$}│", line, w = width - 2);
    }
    info!("└{}┘", "─".repeat(width));

    axum::serve(listener, app).await?;
    Ok(())
}
