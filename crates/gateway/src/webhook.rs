//! The inbound webhook: signature gate, form decoding, one engine turn,
//! TwiML out.

use {
    axum::{
        body::Bytes,
        extract::State,
        http::{HeaderMap, StatusCode, header},
        response::{IntoResponse, Json, Response},
    },
    casita_twilio::{SIGNATURE_HEADER, inbound_from_form, message_response, parse_form},
    tracing::{error, warn},
};

use crate::state::AppState;

/// Reply when the session store fails mid-turn. The inbound message was not
/// processed; asking the sender to resend keeps it from being silently lost.
const RETRY_LATER: &str =
    "We hit a snag saving your conversation. Please send that message again in a moment.";

pub async fn webhook_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let params = parse_form(&body);

    if let Some(validator) = &state.validator {
        let signature = headers
            .get(SIGNATURE_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        if !validator.validate(&params, signature) {
            warn!("rejecting webhook with a missing or invalid signature");
            return StatusCode::FORBIDDEN.into_response();
        }
    }

    let message = match inbound_from_form(&params) {
        Ok(message) => message,
        Err(error) => {
            warn!(%error, "rejecting malformed webhook form");
            return (StatusCode::BAD_REQUEST, error.to_string()).into_response();
        },
    };

    match state.engine.run_turn(&message).await {
        Ok(effects) => twiml(&effects.text, effects.media.as_deref()),
        Err(error) => {
            error!(sender_id = %message.sender_id, %error, "turn failed, asking sender to retry");
            twiml(RETRY_LATER, None)
        },
    }
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let (status, sessions) = match state.engine.store().count().await {
        Ok(count) => ("ok", count),
        Err(error) => {
            warn!(%error, "session store failed the health count");
            ("degraded", 0)
        },
    };
    Json(serde_json::json!({
        "status": status,
        "version": state.version,
        "sessions": sessions,
    }))
}

fn twiml(text: &str, media: Option<&str>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/xml")],
        message_response(text, media),
    )
        .into_response()
}
