//! Outbound Messages API client.

use {
    secrecy::{ExposeSecret, Secret},
    serde::{Deserialize, Serialize},
    tracing::{debug, info},
};

use crate::error::{Error, Result};

const DEFAULT_API_BASE: &str = "https://api.twilio.com";

#[derive(Debug, Clone)]
pub struct TwilioClient {
    client: reqwest::Client,
    api_base: String,
    account_sid: String,
    auth_token: Secret<String>,
    from_number: String,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendMessagePayload<'a> {
    from: &'a str,
    to: &'a str,
    body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    media_url: Option<&'a str>,
}

#[derive(Deserialize)]
struct SendMessageResponse {
    sid: String,
}

impl TwilioClient {
    #[must_use]
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: Secret<String>,
        from_number: impl Into<String>,
    ) -> Self {
        Self::with_api_base(account_sid, auth_token, from_number, DEFAULT_API_BASE)
    }

    /// Point the client at a different API host. Tests use this to talk to a
    /// local mock server.
    #[must_use]
    pub fn with_api_base(
        account_sid: impl Into<String>,
        auth_token: Secret<String>,
        from_number: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
            account_sid: account_sid.into(),
            auth_token,
            from_number: from_number.into(),
        }
    }

    /// Send one message, returning the provider-assigned message SID.
    pub async fn send_message(
        &self,
        to: &str,
        body: &str,
        media_url: Option<&str>,
    ) -> Result<String> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_base.trim_end_matches('/'),
            self.account_sid,
        );
        let payload = SendMessagePayload {
            from: &self.from_number,
            to,
            body,
            media_url,
        };

        debug!(to, "sending message");
        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(self.auth_token.expose_secret()))
            .form(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::api(status.as_u16(), detail));
        }

        let sent: SendMessageResponse = response.json().await?;
        info!(sid = %sent.sid, to, "message accepted");
        Ok(sent.sid)
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use super::*;

    fn client(api_base: String) -> TwilioClient {
        TwilioClient::with_api_base(
            "AC123",
            Secret::new("token".to_string()),
            "whatsapp:+15550001111",
            api_base,
        )
    }

    #[tokio::test]
    async fn sends_form_fields_and_returns_sid() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/2010-04-01/Accounts/AC123/Messages.json")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("From".into(), "whatsapp:+15550001111".into()),
                Matcher::UrlEncoded("To".into(), "whatsapp:+15551230000".into()),
                Matcher::UrlEncoded("Body".into(), "Hello from the bot".into()),
            ]))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"sid":"SM42"}"#)
            .create_async()
            .await;

        let sid = client(server.url())
            .send_message("whatsapp:+15551230000", "Hello from the bot", None)
            .await
            .unwrap();
        assert_eq!(sid, "SM42");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn includes_media_url_when_present() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/2010-04-01/Accounts/AC123/Messages.json")
            .match_body(Matcher::UrlEncoded(
                "MediaUrl".into(),
                "https://cdn.example.com/brochure.pdf".into(),
            ))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"sid":"SM43"}"#)
            .create_async()
            .await;

        client(server.url())
            .send_message(
                "whatsapp:+15551230000",
                "Brochure attached.",
                Some("https://cdn.example.com/brochure.pdf"),
            )
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn api_rejection_surfaces_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/2010-04-01/Accounts/AC123/Messages.json")
            .with_status(401)
            .with_body("authentication failed")
            .create_async()
            .await;

        let error = client(server.url())
            .send_message("whatsapp:+15551230000", "Hello", None)
            .await
            .unwrap_err();
        assert!(matches!(error, Error::Api { status: 401, .. }));
    }
}
