//! Completion-backed content via an OpenAI-compatible `chat/completions`
//! endpoint. Topic prompts are short; replies are trimmed to the first
//! choice's message content.

use std::time::Duration;

use {
    async_trait::async_trait,
    casita_dialog::{ContentProvider, ProviderError, ProviderResult, Topic},
    secrecy::{ExposeSecret, Secret},
    serde::{Deserialize, Serialize},
    tracing::{debug, warn},
};

use crate::error::Result;

const SYSTEM_PROMPT: &str = "You reply on behalf of a real estate messaging bot. Answer with \
     one or two short sentences of plain text, no markdown.";

const MAX_REPLY_TOKENS: u32 = 160;

#[derive(Debug, Clone)]
pub struct LlmOptions {
    pub api_base: String,
    pub api_key: Secret<String>,
    pub model: String,
    pub timeout: Duration,
}

pub struct LlmContent {
    client: reqwest::Client,
    api_base: String,
    api_key: Secret<String>,
    model: String,
}

impl LlmContent {
    pub fn new(options: LlmOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()?;
        Ok(Self {
            client,
            api_base: options.api_base,
            api_key: options.api_key,
            model: options.model,
        })
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

fn topic_prompt(topic: Topic) -> &'static str {
    match topic {
        Topic::Joke => "Tell one short, family-friendly real estate joke.",
        Topic::MortgageInfo => {
            "Give a brief overview of mortgage and home loan options, then ask for the \
             customer's budget."
        },
        Topic::RealEstateInfo => {
            "Briefly explain that property prices vary by location, size, and amenities, then \
             ask which location the customer is interested in."
        },
        Topic::Goodbye => "Say a short, warm goodbye to a customer leaving the chat.",
    }
}

fn request_error(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Failed(error.to_string())
    }
}

#[async_trait]
impl ContentProvider for LlmContent {
    async fn produce(&self, topic: Topic) -> ProviderResult<String> {
        let url = format!("{}/chat/completions", self.api_base.trim_end_matches('/'));
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: topic_prompt(topic),
                },
            ],
            max_tokens: MAX_REPLY_TOKENS,
        };

        debug!(?topic, url, "requesting completion");
        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        let body = response.text().await.map_err(request_error)?;
        if !status.is_success() {
            warn!(%status, "completion endpoint returned an error");
            return Err(ProviderError::Failed(format!("{status}: {body}")));
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|error| ProviderError::Failed(format!("undecodable completion: {error}")))?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| ProviderError::Failed("completion had no content".to_string()))
    }
}
