//! Inbound text normalization. Every message is folded into a [`Token`]
//! before the flow sees it, so state handlers never re-tokenize.

use serde::{Deserialize, Serialize};

/// Global keywords recognized in any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Keyword {
    Menu,
    Hello,
    Bye,
    ClearChat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Message was entirely ASCII digits.
    Number(u64),
    Keyword(Keyword),
    /// Anything else, lowercased.
    Text(String),
}

/// A parsed inbound message: the classified token plus the trimmed
/// original-case text for states that want it verbatim (location capture).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInput {
    pub token: Token,
    pub raw: String,
}

impl NormalizedInput {
    pub fn parse(body: &str) -> Self {
        let raw = body.trim().to_string();
        let lower = raw.to_lowercase();
        let token = match lower.as_str() {
            "menu" => Token::Keyword(Keyword::Menu),
            "hello" | "hi" => Token::Keyword(Keyword::Hello),
            "bye" | "goodbye" => Token::Keyword(Keyword::Bye),
            "clear chat" => Token::Keyword(Keyword::ClearChat),
            _ => {
                if !lower.is_empty() && lower.bytes().all(|b| b.is_ascii_digit()) {
                    match lower.parse::<u64>() {
                        Ok(n) => Token::Number(n),
                        Err(_) => Token::Text(lower),
                    }
                } else {
                    Token::Text(lower)
                }
            },
        };
        Self { token, raw }
    }
}

/// Lenient money parse for budget capture: strips `$`, commas and spaces,
/// then requires the remainder to be a plain integer.
pub fn parse_amount(raw: &str) -> Option<u64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();
    if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    cleaned.parse().ok()
}
