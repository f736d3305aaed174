//! Collaborator traits the flow calls out to. Implementations live in
//! `casita-content` and `casita-listings`; tests use in-crate fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What kind of text the flow wants from a content provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Joke,
    MortgageInfo,
    RealEstateInfo,
    Goodbye,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider timed out")]
    Timeout,
    #[error("provider failed: {0}")]
    Failed(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Source of conversational text. The flow never cares whether the words
/// come from a static table or a model behind an HTTP API.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn produce(&self, topic: Topic) -> ProviderResult<String>;
}

/// One property on offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub price: u64,
}

/// Search over the property inventory.
#[async_trait]
pub trait ListingQuery: Send + Sync {
    /// Listings whose location contains `location` (case-insensitive) and
    /// whose price is at most `max_price`.
    async fn query(&self, location: &str, max_price: u64) -> ProviderResult<Vec<Listing>>;
}
