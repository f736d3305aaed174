//! Canned content. No network, never fails; the default provider.

use {
    async_trait::async_trait,
    casita_dialog::{ContentProvider, ProviderResult, Topic},
    rand::Rng,
};

const JOKES: [&str; 3] = [
    "Why do real estate agents always carry a compass? Because they need to find the right \
     direction for your dream home!",
    "What do you call a real estate agent who can play the piano? A property note-ary!",
    "Why was the real estate agent good at poker? Because they knew when to hold \u{2018}em and \
     when to fold \u{2018}em in negotiations!",
];

const MORTGAGE_INFO: &str = "Need help with mortgage options? We can connect you with our \
     financial advisors. What is your budget?";

const REAL_ESTATE_INFO: &str = "Prices vary by location, size, and amenities. We operate in \
     multiple areas. Can you specify which location you are interested in?";

const GOODBYE: &str = "Goodbye! Feel free to reach out anytime for real estate assistance.";

/// Fixed informational texts plus a small joke rotation.
#[derive(Default)]
pub struct StaticContent;

impl StaticContent {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentProvider for StaticContent {
    async fn produce(&self, topic: Topic) -> ProviderResult<String> {
        let text = match topic {
            Topic::Joke => JOKES[rand::rng().random_range(0..JOKES.len())],
            Topic::MortgageInfo => MORTGAGE_INFO,
            Topic::RealEstateInfo => REAL_ESTATE_INFO,
            Topic::Goodbye => GOODBYE,
        };
        Ok(text.to_string())
    }
}
