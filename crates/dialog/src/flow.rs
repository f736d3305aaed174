//! The conversation state machine. No transport, no storage: one inbound
//! message is one call to [`Flow::step`], which mutates the session in place
//! and returns what to send back.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    input::{Keyword, NormalizedInput, Token, parse_amount},
    menu::{Menu, MenuAction},
    provider::{ContentProvider, ListingQuery, Topic},
    session::{FlowState, PREF_BUDGET, PREF_INTENT, PREF_LOCATION, Session, SubState},
    text,
};

/// What one turn wants the transport to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyEffects {
    pub text: String,
    /// Media URL to attach to the outbound message.
    pub media: Option<String>,
    /// When set, the caller deletes the session instead of persisting it.
    pub terminate: bool,
}

impl ReplyEffects {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            media: None,
            terminate: false,
        }
    }

    pub fn with_media(text: impl Into<String>, media: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            media: Some(media.into()),
            terminate: false,
        }
    }

    pub fn terminating(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            media: None,
            terminate: true,
        }
    }
}

/// How `Buy`/`Rent` selections behave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyFlowMode {
    /// One extra turn: brochure download or agent handoff.
    #[default]
    Brochure,
    /// Three extra turns: collect location and budget, then search listings.
    Collect,
}

/// Behavior knobs for a [`Flow`], normally filled from configuration.
#[derive(Debug, Clone)]
pub struct FlowOptions {
    pub menu: Menu,
    pub property_flow: PropertyFlowMode,
    pub brochure_url: Option<String>,
}

impl Default for FlowOptions {
    fn default() -> Self {
        Self {
            menu: Menu::default(),
            property_flow: PropertyFlowMode::default(),
            brochure_url: Some(text::DEFAULT_BROCHURE_URL.to_string()),
        }
    }
}

pub struct Flow {
    menu: Menu,
    mode: PropertyFlowMode,
    brochure_url: Option<String>,
    content: Arc<dyn ContentProvider>,
    listings: Arc<dyn ListingQuery>,
}

impl Flow {
    pub fn new(
        options: FlowOptions,
        content: Arc<dyn ContentProvider>,
        listings: Arc<dyn ListingQuery>,
    ) -> Self {
        Self {
            menu: options.menu,
            mode: options.property_flow,
            brochure_url: options.brochure_url,
            content,
            listings,
        }
    }

    /// Advance one conversation by one inbound message.
    ///
    /// Collaborator failures are absorbed here (fallback text, session back
    /// to the menu), so the result needs no error branch.
    pub async fn step(&self, session: &mut Session, input: &NormalizedInput) -> ReplyEffects {
        // The goodbye keyword wins over whatever flow is in progress, so the
        // user can always leave.
        if input.token == Token::Keyword(Keyword::Bye) {
            return self.goodbye().await;
        }
        debug!(state = ?session.state, sub_state = ?session.sub_state, token = ?input.token, "dispatching turn");
        match (session.state, session.sub_state) {
            (FlowState::Buy | FlowState::Rent, Some(SubState::Action)) => {
                self.action_turn(session, input)
            },
            (state @ (FlowState::Buy | FlowState::Rent), None) => {
                warn!(?state, "property state without sub-state, resetting to menu");
                session.reset_to_menu();
                self.menu_turn(session, input).await
            },
            (FlowState::Location, _) => self.location_turn(session, input),
            (FlowState::Budget, _) => self.budget_turn(session, input).await,
            (FlowState::MortgageInfo, _) => self.info_turn(session, Topic::MortgageInfo).await,
            (FlowState::RealEstateInfo, _) => self.info_turn(session, Topic::RealEstateInfo).await,
            (FlowState::Joke, _) => self.info_turn(session, Topic::Joke).await,
            (FlowState::Exit, _) => self.goodbye().await,
            (FlowState::Menu, Some(sub)) => {
                warn!(?sub, "menu state with dangling sub-state, clearing");
                session.sub_state = None;
                self.menu_turn(session, input).await
            },
            (FlowState::Menu, None) => self.menu_turn(session, input).await,
        }
    }

    async fn menu_turn(&self, session: &mut Session, input: &NormalizedInput) -> ReplyEffects {
        match &input.token {
            Token::Keyword(Keyword::Menu) => ReplyEffects::text(self.menu.render()),
            Token::Keyword(Keyword::Hello) => ReplyEffects::text(text::GREETING),
            Token::Keyword(Keyword::ClearChat) => ReplyEffects::terminating(text::CHAT_CLEARED),
            Token::Keyword(Keyword::Bye) => self.goodbye().await,
            Token::Number(n) => match self.menu.action_at(*n) {
                Some(action) => self.select(session, action).await,
                None => ReplyEffects::text(text::FALLBACK),
            },
            Token::Text(_) => ReplyEffects::text(text::FALLBACK),
        }
    }

    async fn select(&self, session: &mut Session, action: MenuAction) -> ReplyEffects {
        match action {
            MenuAction::Menu => ReplyEffects::text(self.menu.render()),
            MenuAction::Help => ReplyEffects::text(text::HELP),
            MenuAction::Buy => self.enter_property(session, FlowState::Buy),
            MenuAction::Rent => self.enter_property(session, FlowState::Rent),
            MenuAction::MortgageInfo => self.info_turn(session, Topic::MortgageInfo).await,
            MenuAction::RealEstateInfo => self.info_turn(session, Topic::RealEstateInfo).await,
            MenuAction::Joke => self.info_turn(session, Topic::Joke).await,
            MenuAction::Exit => self.goodbye().await,
        }
    }

    fn enter_property(&self, session: &mut Session, state: FlowState) -> ReplyEffects {
        match self.mode {
            PropertyFlowMode::Brochure => {
                session.state = state;
                session.sub_state = Some(SubState::Action);
                ReplyEffects::text(text::ACTION_PROMPT)
            },
            PropertyFlowMode::Collect => {
                let intent = if state == FlowState::Buy { "buy" } else { "rent" };
                session
                    .preferences
                    .insert(PREF_INTENT.to_string(), intent.to_string());
                session.state = FlowState::Location;
                session.sub_state = None;
                ReplyEffects::text(text::LOCATION_PROMPT)
            },
        }
    }

    fn action_turn(&self, session: &mut Session, input: &NormalizedInput) -> ReplyEffects {
        match input.token {
            Token::Number(1) => {
                session.reset_to_menu();
                match &self.brochure_url {
                    Some(url) => ReplyEffects::with_media(text::BROCHURE, url.clone()),
                    None => ReplyEffects::text(text::BROCHURE),
                }
            },
            Token::Number(2) => {
                session.reset_to_menu();
                ReplyEffects::text(text::AGENT_HANDOFF)
            },
            _ => ReplyEffects::text(text::INVALID_SELECTION),
        }
    }

    fn location_turn(&self, session: &mut Session, input: &NormalizedInput) -> ReplyEffects {
        if input.raw.is_empty() {
            return ReplyEffects::text(text::LOCATION_REPROMPT);
        }
        session
            .preferences
            .insert(PREF_LOCATION.to_string(), input.raw.clone());
        session.state = FlowState::Budget;
        ReplyEffects::text(text::BUDGET_PROMPT)
    }

    async fn budget_turn(&self, session: &mut Session, input: &NormalizedInput) -> ReplyEffects {
        let Some(amount) = parse_amount(&input.raw) else {
            return ReplyEffects::text(text::BUDGET_REPROMPT);
        };
        session
            .preferences
            .insert(PREF_BUDGET.to_string(), amount.to_string());
        let location = session.pref(PREF_LOCATION).unwrap_or_default().to_string();
        let reply = match self.listings.query(&location, amount).await {
            Ok(matches) if matches.is_empty() => ReplyEffects::text(text::NO_LISTINGS),
            Ok(matches) => {
                let mut lines = vec![text::LISTINGS_HEADER.to_string()];
                lines.extend(
                    matches
                        .iter()
                        .map(|l| format!("{} in {} for ${}", l.kind, l.location, l.price)),
                );
                ReplyEffects::text(lines.join("\n"))
            },
            Err(error) => {
                warn!(%error, "listing query failed");
                ReplyEffects::text(text::APOLOGY)
            },
        };
        session.reset_to_menu();
        session.preferences.clear();
        reply
    }

    async fn info_turn(&self, session: &mut Session, topic: Topic) -> ReplyEffects {
        let reply = self.produce_or(topic, text::APOLOGY).await;
        session.reset_to_menu();
        ReplyEffects::text(reply)
    }

    async fn goodbye(&self) -> ReplyEffects {
        ReplyEffects::terminating(self.produce_or(Topic::Goodbye, text::GOODBYE).await)
    }

    async fn produce_or(&self, topic: Topic, fallback: &str) -> String {
        match self.content.produce(topic).await {
            Ok(text) => text,
            Err(error) => {
                warn!(?topic, %error, "content provider failed, substituting fallback");
                fallback.to_string()
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use async_trait::async_trait;
    use rstest::rstest;

    use super::*;
    use crate::{
        menu::MenuEntry,
        provider::{Listing, ProviderError, ProviderResult},
    };

    struct CannedContent;

    #[async_trait]
    impl ContentProvider for CannedContent {
        async fn produce(&self, topic: Topic) -> ProviderResult<String> {
            Ok(match topic {
                Topic::Joke => "canned joke".to_string(),
                Topic::MortgageInfo => "canned mortgage info".to_string(),
                Topic::RealEstateInfo => "canned real estate info".to_string(),
                Topic::Goodbye => "canned goodbye".to_string(),
            })
        }
    }

    struct FailingContent;

    #[async_trait]
    impl ContentProvider for FailingContent {
        async fn produce(&self, _topic: Topic) -> ProviderResult<String> {
            Err(ProviderError::Failed("remote unreachable".to_string()))
        }
    }

    struct NoListings;

    #[async_trait]
    impl ListingQuery for NoListings {
        async fn query(&self, _location: &str, _max_price: u64) -> ProviderResult<Vec<Listing>> {
            Ok(vec![])
        }
    }

    struct FixedListings(Vec<Listing>);

    #[async_trait]
    impl ListingQuery for FixedListings {
        async fn query(&self, _location: &str, _max_price: u64) -> ProviderResult<Vec<Listing>> {
            Ok(self.0.clone())
        }
    }

    struct FailingListings;

    #[async_trait]
    impl ListingQuery for FailingListings {
        async fn query(&self, _location: &str, _max_price: u64) -> ProviderResult<Vec<Listing>> {
            Err(ProviderError::Timeout)
        }
    }

    fn flow() -> Flow {
        Flow::new(
            FlowOptions::default(),
            Arc::new(CannedContent),
            Arc::new(NoListings),
        )
    }

    fn flow_with(options: FlowOptions) -> Flow {
        Flow::new(options, Arc::new(CannedContent), Arc::new(NoListings))
    }

    async fn turn(flow: &Flow, session: &mut Session, body: &str) -> ReplyEffects {
        flow.step(session, &NormalizedInput::parse(body)).await
    }

    fn action_session(state: FlowState) -> Session {
        Session {
            state,
            sub_state: Some(SubState::Action),
            ..Session::default()
        }
    }

    #[tokio::test]
    async fn menu_keyword_renders_full_option_list() {
        let flow = flow();
        let mut s = Session::new();
        let reply = turn(&flow, &mut s, "menu").await;
        for label in [
            "1. Help",
            "2. Buy Property",
            "3. Rent Property",
            "4. Mortgage/Loan Information",
            "5. Real Estate Information",
            "6. Tell a Joke",
            "7. Exit",
        ] {
            assert!(reply.text.contains(label), "missing {label}");
        }
        assert_eq!(s.state, FlowState::Menu);
        assert!(s.sub_state.is_none());
        assert!(!reply.terminate);
    }

    #[tokio::test]
    async fn menu_is_idempotent() {
        let flow = flow();
        let mut s = Session::new();
        let first = turn(&flow, &mut s, "menu").await;
        let second = turn(&flow, &mut s, "menu").await;
        assert_eq!(first, second);
        assert_eq!(s.state, FlowState::Menu);
        assert!(s.sub_state.is_none());
    }

    #[rstest]
    #[case("hello")]
    #[case("Hi")]
    #[tokio::test]
    async fn greeting_keyword_greets(#[case] body: &str) {
        let flow = flow();
        let mut s = Session::new();
        let reply = turn(&flow, &mut s, body).await;
        assert_eq!(reply.text, text::GREETING);
        assert_eq!(s.state, FlowState::Menu);
    }

    #[rstest]
    #[case("wat")]
    #[case("")]
    #[case("0")]
    #[case("42")]
    #[tokio::test]
    async fn unrecognized_input_falls_back(#[case] body: &str) {
        let flow = flow();
        let mut s = Session::new();
        let reply = turn(&flow, &mut s, body).await;
        assert_eq!(reply.text, text::FALLBACK);
        assert_eq!(s.state, FlowState::Menu);
        assert!(s.sub_state.is_none());
    }

    #[tokio::test]
    async fn buy_selection_prompts_brochure_or_agent() {
        let flow = flow();
        let mut s = Session::new();
        let reply = turn(&flow, &mut s, "2").await;
        assert_eq!(
            reply.text,
            "Would you like to:\n1. Download the property listings brochure\n2. Get in touch with a real estate agent"
        );
        assert_eq!(s.state, FlowState::Buy);
        assert_eq!(s.sub_state, Some(SubState::Action));
    }

    #[tokio::test]
    async fn rent_selection_prompts_brochure_or_agent() {
        let flow = flow();
        let mut s = Session::new();
        let reply = turn(&flow, &mut s, "3").await;
        assert_eq!(reply.text, text::ACTION_PROMPT);
        assert_eq!(s.state, FlowState::Rent);
        assert_eq!(s.sub_state, Some(SubState::Action));
    }

    #[rstest]
    #[case(FlowState::Buy)]
    #[case(FlowState::Rent)]
    #[tokio::test]
    async fn action_one_sends_the_brochure(#[case] state: FlowState) {
        let flow = flow_with(FlowOptions {
            brochure_url: Some("https://cdn.example.com/brochure.pdf".to_string()),
            ..FlowOptions::default()
        });
        let mut s = action_session(state);
        let reply = turn(&flow, &mut s, "1").await;
        assert_eq!(reply.text, text::BROCHURE);
        assert_eq!(
            reply.media.as_deref(),
            Some("https://cdn.example.com/brochure.pdf")
        );
        assert_eq!(s.state, FlowState::Menu);
        assert!(s.sub_state.is_none());
    }

    #[rstest]
    #[case(FlowState::Buy)]
    #[case(FlowState::Rent)]
    #[tokio::test]
    async fn action_one_attaches_media_with_default_options(#[case] state: FlowState) {
        let flow = flow();
        let mut s = action_session(state);
        let reply = turn(&flow, &mut s, "1").await;
        assert_eq!(reply.text, text::BROCHURE);
        assert_eq!(reply.media.as_deref(), Some(text::DEFAULT_BROCHURE_URL));
    }

    #[tokio::test]
    async fn action_two_hands_off_to_an_agent() {
        let flow = flow();
        let mut s = action_session(FlowState::Buy);
        let reply = turn(&flow, &mut s, "2").await;
        assert_eq!(reply.text, text::AGENT_HANDOFF);
        assert!(reply.media.is_none());
        assert_eq!(s.state, FlowState::Menu);
        assert!(s.sub_state.is_none());
    }

    #[rstest]
    #[case("5")]
    #[case("brochure")]
    #[case("")]
    #[tokio::test]
    async fn invalid_action_leaves_state_unchanged(#[case] body: &str) {
        let flow = flow();
        let mut s = action_session(FlowState::Rent);
        let reply = turn(&flow, &mut s, body).await;
        assert_eq!(reply.text, text::INVALID_SELECTION);
        assert_eq!(s.state, FlowState::Rent);
        assert_eq!(s.sub_state, Some(SubState::Action));
    }

    #[rstest]
    #[case(Session::new())]
    #[case(action_session(FlowState::Buy))]
    #[case(Session { state: FlowState::Location, ..Session::default() })]
    #[case(Session { state: FlowState::Budget, ..Session::default() })]
    #[tokio::test]
    async fn bye_terminates_from_any_state(#[case] mut s: Session) {
        let flow = flow();
        let reply = turn(&flow, &mut s, "bye").await;
        assert!(reply.terminate);
        assert_eq!(reply.text, "canned goodbye");
    }

    #[tokio::test]
    async fn goodbye_keyword_also_terminates() {
        let flow = flow();
        let mut s = Session::new();
        let reply = turn(&flow, &mut s, "Goodbye").await;
        assert!(reply.terminate);
    }

    #[tokio::test]
    async fn clear_chat_terminates_with_confirmation() {
        let flow = flow();
        let mut s = Session::new();
        let reply = turn(&flow, &mut s, "clear chat").await;
        assert!(reply.terminate);
        assert_eq!(reply.text, text::CHAT_CLEARED);
    }

    #[tokio::test]
    async fn help_digit_returns_help_text() {
        let flow = flow();
        let mut s = Session::new();
        let reply = turn(&flow, &mut s, "1").await;
        assert_eq!(reply.text, text::HELP);
        assert_eq!(s.state, FlowState::Menu);
    }

    #[tokio::test]
    async fn custom_menu_digit_can_rerender_the_menu() {
        let menu = Menu::new(vec![
            MenuEntry::new("Show this menu", MenuAction::Menu),
            MenuEntry::new("Exit", MenuAction::Exit),
        ]);
        let flow = flow_with(FlowOptions {
            menu: menu.clone(),
            ..FlowOptions::default()
        });
        let mut s = Session::new();
        let reply = turn(&flow, &mut s, "1").await;
        assert_eq!(reply.text, menu.render());
        assert_eq!(s.state, FlowState::Menu);
    }

    #[rstest]
    #[case("4", "canned mortgage info")]
    #[case("5", "canned real estate info")]
    #[case("6", "canned joke")]
    #[tokio::test]
    async fn info_selections_answer_and_stay_home(#[case] body: &str, #[case] expected: &str) {
        let flow = flow();
        let mut s = Session::new();
        let reply = turn(&flow, &mut s, body).await;
        assert_eq!(reply.text, expected);
        assert_eq!(s.state, FlowState::Menu);
        assert!(s.sub_state.is_none());
        assert!(!reply.terminate);
    }

    #[tokio::test]
    async fn exit_digit_says_goodbye_and_terminates() {
        let flow = flow();
        let mut s = Session::new();
        let reply = turn(&flow, &mut s, "7").await;
        assert!(reply.terminate);
        assert_eq!(reply.text, "canned goodbye");
    }

    #[rstest]
    #[case("4")]
    #[case("5")]
    #[case("6")]
    #[tokio::test]
    async fn provider_failure_substitutes_apology(#[case] body: &str) {
        let flow = Flow::new(
            FlowOptions::default(),
            Arc::new(FailingContent),
            Arc::new(NoListings),
        );
        let mut s = Session::new();
        let reply = turn(&flow, &mut s, body).await;
        assert_eq!(reply.text, text::APOLOGY);
        assert_eq!(s.state, FlowState::Menu);
        assert!(s.sub_state.is_none());
        assert!(!reply.terminate);
    }

    #[tokio::test]
    async fn provider_failure_on_exit_still_terminates() {
        let flow = Flow::new(
            FlowOptions::default(),
            Arc::new(FailingContent),
            Arc::new(NoListings),
        );
        let mut s = Session::new();
        let reply = turn(&flow, &mut s, "7").await;
        assert!(reply.terminate);
        assert_eq!(reply.text, text::GOODBYE);
    }

    #[tokio::test]
    async fn collect_mode_walks_location_then_budget() {
        let flow = Flow::new(
            FlowOptions {
                property_flow: PropertyFlowMode::Collect,
                ..FlowOptions::default()
            },
            Arc::new(CannedContent),
            Arc::new(FixedListings(vec![Listing {
                kind: "House".to_string(),
                location: "New York".to_string(),
                price: 550_000,
            }])),
        );
        let mut s = Session::new();

        let reply = turn(&flow, &mut s, "2").await;
        assert_eq!(reply.text, text::LOCATION_PROMPT);
        assert_eq!(s.state, FlowState::Location);
        assert_eq!(s.pref(PREF_INTENT), Some("buy"));

        let reply = turn(&flow, &mut s, "New York").await;
        assert_eq!(reply.text, text::BUDGET_PROMPT);
        assert_eq!(s.state, FlowState::Budget);
        assert_eq!(s.pref(PREF_LOCATION), Some("New York"));

        let reply = turn(&flow, &mut s, "$600,000").await;
        assert!(reply.text.contains("House in New York for $550000"));
        assert_eq!(s.state, FlowState::Menu);
        assert!(s.sub_state.is_none());
        assert!(s.preferences.is_empty());
    }

    #[tokio::test]
    async fn budget_turn_renders_one_line_per_match() {
        let flow = Flow::new(
            FlowOptions::default(),
            Arc::new(CannedContent),
            Arc::new(FixedListings(vec![Listing {
                kind: "Apartment".to_string(),
                location: "New York".to_string(),
                price: 500_000,
            }])),
        );
        let mut s = Session {
            state: FlowState::Budget,
            ..Session::default()
        };
        s.preferences
            .insert(PREF_LOCATION.to_string(), "New York".to_string());

        let reply = turn(&flow, &mut s, "600000").await;
        let matching = reply
            .text
            .lines()
            .filter(|line| *line == "Apartment in New York for $500000")
            .count();
        assert_eq!(matching, 1);
        assert_eq!(s.state, FlowState::Menu);
    }

    #[tokio::test]
    async fn budget_reprompts_on_non_numeric_input() {
        let flow = flow();
        let mut s = Session {
            state: FlowState::Budget,
            ..Session::default()
        };
        let reply = turn(&flow, &mut s, "half a million").await;
        assert_eq!(reply.text, text::BUDGET_REPROMPT);
        assert_eq!(s.state, FlowState::Budget);
    }

    #[tokio::test]
    async fn location_reprompts_on_empty_input() {
        let flow = flow();
        let mut s = Session {
            state: FlowState::Location,
            ..Session::default()
        };
        let reply = turn(&flow, &mut s, "   ").await;
        assert_eq!(reply.text, text::LOCATION_REPROMPT);
        assert_eq!(s.state, FlowState::Location);
    }

    #[tokio::test]
    async fn budget_with_no_matches_reports_none_found() {
        let flow = flow();
        let mut s = Session {
            state: FlowState::Budget,
            ..Session::default()
        };
        s.preferences
            .insert(PREF_LOCATION.to_string(), "Mars".to_string());
        let reply = turn(&flow, &mut s, "100").await;
        assert_eq!(reply.text, text::NO_LISTINGS);
        assert_eq!(s.state, FlowState::Menu);
        assert!(s.preferences.is_empty());
    }

    #[tokio::test]
    async fn listing_failure_apologizes_and_goes_home() {
        let flow = Flow::new(
            FlowOptions::default(),
            Arc::new(CannedContent),
            Arc::new(FailingListings),
        );
        let mut s = Session {
            state: FlowState::Budget,
            ..Session::default()
        };
        let reply = turn(&flow, &mut s, "250000").await;
        assert_eq!(reply.text, text::APOLOGY);
        assert_eq!(s.state, FlowState::Menu);
    }

    #[tokio::test]
    async fn property_state_without_substate_recovers_to_menu() {
        let flow = flow();
        let mut s = Session {
            state: FlowState::Buy,
            ..Session::default()
        };
        let reply = turn(&flow, &mut s, "menu").await;
        assert!(reply.text.contains("1. Help"));
        assert_eq!(s.state, FlowState::Menu);
        assert!(s.sub_state.is_none());
    }

    #[tokio::test]
    async fn dangling_substate_under_menu_is_cleared() {
        let flow = flow();
        let mut s = Session {
            state: FlowState::Menu,
            sub_state: Some(SubState::Action),
            ..Session::default()
        };
        let reply = turn(&flow, &mut s, "hello").await;
        assert_eq!(reply.text, text::GREETING);
        assert!(s.sub_state.is_none());
    }

    #[tokio::test]
    async fn resting_exit_state_terminates_on_any_input() {
        let flow = flow();
        let mut s = Session {
            state: FlowState::Exit,
            ..Session::default()
        };
        let reply = turn(&flow, &mut s, "anything").await;
        assert!(reply.terminate);
        assert_eq!(reply.text, "canned goodbye");
    }

    #[tokio::test]
    async fn resting_info_state_answers_then_goes_home() {
        let flow = flow();
        let mut s = Session {
            state: FlowState::MortgageInfo,
            ..Session::default()
        };
        let reply = turn(&flow, &mut s, "ok").await;
        assert_eq!(reply.text, "canned mortgage info");
        assert_eq!(s.state, FlowState::Menu);
    }
}
