//! Per-sender conversation state. No I/O; storage lives in `casita-sessions`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Preference keys accumulated during multi-turn flows.
pub const PREF_LOCATION: &str = "location";
pub const PREF_BUDGET: &str = "budget";
pub const PREF_INTENT: &str = "intent";

/// Primary conversation state. Closed set: anything a store hands back that
/// does not deserialize into one of these is treated as a fresh session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    Menu,
    Buy,
    Rent,
    MortgageInfo,
    RealEstateInfo,
    Joke,
    Exit,
    Location,
    Budget,
}

/// Secondary state dimension, used only inside multi-step flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubState {
    /// Brochure-or-agent selection under `Buy`/`Rent`.
    Action,
}

/// One sender's conversation, mutated in place by each turn.
///
/// Invariant: `state == Menu` implies `sub_state == None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub state: FlowState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_state: Option<SubState>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub preferences: HashMap<String, String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            state: FlowState::Menu,
            sub_state: None,
            preferences: HashMap::new(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to the top-level menu, clearing any sub-state.
    pub(crate) fn reset_to_menu(&mut self) {
        self.state = FlowState::Menu;
        self.sub_state = None;
    }

    pub fn pref(&self, key: &str) -> Option<&str> {
        self.preferences.get(key).map(String::as_str)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_menu() {
        let s = Session::new();
        assert_eq!(s.state, FlowState::Menu);
        assert!(s.sub_state.is_none());
        assert!(s.preferences.is_empty());
    }

    #[test]
    fn states_serialize_as_snake_case() {
        let mut s = Session::new();
        s.state = FlowState::MortgageInfo;
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"mortgage_info\""));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let s: Session = serde_json::from_str(r#"{"state":"buy"}"#).unwrap();
        assert_eq!(s.state, FlowState::Buy);
        assert!(s.sub_state.is_none());
    }

    #[test]
    fn unknown_state_fails_to_parse() {
        assert!(serde_json::from_str::<Session>(r#"{"state":"haggle"}"#).is_err());
    }
}
