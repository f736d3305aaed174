//! Conversation core for the real-estate bot.
//!
//! Flow: menu → numbered selection → (brochure/agent, info answer, or
//! location/budget collection) → back to menu. Pure with respect to storage;
//! the transport owns persistence and delivery.

pub mod flow;
pub mod input;
pub mod menu;
pub mod provider;
pub mod session;
pub mod text;

pub use {
    flow::{Flow, FlowOptions, PropertyFlowMode, ReplyEffects},
    input::{Keyword, NormalizedInput, Token, parse_amount},
    menu::{Menu, MenuAction, MenuEntry},
    provider::{ContentProvider, Listing, ListingQuery, ProviderError, ProviderResult, Topic},
    session::{FlowState, PREF_BUDGET, PREF_INTENT, PREF_LOCATION, Session, SubState},
};
