//! The numbered menu as data. Operators reorder or drop entries in config;
//! the flow only ever asks "what does digit n mean right now".

use serde::{Deserialize, Serialize};

use crate::text::MENU_HEADER;

/// What a menu entry does when its digit is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    /// Re-render the menu itself.
    Menu,
    Help,
    Buy,
    Rent,
    MortgageInfo,
    RealEstateInfo,
    Joke,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub label: String,
    pub action: MenuAction,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// An ordered list of entries. Digits are 1-based positions in this list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    entries: Vec<MenuEntry>,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new(default_entries())
    }
}

impl Menu {
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    /// Action for a 1-based digit, `None` when out of range (including 0).
    pub fn action_at(&self, digit: u64) -> Option<MenuAction> {
        let idx = usize::try_from(digit.checked_sub(1)?).ok()?;
        self.entries.get(idx).map(|e| e.action)
    }

    pub fn render(&self) -> String {
        let mut out = String::from(MENU_HEADER);
        for (i, entry) in self.entries.iter().enumerate() {
            out.push_str(&format!("\n{}. {}", i + 1, entry.label));
        }
        out
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }
}

fn default_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new("Help", MenuAction::Help),
        MenuEntry::new("Buy Property", MenuAction::Buy),
        MenuEntry::new("Rent Property", MenuAction::Rent),
        MenuEntry::new("Mortgage/Loan Information", MenuAction::MortgageInfo),
        MenuEntry::new("Real Estate Information", MenuAction::RealEstateInfo),
        MenuEntry::new("Tell a Joke", MenuAction::Joke),
        MenuEntry::new("Exit", MenuAction::Exit),
    ]
}
