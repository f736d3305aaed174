//! Canned reply text. Menu entry labels live in [`crate::menu`]; everything
//! else the bot says verbatim is here so wording changes stay one-line diffs.

/// First line of the rendered menu; numbered entries follow.
pub const MENU_HEADER: &str =
    "Welcome to Real Estate Bot! Please choose an option by typing the corresponding number:";

pub const GREETING: &str = "Hello! Welcome to Real Estate Bot. How can I assist you today? \
     Type \"Menu\" or \"1\" for a list of commands.";

pub const FALLBACK: &str =
    "Welcome! Please type \"Menu\" or \"1\" for guidance on how to interact with me.";

pub const HELP: &str = "This is the Real Estate Bot designed to assist you with your property \
     needs. You can buy, rent, or inquire about mortgages. Just select an option from the menu \
     to get started!";

pub const ACTION_PROMPT: &str = "Would you like to:\n\
     1. Download the property listings brochure\n\
     2. Get in touch with a real estate agent";

pub const BROCHURE: &str = "Here is our latest property listings brochure.";

/// Demo brochure attached to the brochure reply unless configuration points
/// somewhere else.
pub const DEFAULT_BROCHURE_URL: &str = "https://casita-bot.github.io/casita/brochure.pdf";

pub const AGENT_HANDOFF: &str =
    "Connecting you to one of our real estate agents. They will reach out to you shortly.";

pub const INVALID_SELECTION: &str =
    "Invalid selection. Please reply 1 for the brochure or 2 to speak to an agent.";

pub const APOLOGY: &str =
    "Sorry, I am having trouble fetching that right now. Please try again later.";

/// Used verbatim when the provider cannot supply a farewell.
pub const GOODBYE: &str = "Goodbye! Feel free to reach out anytime for real estate assistance.";

pub const CHAT_CLEARED: &str = "Chat history cleared. Type \"menu\" to start over.";

pub const LOCATION_PROMPT: &str = "Which location are you interested in?";

pub const LOCATION_REPROMPT: &str = "Please tell me which location you are interested in.";

pub const BUDGET_PROMPT: &str = "Great. What is your maximum budget in USD?";

pub const BUDGET_REPROMPT: &str = "Please send your budget as a number, e.g. 500000.";

pub const NO_LISTINGS: &str = "No properties found for that location and budget.";

pub const LISTINGS_HEADER: &str = "Here is what we found:";
