//! Slack Web API and incoming-webhook adapters.

mod usergroups;
mod webhook;

pub use usergroups::{SlackUserGroups, DEFAULT_USERGROUPS_UPDATE_URL};
pub use webhook::SlackWebhook;
