//! Signed-in user as reported by the external identity provider.

use serde::{Deserialize, Serialize};

/// Read-only view of the current user's session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Avatar URL, when the provider supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl UserSession {
    /// Name used in the dashboard greeting: the first word of the display
    /// name, or `User` when there is none.
    pub fn greeting_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("User")
    }

    /// Up to two initials for the avatar placeholder.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            self.email.chars().take(1).flat_map(char::to_uppercase).collect()
        } else {
            initials
        }
    }

    /// Display name with a fallback for blank names.
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            "User"
        } else {
            name
        }
    }
}
