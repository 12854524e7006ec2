//! The signed-in user as shown in the header.

use serde::{Deserialize, Serialize};

use crate::ui::initial;

/// Display identity of the current user.
///
/// Read-only: nothing in this crate persists or mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    /// Avatar image URL. `None` shows only the initial.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar_url: None,
        }
    }

    /// Set the avatar image URL. An empty URL clears it.
    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.avatar_url = (!url.is_empty()).then_some(url);
        self
    }

    /// Avatar fallback text.
    pub fn initial(&self) -> String {
        initial(&self.name)
    }
}
