//! Mock user profile
//!
//! There is no authentication: every session starts from the same mock
//! profile and edits its own copy. All updates take `self` by value and
//! return the new profile so the session store can swap it atomically.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::CharacterId;

/// How many recently viewed characters a profile remembers
pub const RECENTLY_VIEWED_LIMIT: usize = 10;

const MAX_DISPLAY_NAME_LENGTH: usize = 100;
const MAX_BIO_LENGTH: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    display_name: String,
    email: String,
    bio: String,
    favorites: Vec<CharacterId>,
    recently_viewed: Vec<CharacterId>,
}

/// Editable profile fields. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetails {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::mock()
    }
}

impl UserProfile {
    /// The profile every new session starts with.
    pub fn mock() -> Self {
        Self {
            display_name: "Seeker".to_string(),
            email: "seeker@devaarchives.example".to_string(),
            bio: "Exploring the stories of the devas, asuras and sages.".to_string(),
            favorites: Vec::new(),
            recently_viewed: Vec::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn favorites(&self) -> &[CharacterId] {
        &self.favorites
    }

    /// Most recent first
    pub fn recently_viewed(&self) -> &[CharacterId] {
        &self.recently_viewed
    }

    pub fn is_favorite(&self, id: &CharacterId) -> bool {
        self.favorites.contains(id)
    }

    /// Apply edited details.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the display name is blank or too
    /// long, the email has no `@`, or the bio is too long. The profile is
    /// unchanged on error.
    pub fn with_details(self, details: ProfileDetails) -> Result<Self, DomainError> {
        let mut next = self;

        if let Some(name) = details.display_name {
            let name = name.trim();
            if name.is_empty() {
                return Err(DomainError::validation("Display name cannot be empty"));
            }
            if name.chars().count() > MAX_DISPLAY_NAME_LENGTH {
                return Err(DomainError::validation(format!(
                    "Display name cannot exceed {} characters",
                    MAX_DISPLAY_NAME_LENGTH
                )));
            }
            next.display_name = name.to_string();
        }

        if let Some(email) = details.email {
            let email = email.trim();
            if !email.contains('@') {
                return Err(DomainError::validation("Email must contain '@'"));
            }
            next.email = email.to_string();
        }

        if let Some(bio) = details.bio {
            if bio.chars().count() > MAX_BIO_LENGTH {
                return Err(DomainError::validation(format!(
                    "Bio cannot exceed {} characters",
                    MAX_BIO_LENGTH
                )));
            }
            next.bio = bio.trim().to_string();
        }

        Ok(next)
    }

    /// Add `id` to favorites, or remove it if already present.
    pub fn with_favorite_toggled(mut self, id: CharacterId) -> Self {
        if let Some(pos) = self.favorites.iter().position(|f| *f == id) {
            self.favorites.remove(pos);
        } else {
            self.favorites.push(id);
        }
        self
    }

    /// Record a view, moving `id` to the front and keeping the newest
    /// [`RECENTLY_VIEWED_LIMIT`] entries.
    pub fn with_viewed(mut self, id: CharacterId) -> Self {
        self.recently_viewed.retain(|v| *v != id);
        self.recently_viewed.insert(0, id);
        self.recently_viewed.truncate(RECENTLY_VIEWED_LIMIT);
        self
    }
}
