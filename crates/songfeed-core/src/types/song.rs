//! Song type representing a single feed entry.

use serde::{Deserialize, Serialize};

/// A single song in the feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Service-assigned identifier.
    pub id: String,
    /// Song title.
    pub title: String,
    /// Who uploaded the song.
    pub creator: Creator,
    /// Whether the user has marked this song as a favorite.
    #[serde(default)]
    pub is_favorite: bool,
    /// Playable media URL.
    pub url: String,
    /// Cover image URL (if available).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

impl Song {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        creator: Creator,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            creator,
            is_favorite: false,
            url: url.into(),
            cover_url: None,
        }
    }

    #[must_use]
    pub const fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    #[must_use]
    pub fn with_cover(mut self, cover_url: impl Into<String>) -> Self {
        self.cover_url = Some(cover_url.into());
        self
    }

    /// Get the creator's display name.
    pub fn creator_display(&self) -> &str {
        self.creator.display_name()
    }
}

/// Creator reference within a song.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Creator {
    /// Creator email, also used as the public handle.
    pub email: String,
    /// Display name (if set).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Creator {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name if set, otherwise the email.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}
