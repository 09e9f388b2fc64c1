//! Static profile shown on the page.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::theme::{badge_icon_url, hex_to_rgb};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    Video,
    Image,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    #[serde(rename = "type")]
    pub kind: BackgroundKind,
    pub url: String,
}

/// Badge shown next to the name. An empty `icon` falls back to the stock
/// Discord badge art for `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomBadge {
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

impl CustomBadge {
    /// Image to render for the badge, if any.
    #[must_use]
    pub fn icon_url(&self) -> Option<String> {
        if self.icon.is_empty() { badge_icon_url(&self.name) } else { Some(self.icon.clone()) }
    }
}

/// Track played once the visitor first clicks the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audio {
    pub url: String,
}

/// Profile configuration. Missing fields in a profile file take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub description: String,
    /// Discord user whose presence is shown. Also the default application id.
    pub discord_id: String,
    pub theme_color: String,
    pub spotify: bool,
    pub socials: Vec<SocialLink>,
    pub background: Background,
    pub audio: Option<Audio>,
    pub custom_badges: Vec<CustomBadge>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            description: "simping for 2d girls".to_owned(),
            discord_id: "1123856956780728411".to_owned(),
            theme_color: "#6f00ffff".to_owned(),
            spotify: true,
            socials: vec![
                SocialLink {
                    label: "Github".to_owned(),
                    href: "https://github.com/your-username".to_owned(),
                },
                SocialLink {
                    label: "Discord".to_owned(),
                    href: "https://discord.com/users/1213822891448209478".to_owned(),
                },
            ],
            background: Background {
                kind: BackgroundKind::Video,
                url: "/asset/bg.mp4".to_owned(),
            },
            audio: Some(Audio { url: "/asset/audio.mp3".to_owned() }),
            custom_badges: Vec::new(),
        }
    }
}

impl ProfileConfig {
    /// Loads the profile from a JSON file, or the built-in profile when `path` is `None`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid profile JSON.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .map_err(|source| CoreError::Io { path: path.display().to_string(), source })?;
        let profile: Self = serde_json::from_str(&raw)?;
        tracing::info!(path = %path.display(), discord_id = %profile.discord_id, "loaded profile");
        Ok(profile)
    }

    /// Theme color as an `"r, g, b"` triple for rgba() styles.
    #[must_use]
    pub fn theme_rgb(&self) -> String {
        hex_to_rgb(&self.theme_color)
    }
}
