//! Response types (Serialize)

use linkbio_core::{Audio, Background, ProfileConfig, social_icon};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewsResponse {
    pub views: u64,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SocialResponse {
    pub label: String,
    pub href: String,
    pub icon: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BadgeResponse {
    pub name: String,
    /// Configured icon, or the stock Discord art for a known badge name.
    pub icon: Option<String>,
}

/// Profile as consumed by the page: config plus derived theme and icon data.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub description: String,
    pub discord_id: String,
    pub theme_color: String,
    pub theme_rgb: String,
    pub spotify: bool,
    pub socials: Vec<SocialResponse>,
    pub background: Background,
    pub audio: Option<Audio>,
    pub custom_badges: Vec<BadgeResponse>,
}

impl From<&ProfileConfig> for ProfileResponse {
    fn from(profile: &ProfileConfig) -> Self {
        Self {
            description: profile.description.clone(),
            discord_id: profile.discord_id.clone(),
            theme_color: profile.theme_color.clone(),
            theme_rgb: profile.theme_rgb(),
            spotify: profile.spotify,
            socials: profile
                .socials
                .iter()
                .map(|s| SocialResponse {
                    label: s.label.clone(),
                    href: s.href.clone(),
                    icon: social_icon(&s.label),
                })
                .collect(),
            background: profile.background.clone(),
            audio: profile.audio.clone(),
            custom_badges: profile
                .custom_badges
                .iter()
                .map(|b| BadgeResponse { name: b.name.clone(), icon: b.icon_url() })
                .collect(),
        }
    }
}
