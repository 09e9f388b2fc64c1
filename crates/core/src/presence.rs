//! The part of the Discord presence payload the profile card reads.

use serde::{Deserialize, Serialize};

const MEDIA_PROXY_MARKER: &str = "mp:attachments/";
const DISCORD_ATTACHMENTS_URL: &str = "https://cdn.discordapp.com/attachments/";
const SPOTIFY_IMAGE_URL: &str = "https://i.scdn.co/image/";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presence {
    #[serde(default)]
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Presence {
    #[must_use]
    pub fn display_name(&self) -> &str {
        [self.display_name.as_deref(), self.global_name.as_deref()]
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }

    /// Activities worth showing on the card; bare custom statuses are dropped.
    pub fn visible_activities(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter().filter(|act| {
            act.kind == "Listening" || act.kind == "Playing" || act.name != "Custom Status"
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub assets: Option<ActivityAssets>,
    #[serde(default)]
    pub spotify: Option<SpotifyTrack>,
}

impl Activity {
    /// Artwork for the activity: album art, then the large asset image.
    #[must_use]
    pub fn image_url(&self) -> Option<String> {
        if let Some(art) = self.spotify.as_ref().and_then(|s| s.album_art.as_deref()) {
            return Some(art.to_owned());
        }
        let large = self.assets.as_ref()?.large_image.as_deref()?;
        if let Some(art_id) = large.strip_prefix("spotify:") {
            return Some(format!("{SPOTIFY_IMAGE_URL}{art_id}"));
        }
        large.starts_with("http").then(|| fix_discord_url(large))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityAssets {
    #[serde(default)]
    pub large_image: Option<String>,
    #[serde(default)]
    pub small_image: Option<String>,
    #[serde(default)]
    pub large_text: Option<String>,
    #[serde(default)]
    pub small_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotifyTrack {
    #[serde(default)]
    pub album_art: Option<String>,
    #[serde(default)]
    pub song_name: Option<String>,
    #[serde(default)]
    pub artist_name: Option<String>,
    #[serde(default, rename = "trackURL")]
    pub track_url: Option<String>,
}

/// Rewrites Discord media-proxy URLs (`.../mp:attachments/...`) to the CDN.
///
/// A `.png` suffix appended after a query string is stripped.
#[must_use]
pub fn fix_discord_url(url: &str) -> String {
    let Some((_, rest)) = url.split_once(MEDIA_PROXY_MARKER) else {
        return url.to_owned();
    };
    let fixed = format!("{DISCORD_ATTACHMENTS_URL}{rest}");
    if fixed.contains('?') {
        if let Some(stripped) = fixed.strip_suffix(".png") {
            return stripped.to_owned();
        }
    }
    fixed
}
