//! Core types and configuration for linkbio
//!
//! This crate contains domain types shared across all other crates: the view
//! counter configuration, the profile shown on the page, and the small
//! formatting helpers the profile card relies on.

mod config;
pub mod constants;
mod env_config;
mod error;
mod presence;
mod profile;
mod theme;

pub use config::{BackendKind, FallbackPolicy, ViewsConfig};
pub use env_config::{env_parse_with_default, parse_with_default};
pub use error::{CoreError, Result};
pub use presence::{Activity, ActivityAssets, Presence, SpotifyTrack, fix_discord_url};
pub use profile::{Audio, Background, BackgroundKind, CustomBadge, ProfileConfig, SocialLink};
pub use theme::{badge_icon_url, hex_to_rgb, social_icon};
