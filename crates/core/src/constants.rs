//! Shared constants for linkbio.

/// File name of the durable view record, relative to the working directory.
pub const DEFAULT_VIEWS_FILE: &str = "views.json";

/// Base URL of the remote counter service.
pub const DEFAULT_COUNTER_URL: &str = "https://api.countapi.xyz";

/// Prefix combined with the application id to form the remote namespace.
pub const COUNTER_NAMESPACE_PREFIX: &str = "linkbio";

/// Key of the view counter inside the remote namespace.
pub const COUNTER_KEY: &str = "views";

/// Base URL of the Discord presence API. The Discord id is appended as a path segment.
pub const DEFAULT_PRESENCE_URL: &str = "http://fi1.bot-hosting.net:5945/api";

/// Timeout applied to every outbound HTTP call (remote counter, presence, image proxy).
pub const HTTP_CLIENT_TIMEOUT_SECS: u64 = 10;

/// User-Agent sent by the image proxy. Some CDNs only serve known crawlers.
pub const IMAGE_PROXY_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; Discordbot/2.0; +https://discordapp.com)";

/// Cache directive attached to proxied images.
pub const IMAGE_PROXY_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Content type used when the upstream image response has none.
pub const IMAGE_PROXY_DEFAULT_CONTENT_TYPE: &str = "image/png";

/// Returned by `hex_to_rgb` when the theme color cannot be parsed.
pub const FALLBACK_RGB: &str = "255, 255, 255";

/// Environment variable names.
pub mod env {
    pub const VIEWS_BACKEND: &str = "LINKBIO_VIEWS_BACKEND";
    pub const VIEWS_PATH: &str = "LINKBIO_VIEWS_PATH";
    pub const VIEWS_FALLBACK: &str = "LINKBIO_VIEWS_FALLBACK";
    pub const COUNTER_URL: &str = "LINKBIO_COUNTER_URL";
    pub const APP_ID: &str = "LINKBIO_APP_ID";
    pub const PROFILE: &str = "LINKBIO_PROFILE";
    pub const PRESENCE_URL: &str = "LINKBIO_PRESENCE_URL";
}
