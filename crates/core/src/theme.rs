//! Theme color conversion and icon lookup for the profile card.

use crate::constants::FALLBACK_RGB;

const BADGE_BASE_URL: &str =
    "https://raw.githubusercontent.com/rniss/discord-badges/main/assets/badges";

const KNOWN_BADGES: &[&str] = &[
    "hypesquad_brilliance",
    "hypesquad_bravery",
    "hypesquad_balance",
    "staff",
    "partner",
    "certified_moderator",
    "verified_developer",
    "active_developer",
    "early_supporter",
    "nitro",
    "boost",
];

/// Converts a hex color into an `"r, g, b"` string.
///
/// Accepts an optional leading `#`, 3-digit shorthand and 8-digit colors
/// (alpha is dropped). Like `parseInt(hex, 16)`, only the leading run of hex
/// digits is read, so `#abcxyz` is `0x0abc`. No leading digit yields white.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> String {
    let hex = hex.trim().trim_start_matches('#');
    let hex: String = match hex.chars().count() {
        8 => hex.chars().take(6).collect(),
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        _ => hex.to_owned(),
    };

    // only the low 24 bits are kept, so the last 16 digits are enough
    let digits: Vec<char> = hex.chars().take_while(char::is_ascii_hexdigit).collect();
    let tail: String = digits[digits.len().saturating_sub(16)..].iter().collect();
    let Ok(value) = u64::from_str_radix(&tail, 16) else {
        return FALLBACK_RGB.to_owned();
    };

    let r = (value >> 16) & 0xff;
    let g = (value >> 8) & 0xff;
    let b = value & 0xff;
    format!("{r}, {g}, {b}")
}

/// Icon name for a social link label. Unknown labels get the generic link icon.
#[must_use]
pub fn social_icon(label: &str) -> &'static str {
    match label {
        "Github" => "github",
        "Spotify" => "music",
        "Instagram" => "instagram",
        "Twitter" => "twitter",
        "Youtube" => "youtube",
        "Twitch" => "twitch",
        "Mail" => "mail",
        "Globe" | "Website" => "globe",
        "Cloud" => "cloud",
        // no brand icon for Discord
        _ => "link",
    }
}

/// SVG asset for a Discord badge name, if one exists.
#[must_use]
pub fn badge_icon_url(name: &str) -> Option<String> {
    KNOWN_BADGES.contains(&name).then(|| format!("{BADGE_BASE_URL}/{name}.svg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digit_hex() {
        assert_eq!(hex_to_rgb("#6f00ff"), "111, 0, 255");
        assert_eq!(hex_to_rgb("102030"), "16, 32, 48");
    }

    #[test]
    fn eight_digit_hex_drops_alpha() {
        assert_eq!(hex_to_rgb("#6f00ffff"), "111, 0, 255");
        assert_eq!(hex_to_rgb("#00000000"), "0, 0, 0");
    }

    #[test]
    fn three_digit_hex_expands() {
        assert_eq!(hex_to_rgb("#f0a"), "255, 0, 170");
    }

    #[test]
    fn invalid_hex_is_white() {
        assert_eq!(hex_to_rgb("#zzzzzz"), FALLBACK_RGB);
        assert_eq!(hex_to_rgb(""), FALLBACK_RGB);
        assert_eq!(hex_to_rgb("#"), FALLBACK_RGB);
    }

    #[test]
    fn leading_hex_digits_are_parsed() {
        assert_eq!(hex_to_rgb("#abcxyz"), "0, 10, 188");
        assert_eq!(hex_to_rgb("#1234567"), "35, 69, 103");
        assert_eq!(hex_to_rgb("#abz"), "0, 170, 187");
    }

    #[test]
    fn social_icons() {
        assert_eq!(social_icon("Github"), "github");
        assert_eq!(social_icon("Website"), "globe");
        assert_eq!(social_icon("Discord"), "link");
        assert_eq!(social_icon("Mastodon"), "link");
    }

    #[test]
    fn badge_icons() {
        assert_eq!(
            badge_icon_url("staff").as_deref(),
            Some(
                "https://raw.githubusercontent.com/rniss/discord-badges/main/assets/badges/staff.svg"
            )
        );
        assert_eq!(badge_icon_url("unknown"), None);
    }
}
