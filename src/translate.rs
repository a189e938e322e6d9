//! Builds Google Translate links for the two directions the trip needs.
//!
//! The companion never calls a translation API; it only constructs a URL the
//! user opens in a browser.

use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use url::Url;

const TRANSLATE_BASE: &str = "https://translate.google.com/";

/// Translation direction.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Japanese to Traditional Chinese (reading signs and menus).
    #[default]
    JaZh,
    /// Traditional Chinese to Japanese (things to say).
    ZhJa,
}

serde_plain::derive_display_from_serialize!(Direction);
serde_plain::derive_fromstr_from_deserialize!(Direction);

impl Direction {
    fn source(&self) -> &'static str {
        match self {
            Direction::JaZh => "ja",
            Direction::ZhJa => "zh-TW",
        }
    }

    fn target(&self) -> &'static str {
        match self {
            Direction::JaZh => "zh-TW",
            Direction::ZhJa => "ja",
        }
    }
}

/// Builds the Google Translate URL for `text` in the given direction.
pub fn translate_url(text: &str, direction: Direction) -> Result<Url> {
    let mut url = Url::parse(TRANSLATE_BASE).context("Invalid translate base URL")?;
    url.query_pairs_mut()
        .append_pair("sl", direction.source())
        .append_pair("tl", direction.target())
        .append_pair("text", text)
        .append_pair("op", "translate");
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn url_carries_languages_and_encoded_text() {
        let url = translate_url("これはいくらですか？", Direction::JaZh).unwrap();
        let s = url.as_str();
        assert!(s.starts_with("https://translate.google.com/?"));
        assert!(s.contains("sl=ja"));
        assert!(s.contains("tl=zh-TW"));
        assert!(s.contains("op=translate"));
        // The text must be percent-encoded, never raw.
        assert!(!s.contains("これ"));
        assert!(s.contains("text=%E3%81%93"));
    }

    #[test]
    fn reverse_direction_swaps_the_languages() {
        let url = translate_url("謝謝", Direction::ZhJa).unwrap();
        let s = url.as_str();
        assert!(s.contains("sl=zh-TW"));
        assert!(s.contains("tl=ja"));
    }

    #[test]
    fn direction_parses_from_kebab_case() {
        assert_eq!(Direction::from_str("ja-zh").unwrap(), Direction::JaZh);
        assert_eq!(Direction::ZhJa.to_string(), "zh-ja");
        assert!(Direction::from_str("en-fr").is_err());
    }
}
