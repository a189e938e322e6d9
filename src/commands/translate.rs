//! Handlers for `tabi translate` and `tabi phrases`.

use crate::args::TranslateArgs;
use crate::commands::Out;
use crate::model::Phrase;
use crate::translate::translate_url;
use crate::{trip, Result};
use std::fmt::Write as _;

/// Builds and prints a Google Translate link for the given text.
pub fn translate(args: &TranslateArgs) -> Result<Out<String>> {
    let url = translate_url(args.text(), args.direction())?;
    Ok(Out::new(
        format!("Open this link to translate:\n  {url}"),
        url.to_string(),
    ))
}

/// Lists the preset polite phrases with their romaji.
pub fn phrases() -> Result<Out<Vec<Phrase>>> {
    let phrases = trip::phrases();
    let mut message = String::from("Preset phrases:\n");
    for phrase in &phrases {
        let _ = writeln!(
            message,
            "  [{}]\n    {}\n    {}\n    {}",
            phrase.label, phrase.zh, phrase.ja, phrase.romaji
        );
    }
    Ok(Out::new(message.trim_end().to_string(), phrases))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::Direction;

    #[test]
    fn translate_builds_a_google_translate_link() {
        let args = TranslateArgs::new("お手洗いはどこですか", Direction::JaZh);
        let out = translate(&args).unwrap();
        let url = out.structure().unwrap();
        assert!(url.starts_with("https://translate.google.com/"));
        assert!(url.contains("sl=ja"));
    }

    #[test]
    fn phrases_lists_all_presets() {
        let out = phrases().unwrap();
        assert_eq!(out.structure().unwrap().len(), trip::phrases().len());
        assert!(out.message().contains("Sumimasen"));
    }
}
