//! Length-bounded, HTML-safe excerpts

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Default excerpt settings
pub mod defaults {
    /// Number of words (or characters) kept by default
    pub const TRUNCATE_LENGTH: usize = 50;

    /// Hard cap in characters applied when word truncation runs long
    pub const MAX_LENGTH: usize = 120;

    /// Appended when something was cut
    pub const SUFFIX: &str = "...";
}

/// Unit used when truncating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruncateBy {
    /// Keep whole words
    #[default]
    Words,
    /// Keep characters, backing off to the last whole word
    Characters,
}

/// Excerpt settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcerptOptions {
    /// Truncation unit
    pub truncate_by: TruncateBy,
    /// Units kept before the suffix is appended
    pub truncate_length: usize,
    /// Leading text dropped when the input starts with it (usually the title)
    pub exclude_title: Option<String>,
    /// Appended to truncated excerpts
    pub suffix: String,
    /// Character cap for word-truncated excerpts
    pub max_length: usize,
}

impl Default for ExcerptOptions {
    fn default() -> Self {
        Self {
            truncate_by: TruncateBy::Words,
            truncate_length: defaults::TRUNCATE_LENGTH,
            exclude_title: None,
            suffix: defaults::SUFFIX.to_string(),
            max_length: defaults::MAX_LENGTH,
        }
    }
}

impl ExcerptOptions {
    /// Same options, excluding `title` from the start of the text
    pub fn excluding_title(&self, title: impl Into<String>) -> Self {
        Self {
            exclude_title: Some(title.into()),
            ..self.clone()
        }
    }
}

/// Builds an excerpt of `text`.
///
/// The title prefix is stripped, `<` and `>` are escaped, then the text is
/// truncated by words or characters. A word-truncated excerpt longer than
/// `max_length` characters is redone by characters with `max_length`.
pub fn excerpt(text: &str, options: &ExcerptOptions) -> String {
    let body = match options.exclude_title.as_deref().filter(|title| !title.is_empty()) {
        Some(title) => text.strip_prefix(title).unwrap_or(text),
        None => text,
    };
    let escaped = escape_angle_brackets(body.trim());

    match options.truncate_by {
        TruncateBy::Characters => {
            truncate_characters(&escaped, options.truncate_length, &options.suffix)
        }
        TruncateBy::Words => {
            let by_words = truncate_words(&escaped, options.truncate_length, &options.suffix);
            if by_words.chars().count() > options.max_length {
                truncate_characters(&escaped, options.max_length, &options.suffix)
            } else {
                by_words
            }
        }
    }
}

fn escape_angle_brackets(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\S+").expect("word pattern is valid"))
}

/// Keeps the first `limit` words, separators included
fn truncate_words(text: &str, limit: usize, suffix: &str) -> String {
    let Some(first_dropped) = word_pattern().find_iter(text).nth(limit) else {
        return text.to_string();
    };
    let kept = text[..first_dropped.start()]
        .trim_end_matches(|c: char| c.is_whitespace() || c == ',');
    format!("{kept}{suffix}")
}

/// Keeps at most `limit` characters without ending mid-word or mid-entity
fn truncate_characters(text: &str, limit: usize, suffix: &str) -> String {
    let Some((cut, _)) = text.char_indices().nth(limit) else {
        return text.to_string();
    };

    let mut kept = &text[..cut];
    let splits_word = text[cut..].chars().next().is_some_and(|c| !c.is_whitespace());
    if splits_word {
        if let Some(space) = kept.rfind(char::is_whitespace) {
            kept = &kept[..space];
        }
    }
    if let Some(amp) = kept.rfind('&') {
        let entity = &text[amp..];
        let is_escape = entity.starts_with("&lt;") || entity.starts_with("&gt;");
        if is_escape && amp + 4 > kept.len() {
            kept = &kept[..amp];
        }
    }

    format!("{}{suffix}", kept.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_words(limit: usize) -> ExcerptOptions {
        ExcerptOptions {
            truncate_length: limit,
            ..Default::default()
        }
    }

    fn by_characters(limit: usize) -> ExcerptOptions {
        ExcerptOptions {
            truncate_by: TruncateBy::Characters,
            truncate_length: limit,
            ..Default::default()
        }
    }

    #[test]
    fn test_short_text_is_unchanged() {
        assert_eq!(excerpt("Le Temps", &ExcerptOptions::default()), "Le Temps");
        assert_eq!(excerpt("", &ExcerptOptions::default()), "");
    }

    #[test]
    fn test_truncate_by_words() {
        let text = "one two, three four five";
        assert_eq!(excerpt(text, &by_words(2)), "one two...");
        assert_eq!(excerpt(text, &by_words(3)), "one two, three...");
        assert_eq!(excerpt(text, &by_words(5)), text);
    }

    #[test]
    fn test_truncate_by_characters_backs_off_to_word() {
        let text = "Gazette de Lausanne";
        assert_eq!(excerpt(text, &by_characters(12)), "Gazette de...");
        assert_eq!(excerpt(text, &by_characters(10)), "Gazette de...");
        assert_eq!(excerpt(text, &by_characters(7)), "Gazette...");
    }

    #[test]
    fn test_truncate_single_long_word() {
        assert_eq!(excerpt("abcdefghij", &by_characters(4)), "abcd...");
    }

    #[test]
    fn test_exclude_title() {
        let options = ExcerptOptions::default().excluding_title("FAITS DIVERS");
        assert_eq!(
            excerpt("FAITS DIVERS Un incendie a éclaté.", &options),
            "Un incendie a éclaté."
        );
        // no match, no stripping
        assert_eq!(excerpt("Autre titre", &options), "Autre titre");
    }

    #[test]
    fn test_escapes_angle_brackets() {
        assert_eq!(
            excerpt("<b>bold</b> text", &ExcerptOptions::default()),
            "&lt;b&gt;bold&lt;/b&gt; text"
        );
    }

    #[test]
    fn test_never_ends_inside_escape() {
        // "ab<cd" escapes to "ab&lt;cd"; a 4 character cut lands inside "&lt;"
        assert_eq!(excerpt("ab<cd", &by_characters(4)), "ab...");
        assert_eq!(excerpt("ab <", &by_characters(5)), "ab...");
    }

    #[test]
    fn test_word_excerpt_falls_back_to_max_length() {
        let long_word = "x".repeat(30);
        let text = vec![long_word.as_str(); 10].join(" ");
        let options = ExcerptOptions {
            truncate_length: 8,
            max_length: 70,
            ..Default::default()
        };

        let result = excerpt(&text, &options);
        assert!(result.ends_with("..."));
        let body = result.trim_end_matches("...");
        assert!(body.chars().count() <= 70);
        assert_eq!(body, format!("{long_word} {long_word}"));
    }
}
