//! Verse file parsing.
//!
//! The resource is plain UTF-8 with one verse per line:
//!
//! ```text
//! 18:1 Whoever isolates himself seeks his own desire;
//! 18:2 A fool takes no pleasure in understanding,
//! ```
//!
//! Blank lines are ignored and any line that does not fit the
//! `<chapter>:<verse> <text>` shape is skipped without failing the load.

use std::collections::HashSet;

use super::Verse;
use crate::services::source::VerseSource;

/// Parse a `chapter:verse` token into its two positive numbers.
fn parse_reference(token: &str) -> Option<(u32, u32)> {
    let mut parts = token.split(':');
    let chapter = parts.next()?.parse::<u32>().ok()?;
    let verse = parts.next()?.parse::<u32>().ok()?;

    // Exactly two segments; zero is reserved for the sentinel verse
    if parts.next().is_some() || chapter == 0 || verse == 0 {
        return None;
    }

    Some((chapter, verse))
}

/// Parse a single line like `"18:1 Whoever isolates himself"`.
///
/// Tokens are separated by spaces only; runs of spaces collapse to one, while
/// tabs and other whitespace stay part of their token. Returns `None` for
/// blank lines, lines without text, and lines whose reference is not two
/// positive integers separated by `:`.
pub fn parse_line(line: &str) -> Option<Verse> {
    let mut tokens = line.trim().split(' ').filter(|t| !t.is_empty());
    let (chapter, verse) = parse_reference(tokens.next()?)?;

    let text = tokens.collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        return None;
    }

    Some(Verse::new(chapter, verse, text))
}

/// Parse the full resource text, keeping verses whose chapter is in `wanted`.
///
/// Source order is preserved. Accepts `\n`, `\r\n` and bare `\r` line endings.
pub fn parse_verses(text: &str, wanted: &HashSet<u32>) -> Vec<Verse> {
    let mut verses = Vec::new();
    let mut malformed = 0usize;

    for line in text.split(['\n', '\r']) {
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(verse) if wanted.contains(&verse.chapter) => verses.push(verse),
            Some(_) => {}
            None => {
                malformed += 1;
                tracing::trace!("Skipping malformed verse line: {line:?}");
            }
        }
    }

    if malformed > 0 {
        tracing::debug!("Skipped {malformed} malformed verse lines");
    }

    verses
}

/// Load the resource from `source` and parse it.
///
/// If the resource cannot be read at all, returns a single
/// [`Verse::missing_resource`] sentinel instead of an error, so callers always
/// have something to show.
pub fn load_verses<S: VerseSource + ?Sized>(source: &S, wanted: &HashSet<u32>) -> Vec<Verse> {
    match source.read_text() {
        Ok(text) => {
            let verses = parse_verses(&text, wanted);
            tracing::info!("Loaded {} verses from {}", verses.len(), source.describe());
            verses
        }
        Err(e) => {
            tracing::warn!("Failed to read verse file {}: {e}", source.describe());
            vec![Verse::missing_resource()]
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::constants::reading::MISSING_RESOURCE_MESSAGE;
    use crate::error::{Error, Result};
    use crate::services::source::{FileSource, TextSource};

    struct BrokenSource;

    impl VerseSource for BrokenSource {
        fn read_text(&self) -> Result<String> {
            Err(Error::io(std::io::Error::other("device unplugged"), None::<std::path::PathBuf>))
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    fn chapters(list: &[u32]) -> HashSet<u32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_parse_line_basic() {
        let v = parse_line("18:1 Valid text").unwrap();
        assert_eq!(v, Verse::new(18, 1, "Valid text"));
    }

    #[test]
    fn test_parse_line_rejects_malformed() {
        assert!(parse_line("abc 18:1 text").is_none());
        assert!(parse_line("18:1").is_none());
        assert!(parse_line("18:1   ").is_none());
        assert!(parse_line("18:x text").is_none());
        assert!(parse_line("18 text").is_none());
        assert!(parse_line("18:1:2 text").is_none());
        assert!(parse_line("0:0 sentinel lookalike").is_none());
        assert!(parse_line("-1:3 negative").is_none());
    }

    #[test]
    fn test_parse_line_collapses_spaces() {
        let v = parse_line("  18:1 Two  spaced   words ").unwrap();
        assert_eq!(v.text, "Two spaced words");
    }

    #[test]
    fn test_parse_line_splits_on_spaces_only() {
        assert!(parse_line("18:1\tText").is_none());
        assert!(parse_line("18:1\u{a0}Text").is_none());

        let v = parse_line("18:1 a\tb").unwrap();
        assert_eq!(v.text, "a\tb");
    }

    #[test]
    fn test_parse_verses_filters_by_chapter() {
        let verses = parse_verses("18:1 A\n18:2 B\n19:1 C\n", &chapters(&[18]));
        assert_eq!(verses, vec![Verse::new(18, 1, "A"), Verse::new(18, 2, "B")]);
    }

    #[test]
    fn test_parse_verses_skips_malformed_lines() {
        let text = "abc 18:1 text\n18:1\n18:x text\n18:1 Valid text\n";
        let verses = parse_verses(text, &chapters(&[18]));
        assert_eq!(verses, vec![Verse::new(18, 1, "Valid text")]);
    }

    #[test]
    fn test_parse_verses_preserves_source_order() {
        let text = "31:2 second\n30:1 first\n31:1 third\n29:9 skipped\n";
        let verses = parse_verses(text, &chapters(&[30, 31]));
        let refs: Vec<_> = verses.iter().map(Verse::reference).collect();
        assert_eq!(refs, vec!["31:2", "30:1", "31:1"]);
    }

    #[test]
    fn test_parse_verses_accepts_all_line_endings() {
        let text = "1:1 unix\n\n1:2 windows\r\n1:3 classic\r1:4 last";
        let verses = parse_verses(text, &chapters(&[1]));
        let texts: Vec<_> = verses.iter().map(|v| v.text.as_str()).collect();
        assert_eq!(texts, vec!["unix", "windows", "classic", "last"]);
    }

    #[test]
    fn test_parse_verses_empty_when_nothing_matches() {
        assert!(parse_verses("1:1 A\n2:1 B\n", &chapters(&[3])).is_empty());
        assert!(parse_verses("", &chapters(&[1])).is_empty());
    }

    #[test]
    fn test_parse_verses_is_idempotent() {
        let text = "18:1 A\n18:2 B\n";
        let wanted = chapters(&[18]);
        assert_eq!(parse_verses(text, &wanted), parse_verses(text, &wanted));
    }

    #[test]
    fn test_load_verses_from_text_source() {
        let source = TextSource::new("5:1 My son, be attentive\n6:1 My son, if\n");
        let verses = load_verses(&source, &chapters(&[5]));
        assert_eq!(verses, vec![Verse::new(5, 1, "My son, be attentive")]);
    }

    #[test]
    fn test_load_verses_missing_file_yields_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("Proverbs.txt"));

        let verses = load_verses(&source, &chapters(&[1]));
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].chapter, 0);
        assert_eq!(verses[0].verse, 0);
        assert_eq!(verses[0].text, MISSING_RESOURCE_MESSAGE);
        assert!(verses[0].is_missing_resource());
    }

    #[test]
    fn test_load_verses_unreadable_source_yields_sentinel() {
        let verses = load_verses(&BrokenSource, &chapters(&[1]));
        assert_eq!(verses, vec![Verse::missing_resource()]);
    }
}
