//! Terminal rendering of a daily reading.

use std::io::Write;

use chrono::NaiveDateTime;
use crossterm::queue;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use rand::Rng;

use crate::bible::{DailyReading, Verse};
use crate::constants::reading::BOOK_NAME;
use crate::error::Result;
use crate::style::ColorMode;

/// Heading for the selected chapters (e.g., "Proverbs 18" or "Proverbs 28-31").
pub fn heading(chapters: &[u32]) -> String {
    match chapters {
        [] => BOOK_NAME.to_string(),
        [only] => format!("{BOOK_NAME} {only}"),
        [first, .., last] => format!("{BOOK_NAME} {first}-{last}"),
    }
}

/// Clock header (e.g., "09:41  12/18  Thursday").
pub fn clock_line(now: NaiveDateTime) -> String {
    now.format("%H:%M  %m/%d  %A").to_string()
}

/// One verse as displayed (e.g., "18:1 Whoever isolates himself").
///
/// The missing-resource sentinel shows its message alone.
pub fn verse_line(verse: &Verse) -> String {
    if verse.is_missing_resource() {
        verse.text.clone()
    } else {
        format!("{} {}", verse.reference(), verse.text)
    }
}

/// Write the reading with a bold heading and coloured verse lines.
pub fn write_reading<W, R>(
    out: &mut W,
    reading: &DailyReading,
    mode: ColorMode,
    rng: &mut R,
    clock: Option<NaiveDateTime>,
) -> Result<()>
where
    W: Write,
    R: Rng + ?Sized,
{
    if let Some(now) = clock {
        queue!(out, Print(clock_line(now)), Print("\n\n"))?;
    }

    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print(heading(&reading.chapters)),
        SetAttribute(Attribute::Reset),
        Print("\n\n")
    )?;

    for verse in &reading.verses {
        let color = mode.color_for_line(rng);
        queue!(
            out,
            SetForegroundColor(color.terminal_color()),
            Print(verse_line(verse)),
            ResetColor,
            Print("\n")
        )?;
    }

    out.flush()?;
    Ok(())
}

/// Write the reading as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, reading: &DailyReading) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, reading)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reading() -> DailyReading {
        DailyReading {
            date: NaiveDate::from_ymd_opt(2025, 12, 18).unwrap(),
            chapters: vec![18],
            verses: vec![
                Verse::new(18, 1, "Whoever isolates himself"),
                Verse::new(18, 2, "A fool takes no pleasure"),
            ],
        }
    }

    #[test]
    fn test_heading() {
        assert_eq!(heading(&[18]), "Proverbs 18");
        assert_eq!(heading(&[28, 29, 30, 31]), "Proverbs 28-31");
        assert_eq!(heading(&[]), "Proverbs");
    }

    #[test]
    fn test_clock_line() {
        let now = NaiveDate::from_ymd_opt(2025, 12, 18)
            .unwrap()
            .and_hms_opt(9, 41, 0)
            .unwrap();
        assert_eq!(clock_line(now), "09:41  12/18  Thursday");
    }

    #[test]
    fn test_verse_line() {
        assert_eq!(verse_line(&Verse::new(18, 1, "A")), "18:1 A");
        let sentinel = Verse::missing_resource();
        assert_eq!(verse_line(&sentinel), sentinel.text);
    }

    #[test]
    fn test_write_reading_contains_verses_in_order() {
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);
        write_reading(&mut out, &reading(), ColorMode::Mixed, &mut rng, None).unwrap();

        let text = String::from_utf8(out).unwrap();
        let heading_at = text.find("Proverbs 18").unwrap();
        let first = text.find("18:1 Whoever isolates himself").unwrap();
        let second = text.find("18:2 A fool takes no pleasure").unwrap();
        assert!(heading_at < first && first < second);
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_json(&mut out, &reading()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["date"], "2025-12-18");
        assert_eq!(value["chapters"], serde_json::json!([18]));
        assert_eq!(value["verses"][1]["verse"], 2);
    }
}
