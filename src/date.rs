//! Long-form date line for the opening screen.

use core::fmt::Write;

use chrono::{Locale, NaiveDate, NaiveTime};
use heapless::String;
use serde::Deserialize;

/// Capacity of a formatted date ("30 September 2026" is the longest form).
pub const DATE_CAPACITY: usize = 32;

/// Language of the date line.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateLocale {
    /// `15 Oktober 2026`
    #[default]
    Indonesian,
    /// `October 15, 2026`
    English,
}

impl DateLocale {
    /// chrono locale the month names come from.
    const fn chrono_locale(self) -> Locale {
        match self {
            Self::Indonesian => Locale::id_ID,
            Self::English => Locale::en_US,
        }
    }

    /// strftime pattern for the long form in this language.
    const fn pattern(self) -> &'static str {
        match self {
            Self::Indonesian => "%-d %B %Y",
            Self::English => "%B %-d, %Y",
        }
    }
}

/// Format `date` as a long-form date in `locale`.
pub fn format_long_date(
    date: NaiveDate,
    locale: DateLocale,
) -> String<DATE_CAPACITY> {
    let mut out = String::new();
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    write!(out, "{}", midnight.format_localized(locale.pattern(), locale.chrono_locale())).ok();
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(
        y: i32,
        m: u32,
        d: u32,
    ) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_indonesian_is_default() {
        assert_eq!(DateLocale::default(), DateLocale::Indonesian);
    }

    #[test]
    fn test_format_indonesian() {
        assert_eq!(format_long_date(date(2026, 10, 15), DateLocale::Indonesian).as_str(), "15 Oktober 2026");
        assert_eq!(format_long_date(date(2026, 1, 1), DateLocale::Indonesian).as_str(), "1 Januari 2026");
    }

    #[test]
    fn test_format_english() {
        assert_eq!(format_long_date(date(2026, 10, 15), DateLocale::English).as_str(), "October 15, 2026");
    }

    #[test]
    fn test_longest_month_fits() {
        let text = format_long_date(date(2026, 9, 30), DateLocale::English);
        assert_eq!(text.as_str(), "September 30, 2026", "Longest form must not be truncated");
    }

    #[test]
    fn test_every_month_named_in_both_languages() {
        let id: Vec<_> = (1..=12)
            .map(|m| format_long_date(date(2026, m, 1), DateLocale::Indonesian))
            .collect();
        assert_eq!(id[4].as_str(), "1 Mei 2026");
        assert_eq!(id[7].as_str(), "1 Agustus 2026");
        assert_eq!(id[11].as_str(), "1 Desember 2026");

        let en = format_long_date(date(2026, 5, 9), DateLocale::English);
        assert_eq!(en.as_str(), "May 9, 2026", "Day is not zero-padded");
        assert!(id.iter().all(|text| text.ends_with(" 2026")), "No month name may truncate the line");
    }
}
