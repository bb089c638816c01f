//! Relative-age labels for "last edited" display.

use crate::config::StoreConfig;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;

/// Language of the generated labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ru")]
    Russian,
}

impl Locale {
    fn just_now(self) -> &'static str {
        match self {
            Self::English => "just now",
            Self::Russian => "только что",
        }
    }

    fn minutes(self, m: i64) -> String {
        match self {
            Self::English => format!("{} min ago", m),
            Self::Russian => format!("{} мин назад", m),
        }
    }

    fn hours(self, h: i64) -> String {
        match self {
            Self::English => format!("{} hour{} ago", h, plural_suffix(h)),
            Self::Russian => format!("{} ч назад", h),
        }
    }

    fn days(self, d: i64) -> String {
        match self {
            Self::English => format!("{} day{} ago", d, plural_suffix(d)),
            Self::Russian => format!("{} дн назад", d),
        }
    }

    fn absolute_format(self) -> &'static str {
        match self {
            Self::English => "%-m/%-d/%Y %H:%M",
            Self::Russian => "%d.%m.%Y %H:%M",
        }
    }
}

fn plural_suffix(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Maps timestamps to labels such as "3 days ago"
///
/// Anything a month old or older is shown as an absolute date and time in
/// the formatter's UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct RelativeTimeFormatter {
    locale: Locale,
    offset: FixedOffset,
}

impl RelativeTimeFormatter {
    /// Creates a formatter using the machine's current UTC offset
    pub fn new(locale: Locale) -> Self {
        Self::with_offset(locale, Local::now().offset().fix())
    }

    pub fn with_offset(locale: Locale, offset: FixedOffset) -> Self {
        Self { locale, offset }
    }

    /// Creates a formatter in the configured locale and the local UTC offset
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.locale)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Formats `input` relative to the current time
    pub fn format(&self, input: Option<&str>) -> String {
        self.format_at(input, Utc::now())
    }

    /// Formats `input` relative to `now`
    ///
    /// Empty input gives an empty label. So does input that is not a
    /// recognizable timestamp.
    pub fn format_at(&self, input: Option<&str>, now: DateTime<Utc>) -> String {
        let raw = match input.map(str::trim) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return String::new(),
        };

        match self.parse(raw) {
            Some(instant) => self.format_instant_at(instant, now),
            None => {
                tracing::warn!(input = raw, "unparseable timestamp, leaving label empty");
                String::new()
            }
        }
    }

    /// Formats a stored timestamp relative to `now`
    ///
    /// Strings are parsed like [`format_at`](Self::format_at); numbers are
    /// epoch milliseconds. `null`, `0` and other shapes give an empty label.
    pub fn format_value_at(&self, value: Option<&Value>, now: DateTime<Utc>) -> String {
        match value {
            Some(Value::String(raw)) => self.format_at(Some(raw.as_str()), now),
            Some(Value::Number(millis)) => {
                let instant = millis
                    .as_i64()
                    .or_else(|| millis.as_f64().map(|m| m as i64))
                    .filter(|millis| *millis != 0)
                    .and_then(|millis| Utc.timestamp_millis_opt(millis).single());

                match instant {
                    Some(instant) => self.format_instant_at(instant, now),
                    None => String::new(),
                }
            }
            _ => String::new(),
        }
    }

    pub fn format_instant_at(&self, instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
        // Timestamps from the future count as just edited.
        let diff = (now - instant).num_seconds().max(0);

        if diff < MINUTE {
            self.locale.just_now().to_string()
        } else if diff < HOUR {
            self.locale.minutes(diff / MINUTE)
        } else if diff < DAY {
            self.locale.hours(diff / HOUR)
        } else if diff < MONTH {
            self.locale.days(diff / DAY)
        } else {
            instant
                .with_timezone(&self.offset)
                .format(self.locale.absolute_format())
                .to_string()
        }
    }

    /// Parses RFC 3339, a naive date-time, or a bare date
    ///
    /// Naive values are read in the formatter's offset.
    pub fn parse(&self, raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return Some(instant.with_timezone(&Utc));
        }

        let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })?;

        self.offset
            .from_local_datetime(&naive)
            .single()
            .map(|instant| instant.with_timezone(&Utc))
    }
}

impl Default for RelativeTimeFormatter {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
