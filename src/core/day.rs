//! Day labels for planned tasks.
//!
//! A schedule names its days either by weekday ("Monday") or by position
//! ("Day 3"). CSV rows may also carry any other single word, which is kept
//! as-is so that nothing the user typed is lost.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Weekdays in planner order (weeks start on Monday).
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

static ORDINAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^day\s+([0-9]+)$").unwrap_or_else(|e| panic!("Invalid ordinal regex: {e}"))
});

/// The day a task belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum DayLabel {
    /// A named weekday, always displayed in canonical form.
    Weekday(Weekday),
    /// A numbered plan day ("Day 3").
    Ordinal(u32),
    /// Any other label, kept verbatim.
    Named(String),
}

impl DayLabel {
    /// Resolve a weekday by its full English name, ignoring case.
    #[must_use]
    pub fn weekday_named(name: &str) -> Option<Self> {
        WEEKDAYS
            .iter()
            .find(|day| weekday_name(**day).eq_ignore_ascii_case(name))
            .map(|day| Self::Weekday(*day))
    }

    /// Resolve a weekday whose full name starts the given text, ignoring case.
    ///
    /// `"MONDAY - gym week"` resolves to Monday; `"Mon"` resolves to nothing.
    #[must_use]
    pub fn weekday_prefix_of(text: &str) -> Option<Self> {
        WEEKDAYS
            .iter()
            .find(|day| {
                let name = weekday_name(**day);
                text.get(..name.len())
                    .is_some_and(|head| head.eq_ignore_ascii_case(name))
            })
            .map(|day| Self::Weekday(*day))
    }

    /// Build an ordinal label from the digits found after "Day".
    ///
    /// Digit runs too large for a `u32` are kept verbatim as a named label.
    #[must_use]
    pub fn from_ordinal_digits(digits: &str, as_found: &str) -> Self {
        digits
            .parse::<u32>()
            .map_or_else(|_| Self::Named(as_found.to_string()), Self::Ordinal)
    }

    fn sort_key(&self) -> (u8, u32) {
        match self {
            Self::Weekday(day) => (0, day.num_days_from_monday()),
            Self::Ordinal(n) => (1, *n),
            Self::Named(_) => (2, 0),
        }
    }
}

/// Full English name of a weekday.
#[must_use]
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekday(day) => f.write_str(weekday_name(*day)),
            Self::Ordinal(n) => write!(f, "Day {n}"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

impl FromStr for DayLabel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(day) = Self::weekday_named(trimmed) {
            return Ok(day);
        }
        if let Some(caps) = ORDINAL_PATTERN.captures(trimmed) {
            if let Some(digits) = caps.get(1) {
                return Ok(Self::from_ordinal_digits(digits.as_str(), trimmed));
            }
        }
        Ok(Self::Named(trimmed.to_string()))
    }
}

impl From<String> for DayLabel {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(label) => label,
            Err(never) => match never {},
        }
    }
}

impl From<DayLabel> for String {
    fn from(value: DayLabel) -> Self {
        value.to_string()
    }
}

impl Ord for DayLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key()).then_with(|| match (self, other) {
            (Self::Named(a), Self::Named(b)) => a.cmp(b),
            _ => Ordering::Equal,
        })
    }
}

impl PartialOrd for DayLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
