//! Line rules for schedule text.
//!
//! Each rule looks at one trimmed line (plus the day currently in effect)
//! and either declines it or decides what the line means. Rules are tried
//! in [`Rule::PIPELINE`] order and the first decision wins.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::DayLabel;

/// Header lines at least this long (in UTF-16 code units) are treated as text.
pub const MAX_DAY_HEADER_CHARS: usize = 30;

static CSV_ROW: Lazy<Regex> = Lazy::new(|| {
    // <Day N | Word>, <time>, <task>; the word is ASCII letters only
    Regex::new(r"(?i)^((?:Day\s+[0-9]+)|(?-u:[A-Za-z]+))\s*,\s*(.*?)\s*,\s*(.*)")
        .unwrap_or_else(|e| panic!("Invalid CSV row regex: {e}"))
});

static ORDINAL_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^Day\s+([0-9]+)")
        .unwrap_or_else(|e| panic!("Invalid day header regex: {e}"))
});

static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "9", "9am", "9:30 PM", optionally "- 10:30pm" with hyphen, en or em dash
    Regex::new(
        r"[0-9]{1,2}(?::[0-9]{2})?\s*(?i:am|pm)?(?:\s*[-–—]\s*[0-9]{1,2}(?::[0-9]{2})?\s*(?i:am|pm)?)?",
    )
    .unwrap_or_else(|e| panic!("Invalid time regex: {e}"))
});

static LEADING_SEPARATORS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[:\-\s]+").unwrap_or_else(|e| panic!("Invalid separator regex: {e}"))
});

static LEADING_BULLET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[*•-]\s+").unwrap_or_else(|e| panic!("Invalid bullet regex: {e}"))
});

/// A task recognized on a line, before it is given an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Day the task belongs to.
    pub day: DayLabel,
    /// Time or time range as written.
    pub time: String,
    /// Cleaned task description.
    pub task: String,
}

/// What a line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Consumed, contributes nothing.
    Ignore,
    /// A day header; later task lines belong to this day.
    SetDay(DayLabel),
    /// A complete task.
    Emit(TaskDraft),
}

/// The line rules, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Empty lines.
    Blank,
    /// A `Day,Time...` CSV column header.
    ColumnHeader,
    /// A self-contained `day, time, task` row.
    CsvRow,
    /// A short line naming a weekday or "Day N".
    DayHeader,
    /// A line with a clock time under the current day.
    TimedLine,
}

impl Rule {
    /// All rules in the order they are tried.
    pub const PIPELINE: [Self; 5] = [
        Self::Blank,
        Self::ColumnHeader,
        Self::CsvRow,
        Self::DayHeader,
        Self::TimedLine,
    ];

    /// Short name for log output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::ColumnHeader => "column-header",
            Self::CsvRow => "csv-row",
            Self::DayHeader => "day-header",
            Self::TimedLine => "timed-line",
        }
    }

    /// Try this rule on a trimmed line. `None` means the rule does not apply.
    #[must_use]
    pub fn apply(self, line: &str, current_day: Option<&DayLabel>) -> Option<Outcome> {
        match self {
            Self::Blank => line.is_empty().then_some(Outcome::Ignore),
            Self::ColumnHeader => line
                .get(..8)
                .is_some_and(|head| head.eq_ignore_ascii_case("day,time"))
                .then_some(Outcome::Ignore),
            Self::CsvRow => csv_row(line),
            Self::DayHeader => day_header(line).map(Outcome::SetDay),
            Self::TimedLine => current_day.and_then(|day| timed_line(line, day)),
        }
    }
}

/// Run the pipeline over one trimmed line.
///
/// Returns the deciding rule and its outcome, or `None` when no rule wants
/// the line and it is dropped.
#[must_use]
pub fn classify(line: &str, current_day: Option<&DayLabel>) -> Option<(Rule, Outcome)> {
    Rule::PIPELINE
        .iter()
        .find_map(|rule| rule.apply(line, current_day).map(|outcome| (*rule, outcome)))
}

fn csv_row(line: &str) -> Option<Outcome> {
    let caps = CSV_ROW.captures(line)?;
    let day = caps.get(1)?.as_str().trim();
    let time = caps.get(2)?.as_str().trim();
    let task = unquote_csv(caps.get(3)?.as_str().trim());

    if task.is_empty() {
        return Some(Outcome::Ignore);
    }

    Some(Outcome::Emit(TaskDraft {
        day: DayLabel::from(day.to_string()),
        time: time.to_string(),
        task,
    }))
}

/// Strip wrapping double quotes and unescape doubled inner quotes.
fn unquote_csv(value: &str) -> String {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .map_or_else(|| value.to_string(), |inner| inner.replace("\"\"", "\""))
}

fn day_header(line: &str) -> Option<DayLabel> {
    if line.encode_utf16().count() >= MAX_DAY_HEADER_CHARS || line.contains(',') {
        return None;
    }

    let cleaned = line.replace(['*', '#', '_'], "");
    let cleaned = cleaned.trim();

    DayLabel::weekday_prefix_of(cleaned).or_else(|| {
        let caps = ORDINAL_HEADER.captures(cleaned)?;
        let found = caps.get(0)?.as_str();
        Some(DayLabel::from_ordinal_digits(caps.get(1)?.as_str(), found))
    })
}

fn timed_line(line: &str, day: &DayLabel) -> Option<Outcome> {
    let found = TIME_PATTERN.find(line)?;
    let time = found.as_str().trim();

    let mut rest = String::with_capacity(line.len());
    rest.push_str(&line[..found.start()]);
    rest.push_str(&line[found.end()..]);

    let task = clean_task_text(&rest);
    if task.is_empty() {
        return Some(Outcome::Ignore);
    }

    Some(Outcome::Emit(TaskDraft {
        day: day.clone(),
        time: time.to_string(),
        task,
    }))
}

/// Remove separators, a list bullet, and `**` emphasis from task text.
fn clean_task_text(text: &str) -> String {
    let text = LEADING_SEPARATORS.replace(text, "");
    let text = LEADING_BULLET.replace(&text, "");
    text.replace("**", "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    const MONDAY: DayLabel = DayLabel::Weekday(Weekday::Mon);

    fn draft(outcome: Option<Outcome>) -> TaskDraft {
        match outcome {
            Some(Outcome::Emit(draft)) => draft,
            other => panic!("Expected a task, got {other:?}"),
        }
    }

    // ==========
    // Blank rule
    // ==========

    #[test]
    fn test_blank_only_matches_empty() {
        assert_eq!(Rule::Blank.apply("", None), Some(Outcome::Ignore));
        assert_eq!(Rule::Blank.apply("x", None), None);
    }

    // ==================
    // Column header rule
    // ==================

    #[test]
    fn test_column_header_any_case() {
        for line in ["Day,Time Slot,Task", "DAY,TIME", "day,time,task"] {
            assert_eq!(Rule::ColumnHeader.apply(line, None), Some(Outcome::Ignore));
        }
    }

    #[test]
    fn test_column_header_needs_exact_prefix() {
        assert_eq!(Rule::ColumnHeader.apply("Day, Time, Task", None), None);
        assert_eq!(Rule::ColumnHeader.apply("Day", None), None);
    }

    // ============
    // CSV row rule
    // ============

    #[test]
    fn test_csv_row_quoted_task() {
        let task = draft(Rule::CsvRow.apply(
            r#"Day 1, 7:00 PM - 9:00 PM, "Install tools, then test""#,
            None,
        ));
        assert_eq!(task.day, DayLabel::Ordinal(1));
        assert_eq!(task.day.to_string(), "Day 1");
        assert_eq!(task.time, "7:00 PM - 9:00 PM");
        assert_eq!(task.task, "Install tools, then test");
    }

    #[test]
    fn test_csv_row_unescapes_doubled_quotes() {
        let task = draft(Rule::CsvRow.apply(r#"Friday, 6pm, "Watch ""Heat"" again""#, None));
        assert_eq!(task.task, r#"Watch "Heat" again"#);
    }

    #[test]
    fn test_csv_row_unquoted_task_keeps_inner_commas() {
        let task = draft(Rule::CsvRow.apply("Tuesday,9am,Math, then physics", None));
        assert_eq!(task.day, DayLabel::Weekday(Weekday::Tue));
        assert_eq!(task.time, "9am");
        assert_eq!(task.task, "Math, then physics");
    }

    #[test]
    fn test_csv_row_free_word_day() {
        let task = draft(Rule::CsvRow.apply("Weekend, all day, Hike", None));
        assert_eq!(task.day, DayLabel::Named("Weekend".to_string()));
        assert_eq!(task.time, "all day");
    }

    #[test]
    fn test_csv_row_needs_three_fields() {
        assert_eq!(Rule::CsvRow.apply("Monday, meeting", None), None);
    }

    #[test]
    fn test_csv_row_day_token_must_be_one_word() {
        assert_eq!(Rule::CsvRow.apply("Day1, 9am, Math", None), None);
        assert_eq!(Rule::CsvRow.apply("Next week, 9am, Math", None), None);
    }

    #[test]
    fn test_csv_row_day_word_is_ascii_only() {
        // Kelvin sign and long s fold to ASCII letters under Unicode rules.
        assert_eq!(Rule::CsvRow.apply("\u{212A}elvin, 9am, Lab", None), None);
        assert_eq!(Rule::CsvRow.apply("\u{17F}unday, 9am, Rest", None), None);
        assert!(Rule::CsvRow.apply("KELVIN, 9am, Lab", None).is_some());
    }

    #[test]
    fn test_csv_row_empty_task_is_consumed() {
        assert_eq!(Rule::CsvRow.apply("Monday, 9am,", None), Some(Outcome::Ignore));
    }

    // ===============
    // Day header rule
    // ===============

    #[test]
    fn test_day_header_case_insensitive_weekdays() {
        for line in ["monday", "Monday", "MONDAY"] {
            assert_eq!(day_header(line), Some(MONDAY));
        }
    }

    #[test]
    fn test_day_header_strips_markdown() {
        assert_eq!(day_header("## **Thursday**"), Some(DayLabel::Weekday(Weekday::Thu)));
        assert_eq!(day_header("__Day 4__"), Some(DayLabel::Ordinal(4)));
    }

    #[test]
    fn test_day_header_prefix_match() {
        assert_eq!(day_header("Saturday (rest)"), Some(DayLabel::Weekday(Weekday::Sat)));
        assert_eq!(day_header("day 12: exams"), Some(DayLabel::Ordinal(12)));
    }

    #[test]
    fn test_day_header_rejects_commas() {
        assert_eq!(day_header("Monday, meeting"), None);
    }

    #[test]
    fn test_day_header_rejects_long_lines() {
        let line = "Monday is when I do the long weekly review";
        assert!(line.chars().count() >= MAX_DAY_HEADER_CHARS);
        assert_eq!(day_header(line), None);
    }

    #[test]
    fn test_day_header_length_boundary() {
        let longest = format!("Monday {}", "x".repeat(22));
        assert_eq!(longest.len(), MAX_DAY_HEADER_CHARS - 1);
        assert_eq!(day_header(&longest), Some(MONDAY));

        let too_long = format!("Monday {}", "x".repeat(23));
        assert_eq!(too_long.len(), MAX_DAY_HEADER_CHARS);
        assert_eq!(day_header(&too_long), None);
    }

    #[test]
    fn test_day_header_length_counts_utf16_units() {
        // Each emoji is one char but two UTF-16 units.
        let fits = format!("Monday {}", "🎉".repeat(11));
        assert_eq!(fits.encode_utf16().count(), 29);
        assert_eq!(day_header(&fits), Some(MONDAY));

        let too_long = format!("Monday {}", "🎉".repeat(12));
        assert!(too_long.chars().count() < MAX_DAY_HEADER_CHARS);
        assert_eq!(day_header(&too_long), None);
    }

    #[test]
    fn test_day_header_rejects_abbreviations() {
        assert_eq!(day_header("Mon"), None);
        assert_eq!(day_header("Day"), None);
    }

    // ===============
    // Timed line rule
    // ===============

    #[test]
    fn test_timed_line_needs_current_day() {
        assert_eq!(Rule::TimedLine.apply("9am Math homework", None), None);
    }

    #[test]
    fn test_timed_line_simple() {
        let task = draft(Rule::TimedLine.apply("9am Math homework", Some(&MONDAY)));
        assert_eq!(task.day, MONDAY);
        assert_eq!(task.time, "9am");
        assert_eq!(task.task, "Math homework");
    }

    #[test]
    fn test_timed_line_bullet_and_emphasis() {
        let tuesday = DayLabel::Weekday(Weekday::Tue);
        let task = draft(Rule::TimedLine.apply("- **10:00-11:00** Review notes", Some(&tuesday)));
        assert_eq!(task.time, "10:00-11:00");
        assert_eq!(task.task, "Review notes");
    }

    #[test]
    fn test_timed_line_range_with_dashes() {
        let task = draft(Rule::TimedLine.apply("7:00 PM – 9:00 PM: Study group", Some(&MONDAY)));
        assert_eq!(task.time, "7:00 PM – 9:00 PM");
        assert_eq!(task.task, "Study group");

        let task = draft(Rule::TimedLine.apply("8—9am gym", Some(&MONDAY)));
        assert_eq!(task.time, "8—9am");
        assert_eq!(task.task, "gym");
    }

    #[test]
    fn test_timed_line_time_after_text() {
        let task = draft(Rule::TimedLine.apply("• Lunch with Sam 12:30pm", Some(&MONDAY)));
        assert_eq!(task.time, "12:30pm");
        assert_eq!(task.task, "Lunch with Sam");
    }

    #[test]
    fn test_timed_line_first_match_wins() {
        let task = draft(Rule::TimedLine.apply("9am Read chapter 3", Some(&MONDAY)));
        assert_eq!(task.time, "9am");
        assert_eq!(task.task, "Read chapter 3");
    }

    #[test]
    fn test_timed_line_without_time_is_declined() {
        assert_eq!(Rule::TimedLine.apply("Call the dentist", Some(&MONDAY)), None);
    }

    #[test]
    fn test_timed_line_with_only_time_is_consumed() {
        assert_eq!(Rule::TimedLine.apply("10:30", Some(&MONDAY)), Some(Outcome::Ignore));
    }

    // ========
    // Pipeline
    // ========

    #[test]
    fn test_classify_csv_beats_header() {
        let (rule, _) = classify("Monday, 9am, Gym", None).unwrap();
        assert_eq!(rule, Rule::CsvRow);
    }

    #[test]
    fn test_classify_header_beats_timed_line() {
        // A short weekday line is a header even when it carries a time.
        let (rule, outcome) = classify("Monday 9am", Some(&DayLabel::Ordinal(1))).unwrap();
        assert_eq!(rule, Rule::DayHeader);
        assert_eq!(outcome, Outcome::SetDay(MONDAY));
    }

    #[test]
    fn test_classify_drops_unrecognized() {
        assert_eq!(classify("Monday, meeting", None), None);
        assert_eq!(classify("Some notes", None), None);
    }

    #[test]
    fn test_rule_names_are_distinct() {
        let mut names: Vec<&str> = Rule::PIPELINE.iter().map(|r| r.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Rule::PIPELINE.len());
    }
}
