//! ICS calendar generation for a term date range.
//!
//! The emitter walks the range day by day, consults the weekly template and
//! the 4-week cycle, and writes one VEVENT per active lesson. Output is
//! deterministic: the UID is derived from group, date, slot and title, and
//! the DTSTAMP instant is supplied by the caller, so regenerating with the
//! same inputs is byte-identical.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc, Weekday};

use crate::cycle::is_active;
use crate::lesson::WeekTemplate;

/// Default title filter: this activity never belongs on the calendar.
pub const DEFAULT_EXCLUDED_TITLE: &str = "Военная подготовка";

/// Summary used for events whose lesson has no title.
pub const DEFAULT_PLACEHOLDER_SUMMARY: &str = "Занятие";

pub const DEFAULT_PROD_ID: &str = "-//semcal//EN";

/// Knobs for calendar generation.
#[derive(Debug, Clone)]
pub struct IcsOptions {
    /// Lessons whose title contains any of these substrings are skipped.
    pub exclude_titles: Vec<String>,
    /// SUMMARY fallback for titled-less lessons that still have a classroom.
    pub placeholder_summary: String,
    pub prod_id: String,
    /// The DTSTAMP instant. Passed in rather than sampled here so callers
    /// (and tests) control it and output stays reproducible.
    pub timestamp: DateTime<Utc>,
}

impl IcsOptions {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        IcsOptions {
            exclude_titles: vec![DEFAULT_EXCLUDED_TITLE.to_string()],
            placeholder_summary: DEFAULT_PLACEHOLDER_SUMMARY.to_string(),
            prod_id: DEFAULT_PROD_ID.to_string(),
            timestamp,
        }
    }
}

/// Render the weekly template over `start..=end` as an ICS document.
///
/// Sundays are never visited (the source table has no Sunday column).
/// Empty slots and excluded titles produce no events; everything else is
/// gated by [`is_active`] against `anchor`.
pub fn generate_ics(
    template: &WeekTemplate,
    start: NaiveDate,
    end: NaiveDate,
    anchor: NaiveDate,
    group: &str,
    options: &IcsOptions,
) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("BEGIN:VCALENDAR".to_string());
    lines.push("VERSION:2.0".to_string());
    lines.push(format!("PRODID:{}", options.prod_id));

    let dtstamp = options.timestamp.naive_utc().format("%Y%m%dT%H%M%S");

    for date in start.iter_days().take_while(|d| *d <= end) {
        if date.weekday() == Weekday::Sun {
            continue;
        }
        for lesson in template.lessons_for(date.weekday()) {
            if lesson.is_empty_slot() || is_excluded(&lesson.title, &options.exclude_titles) {
                continue;
            }
            if !is_active(lesson, date, anchor) {
                continue;
            }

            let dt_start = date.and_time(lesson.start_time);
            let dt_end = date.and_time(lesson.end_time);

            lines.push("BEGIN:VEVENT".to_string());
            lines.push(format!("UID:{}", event_uid(group, date, lesson.number, &lesson.title)));
            lines.push(format!("DTSTAMP:{}", dtstamp));
            lines.push(format!("DTSTART:{}", format_dt(dt_start)));
            lines.push(format!("DTEND:{}", format_dt(dt_end)));
            let summary = if lesson.title.is_empty() {
                options.placeholder_summary.as_str()
            } else {
                lesson.title.as_str()
            };
            lines.push(format!("SUMMARY:{}", summary));
            if !lesson.classroom.is_empty() {
                lines.push(format!("LOCATION:{}", lesson.classroom));
            }
            if !group.is_empty() {
                lines.push(format!("DESCRIPTION:Группа {}", group));
            }
            lines.push("END:VEVENT".to_string());
        }
    }

    lines.push("END:VCALENDAR".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn is_excluded(title: &str, patterns: &[String]) -> bool {
    patterns
        .iter()
        .any(|p| !p.is_empty() && title.contains(p.as_str()))
}

/// Stable event identifier: group, date, slot and title, space-free.
fn event_uid(group: &str, date: NaiveDate, number: u32, title: &str) -> String {
    format!("{}-{}-{}-{}", group, date.format("%Y-%m-%d"), number, title).replace(' ', "-")
}

/// Local naive date-time in the compact ICS form, no timezone suffix.
fn format_dt(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}
