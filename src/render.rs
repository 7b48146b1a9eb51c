//! Plain-text rendering of the weekly template.

use std::fmt::Write;

use chrono::Weekday;
use semcal_core::lesson::weekday_name;
use semcal_core::WeekTemplate;

/// One day's schedule as the classic per-line report.
pub fn day_report(template: &WeekTemplate, day: Weekday) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", weekday_name(day));

    let lessons = template.lessons_for(day);
    if lessons.is_empty() {
        out.push_str("  (нет занятий)\n");
        return out;
    }
    for lesson in lessons {
        let _ = writeln!(out, "  {}", lesson);
    }
    out
}

/// The whole week, Monday through Saturday.
pub fn week_report(template: &WeekTemplate) -> String {
    [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ]
    .iter()
    .map(|day| day_report(template, *day))
    .collect::<Vec<_>>()
    .join("\n")
}
