//! Parsing of the semester heading shown above the timetable.
//!
//! The heading reads `"<semester title>. <current week label>"`; the week
//! label prefix encodes which phase of the 4-week cycle the current week is,
//! which the glue layer can use as a hint when no explicit anchor is given.

use serde::{Deserialize, Serialize};

/// The semester heading, split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterInfo {
    pub title: String,
    pub week_name: String,
    /// Current cycle phase (0..=3) when the week label is recognized.
    pub week_type: Option<u8>,
}

/// Split a semester heading into title, week label and phase hint.
///
/// The source appends two formatting characters to the title, which are
/// dropped. Unrecognized week labels leave `week_type` unset.
pub fn parse_semester_heading(text: &str) -> SemesterInfo {
    let (title, week_name) = match text.split_once('.') {
        Some((title, week_name)) => (title, week_name),
        None => (text, ""),
    };

    let week_type = if week_name.starts_with("1-й ч") {
        Some(0)
    } else if week_name.starts_with("1-й з") {
        Some(1)
    } else if week_name.starts_with("2-й ч") {
        Some(2)
    } else if week_name.starts_with("2-й з") {
        Some(3)
    } else {
        None
    };

    let mut title_chars: Vec<char> = title.chars().collect();
    if title_chars.len() >= 2 {
        title_chars.truncate(title_chars.len() - 2);
    }

    SemesterInfo {
        title: title_chars.into_iter().collect(),
        week_name: week_name.to_string(),
        week_type,
    }
}
