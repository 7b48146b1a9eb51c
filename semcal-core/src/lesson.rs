//! The normalized lesson model and the weekly template it lives in.

use std::fmt;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Which alternating-week parity a lesson belongs to.
///
/// The institution alternates two nominal week types every other calendar
/// week; `Common` (and an absent marker) means the lesson meets every week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekKind {
    Common,
    Numerator,
    Denominator,
}

impl WeekKind {
    /// Map a classification-tag suffix to a kind. Suffixes outside {0,1,2}
    /// are not a kind tag.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(WeekKind::Common),
            1 => Some(WeekKind::Numerator),
            2 => Some(WeekKind::Denominator),
            _ => None,
        }
    }
}

/// Which of the two matching weeks inside the 4-week cycle a lesson meets on.
///
/// A numerator (or denominator) week occurs twice per 4-week cycle; the
/// variant selects the first, the second, or both occurrences. Only
/// meaningful together with a parity [`WeekKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekVariant {
    Both,
    First,
    Second,
}

impl WeekVariant {
    /// Map a numbered-occurrence tag suffix to a variant. Suffixes outside
    /// {0,1,2} are not a variant tag.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(WeekVariant::Both),
            1 => Some(WeekVariant::First),
            2 => Some(WeekVariant::Second),
            _ => None,
        }
    }
}

/// One scheduled class occurrence within the weekly template.
///
/// A lesson with an empty `title` and an empty `classroom` is a genuinely
/// empty slot: it anchors the time slot in the template but never produces
/// a calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    /// 1-based ordinal position of the slot in the day.
    pub number: u32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub classroom: String,
    pub title: String,
    /// `None` means unset: the lesson meets every week.
    pub week_kind: Option<WeekKind>,
    /// Ignored unless `week_kind` is a parity kind.
    pub week_variant: Option<WeekVariant>,
}

impl Lesson {
    /// Whether this record represents "nothing scheduled" for its slot.
    pub fn is_empty_slot(&self) -> bool {
        self.title.is_empty() && self.classroom.is_empty()
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} - {} | {:6} | {}",
            self.number,
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M"),
            self.classroom,
            self.title
        )
    }
}

/// The weekly template: an ordered lesson list per weekday, Monday through
/// Saturday. The source table never has a Sunday column.
///
/// Built once by [`crate::table::extract`] and read-only thereafter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekTemplate {
    days: [Vec<Lesson>; 6],
}

impl WeekTemplate {
    /// Lessons scheduled on `day`, in slot order. Sunday yields an empty
    /// slice.
    pub fn lessons_for(&self, day: Weekday) -> &[Lesson] {
        match day_index(day) {
            Some(i) => &self.days[i],
            None => &[],
        }
    }

    pub(crate) fn push(&mut self, day: Weekday, lesson: Lesson) {
        if let Some(i) = day_index(day) {
            self.days[i].push(lesson);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|d| d.is_empty())
    }
}

/// Monday..Sunday in template order, paired with the source's day names.
pub const DAY_NAMES: [(&str, Weekday); 7] = [
    ("Понедельник", Weekday::Mon),
    ("Вторник", Weekday::Tue),
    ("Среда", Weekday::Wed),
    ("Четверг", Weekday::Thu),
    ("Пятница", Weekday::Fri),
    ("Суббота", Weekday::Sat),
    ("Воскресенье", Weekday::Sun),
];

/// Look up a weekday by its name as it appears in the table header.
pub fn weekday_by_name(name: &str) -> Option<Weekday> {
    DAY_NAMES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, day)| *day)
}

/// The table's name for a weekday.
pub fn weekday_name(day: Weekday) -> &'static str {
    DAY_NAMES
        .iter()
        .find(|(_, d)| *d == day)
        .map(|(n, _)| *n)
        .unwrap_or("")
}

fn day_index(day: Weekday) -> Option<usize> {
    let i = day.num_days_from_monday() as usize;
    (i < 6).then_some(i)
}
