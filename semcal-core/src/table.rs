//! Extraction of the weekly template from a raw timetable table.
//!
//! The fetch layer hands us the table as structured rows: a header of day
//! labels and a body of rows, each with a compound time label and one day
//! cell per column. Day cells carry zero or more stacked blocks, each with
//! its classification tags and a `"classroom | title"` text payload.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::lesson::{weekday_by_name, Lesson, WeekKind, WeekTemplate, WeekVariant};

/// Which of the source's two table layouts the rows follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableLayout {
    /// One day column: every row belongs to the single header weekday.
    SingleDay,
    /// One column per weekday, Monday through Saturday.
    FullWeek,
}

/// A raw timetable table as dumped by the fetch layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTable {
    /// The semester heading shown above the table, when the dump carries it.
    #[serde(default)]
    pub semester: Option<String>,
    pub header: Vec<DayHeader>,
    pub rows: Vec<TableRow>,
}

/// One header entry: a day name, plus the calendar date string the source
/// shows next to it in the single-day layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayHeader {
    pub name: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// One body row: the compound time label and the day cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRow {
    pub time_label: String,
    #[serde(default)]
    pub cells: Vec<DayCell>,
}

/// One day cell, holding the stacked lesson blocks for that weekday/slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayCell {
    #[serde(default)]
    pub blocks: Vec<CellBlock>,
}

impl DayCell {
    /// The cell's combined text, for layouts that carry one entry per cell.
    fn text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.text.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One stacked entry inside a day cell: classification tags plus the
/// `"classroom | title"` payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CellBlock {
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub text: String,
}

/// Build the weekly template from a raw table.
///
/// Fails with [`ScheduleError::NotReady`] when the body has no rows or the
/// single-day header is missing; individual malformed cells degrade to
/// empty classroom/title, and rows whose time label cannot be parsed are
/// omitted.
pub fn extract(table: &RawTable, layout: TableLayout) -> ScheduleResult<WeekTemplate> {
    if table.rows.is_empty() {
        return Err(ScheduleError::NotReady);
    }

    let mut template = WeekTemplate::default();

    for row in &table.rows {
        let Some(slot) = parse_time_label(&row.time_label) else {
            continue;
        };

        match layout {
            TableLayout::SingleDay => {
                let header = table.header.first().ok_or(ScheduleError::NotReady)?;
                let day = weekday_by_name(&header.name)
                    .ok_or_else(|| ScheduleError::UnknownWeekday(header.name.clone()))?;

                let text = row.cells.first().map(DayCell::text).unwrap_or_default();
                let (classroom, title) = split_cell_text(&text);
                template.push(
                    day,
                    Lesson {
                        number: slot.number,
                        start_time: slot.start,
                        end_time: slot.end,
                        classroom,
                        title,
                        week_kind: None,
                        week_variant: None,
                    },
                );
            }
            TableLayout::FullWeek => {
                for (idx, cell) in row.cells.iter().enumerate() {
                    // A column with no matching header entry is skipped.
                    let Some(day) = table
                        .header
                        .get(idx)
                        .and_then(|h| weekday_by_name(&h.name))
                    else {
                        continue;
                    };

                    let entries: Vec<&CellBlock> = cell
                        .blocks
                        .iter()
                        .filter(|b| !b.text.trim().is_empty())
                        .collect();

                    if entries.is_empty() {
                        // Keep the slot anchored even when nothing is
                        // scheduled, so every weekday covers every slot.
                        template.push(
                            day,
                            Lesson {
                                number: slot.number,
                                start_time: slot.start,
                                end_time: slot.end,
                                classroom: String::new(),
                                title: String::new(),
                                week_kind: None,
                                week_variant: None,
                            },
                        );
                    } else {
                        for block in entries {
                            let (week_kind, week_variant) = week_marker(&block.classes);
                            let (classroom, title) = split_cell_text(block.text.trim());
                            template.push(
                                day,
                                Lesson {
                                    number: slot.number,
                                    start_time: slot.start,
                                    end_time: slot.end,
                                    classroom,
                                    title,
                                    week_kind,
                                    week_variant,
                                },
                            );
                        }
                    }
                }
            }
        }
    }

    Ok(template)
}

/// A parsed time label: the slot's ordinal and its start/end times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub number: u32,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Parse the compound time label of a body row.
///
/// The label is `'|'`-separated: slot name, start time, end time, with a
/// possible trailing empty piece. Merged multi-slot rows produce exactly six
/// pieces, of which pieces 3 and 4 are a redundant middle pair and are
/// dropped. The slot number is the leading digit of piece 0.
///
/// Returns `None` for labels that do not fit this shape; the caller omits
/// the row rather than inventing times.
pub fn parse_time_label(label: &str) -> Option<TimeSlot> {
    let mut pieces: Vec<&str> = label.split('|').collect();
    if pieces.len() == 6 {
        pieces.drain(3..5);
    }

    let number = pieces.first()?.trim_start().chars().next()?.to_digit(10)?;
    if number == 0 {
        return None;
    }
    let start = parse_hhmm(pieces.get(1)?)?;
    let end = parse_hhmm(pieces.get(2)?)?;
    if start >= end {
        return None;
    }

    Some(TimeSlot { number, start, end })
}

fn parse_hhmm(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()
}

/// Read the alternating-week marker off a block's classification tags.
///
/// A `type-N` tag (that is not a `type-num-*` tag) with suffix in {0,1,2}
/// gives the kind; a `type-num-N` tag with suffix in {0,1,2} gives the
/// variant. Anything else is ignored: a malformed tag never aborts the row.
pub fn week_marker(classes: &[String]) -> (Option<WeekKind>, Option<WeekVariant>) {
    let mut kind = None;
    let mut variant = None;

    for class in classes {
        if let Some(suffix) = class.strip_prefix("type-num-") {
            if let Some(v) = suffix.parse().ok().and_then(WeekVariant::from_index) {
                variant = Some(v);
            }
        } else if let Some(suffix) = class.strip_prefix("type-") {
            if let Some(k) = suffix.parse().ok().and_then(WeekKind::from_index) {
                kind = Some(k);
            }
        }
    }

    (kind, variant)
}

/// Split a cell's text payload on the literal `" | "` separator into
/// classroom and title. Text without the separator is all classroom.
fn split_cell_text(text: &str) -> (String, String) {
    if text.is_empty() {
        return (String::new(), String::new());
    }
    match text.split_once(" | ") {
        Some((classroom, title)) => (classroom.to_string(), title.to_string()),
        None => (text.to_string(), String::new()),
    }
}
