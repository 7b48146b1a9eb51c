//! Core types and transforms for the semcal timetable-to-calendar pipeline.
//!
//! This crate turns a raw timetable table (header + body rows, as dumped by
//! the fetch layer) into a normalized weekly template, decides which lessons
//! are active on a given date under the 4-week numerator/denominator cycle,
//! and renders the result as an `.ics` calendar for a term date range.
//!
//! The crate does no I/O: the caller supplies the table, the term range and
//! the cycle anchor, and receives the calendar text back.

pub mod cycle;
pub mod error;
pub mod ics;
pub mod lesson;
pub mod semester;
pub mod table;

// Re-export the main types at crate root for convenience
pub use error::{ScheduleError, ScheduleResult};
pub use ics::{generate_ics, IcsOptions};
pub use lesson::{Lesson, WeekKind, WeekTemplate, WeekVariant};
pub use table::{extract, CellBlock, DayCell, DayHeader, RawTable, TableLayout, TableRow};
