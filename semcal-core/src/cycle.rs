//! The 4-week alternating cycle and which lessons are active on a date.
//!
//! Weeks alternate numerator/denominator parity, and a 4-week super-cycle
//! distinguishes the first and second occurrence of each parity, so the
//! phase of a date is `weeks_since_anchor mod 4`:
//!
//! | phase | week                |
//! |-------|---------------------|
//! | 0     | numerator, first    |
//! | 1     | denominator, first  |
//! | 2     | numerator, second   |
//! | 3     | denominator, second |

use chrono::NaiveDate;

use crate::lesson::{Lesson, WeekKind, WeekVariant};

/// The phase (0..=3) of `date` within the 4-week cycle starting at `anchor`.
///
/// Euclidean division keeps the phase on the same 4-week lattice for dates
/// before the anchor: the week immediately preceding it has phase 3.
pub fn phase_for(date: NaiveDate, anchor: NaiveDate) -> i64 {
    let days = (date - anchor).num_days();
    days.div_euclid(7).rem_euclid(4)
}

/// Whether `lesson` meets on `date` under the cycle anchored at `anchor`.
pub fn is_active(lesson: &Lesson, date: NaiveDate, anchor: NaiveDate) -> bool {
    let phase = phase_for(date, anchor);
    match (lesson.week_kind, lesson.week_variant) {
        (None | Some(WeekKind::Common), _) => true,
        (Some(WeekKind::Numerator), None | Some(WeekVariant::Both)) => phase == 0 || phase == 2,
        (Some(WeekKind::Numerator), Some(WeekVariant::First)) => phase == 0,
        (Some(WeekKind::Numerator), Some(WeekVariant::Second)) => phase == 2,
        (Some(WeekKind::Denominator), None | Some(WeekVariant::Both)) => phase == 1 || phase == 3,
        (Some(WeekKind::Denominator), Some(WeekVariant::First)) => phase == 1,
        (Some(WeekKind::Denominator), Some(WeekVariant::Second)) => phase == 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveTime};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn lesson(kind: Option<WeekKind>, variant: Option<WeekVariant>) -> Lesson {
        Lesson {
            number: 1,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            classroom: "3214".to_string(),
            title: "Физика".to_string(),
            week_kind: kind,
            week_variant: variant,
        }
    }

    #[test]
    fn test_phase_advances_weekly() {
        let anchor = d(2024, 9, 2);
        assert_eq!(phase_for(anchor, anchor), 0);
        assert_eq!(phase_for(d(2024, 9, 8), anchor), 0, "same week, same phase");
        assert_eq!(phase_for(d(2024, 9, 9), anchor), 1);
        assert_eq!(phase_for(d(2024, 9, 16), anchor), 2);
        assert_eq!(phase_for(d(2024, 9, 23), anchor), 3);
        assert_eq!(phase_for(d(2024, 9, 30), anchor), 0, "cycle wraps after 4 weeks");
    }

    #[test]
    fn test_phase_before_anchor_uses_floored_modulo() {
        let anchor = d(2024, 9, 2);
        assert_eq!(phase_for(d(2024, 9, 1), anchor), 3, "the day before is week -1");
        assert_eq!(phase_for(d(2024, 8, 26), anchor), 3);
        assert_eq!(phase_for(d(2024, 8, 19), anchor), 2);
        assert_eq!(phase_for(d(2024, 8, 5), anchor), 0);
    }

    #[test]
    fn test_common_and_unset_are_active_every_week() {
        let anchor = d(2024, 9, 2);
        for week in 0..8 {
            let date = anchor + Duration::weeks(week);
            assert!(is_active(&lesson(None, None), date, anchor));
            assert!(is_active(
                &lesson(Some(WeekKind::Common), Some(WeekVariant::Second)),
                date,
                anchor
            ));
        }
    }

    #[test]
    fn test_numerator_both_hits_phases_zero_and_two() {
        let anchor = d(2024, 9, 2);
        let l = lesson(Some(WeekKind::Numerator), Some(WeekVariant::Both));
        let active: Vec<i64> = (0..4)
            .filter(|&w| is_active(&l, anchor + Duration::weeks(w), anchor))
            .collect();
        assert_eq!(active, vec![0, 2], "exactly 2 of every 4 weeks, at phases 0 and 2");

        // An unset variant behaves like Both.
        let l = lesson(Some(WeekKind::Numerator), None);
        assert!(is_active(&l, anchor, anchor));
        assert!(is_active(&l, anchor + Duration::weeks(2), anchor));
        assert!(!is_active(&l, anchor + Duration::weeks(1), anchor));
    }

    #[test]
    fn test_numerator_first_anchor_2024_09_02() {
        let anchor = d(2024, 9, 2);
        let l = lesson(Some(WeekKind::Numerator), Some(WeekVariant::First));
        assert!(is_active(&l, d(2024, 9, 2), anchor), "phase 0");
        assert!(!is_active(&l, d(2024, 9, 9), anchor), "phase 1");
        assert!(!is_active(&l, d(2024, 9, 23), anchor), "phase 3");
        assert!(is_active(&l, d(2024, 9, 30), anchor), "phase 4 mod 4 = 0");
    }

    #[test]
    fn test_denominator_variants() {
        let anchor = d(2024, 9, 2);
        let phases = |kind, variant| -> Vec<i64> {
            let l = lesson(Some(kind), variant);
            (0..4)
                .filter(|&w| is_active(&l, anchor + Duration::weeks(w), anchor))
                .collect()
        };

        assert_eq!(phases(WeekKind::Denominator, None), vec![1, 3]);
        assert_eq!(phases(WeekKind::Denominator, Some(WeekVariant::Both)), vec![1, 3]);
        assert_eq!(phases(WeekKind::Denominator, Some(WeekVariant::First)), vec![1]);
        assert_eq!(phases(WeekKind::Denominator, Some(WeekVariant::Second)), vec![3]);
        assert_eq!(phases(WeekKind::Numerator, Some(WeekVariant::Second)), vec![2]);
    }
}
