// ABOUTME: Places each week's sessions on calendar days
// ABOUTME: Constant day-offset tables keyed by sessions per week, Monday = 0
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Days, NaiveDate};

/// Mon, Thu, Sun
const THREE_SESSIONS: &[u32] = &[0, 3, 6];
/// Mon, Wed, Fri, Sun
const FOUR_SESSIONS: &[u32] = &[0, 2, 4, 6];
/// Mon, Wed, Thu, Sat, Sun
const FIVE_SESSIONS: &[u32] = &[0, 2, 3, 5, 6];
/// Mon, Tue, Wed, Fri, Sat, Sun
const SIX_SESSIONS: &[u32] = &[0, 1, 2, 4, 5, 6];

/// Day offsets within a week for a session count
///
/// Unmapped counts fall back to the four-session table.
#[must_use]
pub const fn day_offsets(sessions_per_week: u32) -> &'static [u32] {
    match sessions_per_week {
        3 => THREE_SESSIONS,
        5 => FIVE_SESSIONS,
        6 => SIX_SESSIONS,
        _ => FOUR_SESSIONS,
    }
}

/// First day of `week_number` (1-based)
#[must_use]
pub fn week_start(plan_start: NaiveDate, week_number: u32) -> NaiveDate {
    add_days(plan_start, u64::from(week_number.saturating_sub(1)) * 7)
}

/// Calendar date of session `slot` (0-based) in `week_number`
///
/// Slots beyond the table wrap around it.
#[must_use]
pub fn session_date(
    plan_start: NaiveDate,
    week_number: u32,
    sessions_per_week: u32,
    slot: usize,
) -> NaiveDate {
    let offsets = day_offsets(sessions_per_week);
    let offset = offsets[slot % offsets.len()];
    add_days(week_start(plan_start, week_number), u64::from(offset))
}

fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_by_session_count() {
        assert_eq!(day_offsets(3), &[0, 3, 6]);
        assert_eq!(day_offsets(4), &[0, 2, 4, 6]);
        assert_eq!(day_offsets(5), &[0, 2, 3, 5, 6]);
        assert_eq!(day_offsets(6), &[0, 1, 2, 4, 5, 6]);
        assert_eq!(day_offsets(2), &[0, 2, 4, 6]);
    }

    #[test]
    fn test_session_dates() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(session_date(start, 1, 4, 0), start);
        assert_eq!(
            session_date(start, 2, 4, 3),
            NaiveDate::from_ymd_opt(2026, 1, 18).unwrap()
        );
    }
}
