//! Date scheduling: salary-day selection, weekday snapping, month
//! arithmetic, and the per-month transaction-budget spread.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::rng::SeededRng;

// Salary-day window and its weighting: most payrolls land on the 1st-3rd.
const SALARY_EARLY_RANGE: (u32, u32, f64) = (1, 3, 0.6);
const SALARY_LATE_RANGE: (u32, u32, f64) = (4, 5, 0.4);
pub(crate) const SALARY_WINDOW_MIN_DAY: u32 = 1;
pub(crate) const SALARY_WINDOW_MAX_DAY: u32 = 5;

pub(crate) fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Saturday and Sunday snap back to Friday.
pub(crate) fn previous_weekday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sun => date - Duration::days(2),
        Weekday::Sat => date - Duration::days(1),
        _ => date,
    }
}

pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}

pub(crate) fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}

/// Calendar months spanned by the inclusive range, counting both endpoints'
/// months.
pub(crate) fn month_span(start: NaiveDate, end: NaiveDate) -> u32 {
    let diff = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32 + 1;
    diff.max(1) as u32
}

/// Weighted salary-day pick inside `[min_day, max_day]`: the 1-3 sub-range
/// carries 60% of the mass, 4-5 the rest. Ranges outside the window drop out;
/// an empty intersection falls back to the window's first day.
fn pick_salary_day(min_day: u32, max_day: u32, rng: &mut SeededRng) -> u32 {
    let mut ranges: Vec<(u32, u32, f64)> = Vec::with_capacity(2);
    for (start, end, weight) in [SALARY_EARLY_RANGE, SALARY_LATE_RANGE] {
        let range_start = start.max(min_day);
        let range_end = end.min(max_day);
        if range_start <= range_end {
            ranges.push((range_start, range_end, weight));
        }
    }

    if ranges.is_empty() {
        return min_day;
    }

    let total: f64 = ranges.iter().map(|(_, _, weight)| weight).sum();
    let mut target = rng.next_f64() * total;
    for (start, end, weight) in &ranges {
        if target < *weight {
            return rng.random_int(*start as i64, *end as i64) as u32;
        }
        target -= weight;
    }

    let (start, end, _) = ranges[ranges.len() - 1];
    rng.random_int(start as i64, end as i64) as u32
}

/// Snaps a salary date to a qualifying weekday inside its day-of-month
/// window: keep it if it already qualifies, scan forward, then backward (never
/// below the minimum day), then the whole window, and as the terminal fallback
/// return the window's first day. Total by construction.
fn snap_salary_date(date: NaiveDate, min_day: u32, max_day: u32) -> NaiveDate {
    let year = date.year();
    let month = date.month();
    let within = |candidate: NaiveDate| {
        candidate.year() == year
            && candidate.month() == month
            && candidate.day() >= min_day
            && candidate.day() <= max_day
    };

    if within(date) && is_weekday(date) {
        return date;
    }

    let mut forward = date;
    while within(forward) {
        if is_weekday(forward) {
            return forward;
        }
        forward += Duration::days(1);
    }

    let mut backward = date - Duration::days(1);
    while within(backward) && backward.day() >= min_day {
        if is_weekday(backward) {
            return backward;
        }
        backward -= Duration::days(1);
    }

    for day in min_day..=max_day {
        if let Some(candidate) = NaiveDate::from_ymd_opt(year, month, day) {
            if is_weekday(candidate) {
                return candidate;
            }
        }
    }

    NaiveDate::from_ymd_opt(year, month, min_day).unwrap_or(date)
}

/// One salary date per covered month, walking backward from the end month.
/// Boundary months narrow the day window: the start month lifts the minimum
/// to the start day (or skips the month entirely when the range begins after
/// the window), the end month caps the maximum at the end day.
pub(crate) fn salary_dates(
    duration_months: u32,
    end_date: NaiveDate,
    start_date: Option<NaiveDate>,
    rng: &mut SeededRng,
) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(duration_months as usize);

    for offset in (0..duration_months as i32).rev() {
        let month_date = shift_month(end_date, -offset);
        let is_end_month =
            month_date.year() == end_date.year() && month_date.month() == end_date.month();
        let is_start_month = start_date
            .map(|start| start.year() == month_date.year() && start.month() == month_date.month())
            .unwrap_or(false);

        let mut min_day = SALARY_WINDOW_MIN_DAY;
        let mut max_day = SALARY_WINDOW_MAX_DAY;

        if is_start_month {
            let start_day = start_date.map(|start| start.day()).unwrap_or(min_day);
            if start_day <= SALARY_WINDOW_MAX_DAY {
                min_day = start_day.max(SALARY_WINDOW_MIN_DAY);
            } else {
                // Window opens past the salary days: this month has no credit.
                continue;
            }
        }
        if is_end_month {
            max_day = max_day.min(end_date.day());
        }
        max_day = max_day.max(min_day);

        let day = pick_salary_day(min_day, max_day, rng);
        let date = NaiveDate::from_ymd_opt(month_date.year(), month_date.month(), day)
            .unwrap_or(month_date);
        dates.push(snap_salary_date(date, min_day, max_day));
    }

    dates
}

/// Spreads `remaining` transactions across the months evenly; the remainder
/// of the division lands on the earliest months first.
pub(crate) fn allocate_across_months(remaining: u32, months: usize) -> Vec<u32> {
    if months == 0 {
        return Vec::new();
    }
    let per_month = remaining / months as u32;
    let mut extra = remaining % months as u32;
    (0..months)
        .map(|_| {
            if extra > 0 {
                extra -= 1;
                per_month + 1
            } else {
                per_month
            }
        })
        .collect()
}
