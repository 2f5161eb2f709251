use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Number of Monday..Friday dates in `start..=end`. Zero when `end < start`.
pub fn business_days(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }

    let total = (end - start).num_days() + 1;
    let full_weeks = total / 7;
    let mut count = full_weeks * 5;

    let tail_start = start + Duration::weeks(full_weeks);
    for offset in 0..(total % 7) {
        if !is_weekend(tail_start + Duration::days(offset)) {
            count += 1;
        }
    }

    count as u32
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_weekday_counts_once() {
        // 2026-01-05 is a Monday
        assert_eq!(business_days(day(2026, 1, 5), day(2026, 1, 5)), 1);
    }

    #[test]
    fn weekend_only_range_is_zero() {
        assert_eq!(business_days(day(2026, 1, 10), day(2026, 1, 11)), 0);
    }

    #[test]
    fn spans_weekends() {
        // Friday through the following Tuesday
        assert_eq!(business_days(day(2026, 1, 9), day(2026, 1, 13)), 3);
        // Two whole weeks starting on a Wednesday
        assert_eq!(business_days(day(2026, 1, 7), day(2026, 1, 20)), 10);
    }

    #[test]
    fn reversed_range_is_zero() {
        assert_eq!(business_days(day(2026, 1, 13), day(2026, 1, 9)), 0);
    }

    #[test]
    fn matches_day_by_day_count() {
        let start = day(2025, 12, 17);
        for len in 0..40 {
            let end = start + Duration::days(len);
            let expected = (0..=len)
                .filter(|offset| !is_weekend(start + Duration::days(*offset)))
                .count() as u32;
            assert_eq!(business_days(start, end), expected, "len {len}");
        }
    }
}
