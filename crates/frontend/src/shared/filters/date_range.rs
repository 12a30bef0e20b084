use chrono::{Datelike, Days, Local, NaiveDate};
use contracts::shared::filters::DateRangeKind;

/// Financial year starts on April 1.
pub const FISCAL_YEAR_START_MONTH: u32 = 4;

/// Concrete date bounds produced from a symbolic range.
///
/// Both bounds are inclusive calendar days; `end` means "end of that day".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateBounds {
    /// Start date formatted for the wire (`YYYY-MM-DD`)
    pub fn start_string(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// End date formatted for the wire (`YYYY-MM-DD`)
    pub fn end_string(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

/// Resolve a symbolic date range against an explicit `today`.
///
/// Pure and deterministic: the fiscal-year boundary and all "last N days"
/// windows are computed from the `today` argument, never from a cached
/// clock. Use [`resolve_now`] at call sites that want the local calendar.
///
/// Policy for `CustomRange` with missing bounds: a missing start or end
/// defaults to `today`. There is no invalid-range error.
pub fn resolve(
    kind: DateRangeKind,
    custom_start: Option<NaiveDate>,
    custom_end: Option<NaiveDate>,
    today: NaiveDate,
) -> DateBounds {
    match kind {
        DateRangeKind::Today => DateBounds {
            start: today,
            end: today,
        },
        DateRangeKind::Yesterday => {
            let yesterday = days_back(today, 1);
            DateBounds {
                start: yesterday,
                end: yesterday,
            }
        }
        DateRangeKind::Last7Days => DateBounds {
            start: days_back(today, 6),
            end: today,
        },
        DateRangeKind::Last30Days => DateBounds {
            start: days_back(today, 29),
            end: today,
        },
        DateRangeKind::ThisMonth => DateBounds {
            start: month_start(today.year(), today.month()),
            end: today,
        },
        DateRangeKind::LastMonth => {
            let (year, month) = previous_month(today.year(), today.month());
            DateBounds {
                start: month_start(year, month),
                end: month_end(year, month),
            }
        }
        DateRangeKind::ThisMonthLastYear => {
            let year = today.year() - 1;
            DateBounds {
                start: month_start(year, today.month()),
                end: month_end(year, today.month()),
            }
        }
        DateRangeKind::ThisYear => DateBounds {
            start: month_start(today.year(), 1),
            end: today,
        },
        DateRangeKind::LastYear => DateBounds {
            start: month_start(today.year() - 1, 1),
            end: month_end(today.year() - 1, 12),
        },
        DateRangeKind::CurrentFinancialYear => DateBounds {
            start: month_start(fiscal_year_start(today), FISCAL_YEAR_START_MONTH),
            end: today,
        },
        DateRangeKind::LastFinancialYear => {
            let current_start = fiscal_year_start(today);
            DateBounds {
                start: month_start(current_start - 1, FISCAL_YEAR_START_MONTH),
                end: month_end(current_start, FISCAL_YEAR_START_MONTH - 1),
            }
        }
        DateRangeKind::CustomRange => DateBounds {
            start: custom_start.unwrap_or(today),
            end: custom_end.unwrap_or(today),
        },
    }
}

/// Resolve against the local calendar's current day.
pub fn resolve_now(
    kind: DateRangeKind,
    custom_start: Option<NaiveDate>,
    custom_end: Option<NaiveDate>,
) -> DateBounds {
    resolve(kind, custom_start, custom_end, Local::now().date_naive())
}

/// Year in which the financial year containing `today` begins.
fn fiscal_year_start(today: NaiveDate) -> i32 {
    if today.month() >= FISCAL_YEAR_START_MONTH {
        today.year()
    } else {
        today.year() - 1
    }
}

fn days_back(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days))
        .expect("date underflow")
}

fn month_start(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("invalid month start date")
}

/// Last calendar day of `year`/`month` (first day of the next month minus one).
fn month_end(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    days_back(month_start(next_year, next_month), 1)
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_start_never_after_end_for_symbolic_kinds() {
        let today = date(2025, 8, 28);
        for kind in DateRangeKind::all() {
            if *kind == DateRangeKind::CustomRange {
                continue;
            }
            let bounds = resolve(*kind, None, None, today);
            assert!(
                bounds.start <= bounds.end,
                "{:?}: {} > {}",
                kind,
                bounds.start,
                bounds.end
            );
        }
    }

    #[test]
    fn test_today_and_yesterday() {
        let today = date(2025, 8, 28);
        let bounds = resolve(DateRangeKind::Today, None, None, today);
        assert_eq!(bounds, DateBounds { start: today, end: today });

        let bounds = resolve(DateRangeKind::Yesterday, None, None, today);
        assert_eq!(bounds.start, date(2025, 8, 27));
        assert_eq!(bounds.end, date(2025, 8, 27));
    }

    #[test]
    fn test_yesterday_crosses_month_boundary() {
        let bounds = resolve(DateRangeKind::Yesterday, None, None, date(2025, 3, 1));
        assert_eq!(bounds.start, date(2025, 2, 28));
    }

    #[test]
    fn test_last_7_days_is_inclusive_window_of_seven() {
        let today = date(2025, 8, 28);
        let bounds = resolve(DateRangeKind::Last7Days, None, None, today);
        assert_eq!(bounds.start, date(2025, 8, 22));
        assert_eq!(bounds.end, today);
        assert_eq!((bounds.end - bounds.start).num_days() + 1, 7);
    }

    #[test]
    fn test_last_30_days_over_leap_february() {
        // 2024 is a leap year: 29 days back from March 1 lands on February 1
        let bounds = resolve(DateRangeKind::Last30Days, None, None, date(2024, 3, 1));
        assert_eq!(bounds.start, date(2024, 2, 1));
        // 2025 is not: the same window starts on January 31
        let bounds = resolve(DateRangeKind::Last30Days, None, None, date(2025, 3, 1));
        assert_eq!(bounds.start, date(2025, 1, 31));
    }

    #[test]
    fn test_this_month_ends_today() {
        let bounds = resolve(DateRangeKind::ThisMonth, None, None, date(2025, 8, 28));
        assert_eq!(bounds.start, date(2025, 8, 1));
        assert_eq!(bounds.end, date(2025, 8, 28));
    }

    #[test]
    fn test_last_month_from_january_lands_in_prior_december() {
        let bounds = resolve(DateRangeKind::LastMonth, None, None, date(2025, 1, 15));
        assert_eq!(bounds.start, date(2024, 12, 1));
        assert_eq!(bounds.end, date(2024, 12, 31));
    }

    #[test]
    fn test_last_month_february_leap_year() {
        let bounds = resolve(DateRangeKind::LastMonth, None, None, date(2024, 3, 10));
        assert_eq!(bounds.end, date(2024, 2, 29));
    }

    #[test]
    fn test_this_month_last_year_is_full_month() {
        let bounds = resolve(DateRangeKind::ThisMonthLastYear, None, None, date(2025, 2, 10));
        assert_eq!(bounds.start, date(2024, 2, 1));
        assert_eq!(bounds.end, date(2024, 2, 29));
    }

    #[test]
    fn test_year_ranges() {
        let today = date(2025, 8, 28);
        let bounds = resolve(DateRangeKind::ThisYear, None, None, today);
        assert_eq!(bounds.start, date(2025, 1, 1));
        assert_eq!(bounds.end, today);

        let bounds = resolve(DateRangeKind::LastYear, None, None, today);
        assert_eq!(bounds.start, date(2024, 1, 1));
        assert_eq!(bounds.end, date(2024, 12, 31));
    }

    #[test]
    fn test_financial_year_before_april_starts_previous_year() {
        let bounds = resolve(DateRangeKind::CurrentFinancialYear, None, None, date(2025, 3, 20));
        assert_eq!(bounds.start, date(2024, 4, 1));
        assert_eq!(bounds.end, date(2025, 3, 20));
    }

    #[test]
    fn test_financial_year_from_april_starts_same_year() {
        let bounds = resolve(DateRangeKind::CurrentFinancialYear, None, None, date(2025, 4, 1));
        assert_eq!(bounds.start, date(2025, 4, 1));

        let bounds = resolve(DateRangeKind::CurrentFinancialYear, None, None, date(2025, 11, 5));
        assert_eq!(bounds.start, date(2025, 4, 1));
    }

    #[test]
    fn test_last_financial_year() {
        // today in FY 2025/26 -> last FY is Apr 1 2024 .. Mar 31 2025
        let bounds = resolve(DateRangeKind::LastFinancialYear, None, None, date(2025, 8, 28));
        assert_eq!(bounds.start, date(2024, 4, 1));
        assert_eq!(bounds.end, date(2025, 3, 31));

        // today before the boundary -> last FY shifts back one more year
        let bounds = resolve(DateRangeKind::LastFinancialYear, None, None, date(2025, 2, 1));
        assert_eq!(bounds.start, date(2023, 4, 1));
        assert_eq!(bounds.end, date(2024, 3, 31));
    }

    #[test]
    fn test_custom_range_uses_given_bounds() {
        let bounds = resolve(
            DateRangeKind::CustomRange,
            Some(date(2025, 1, 1)),
            Some(date(2025, 1, 31)),
            date(2025, 8, 28),
        );
        assert_eq!(bounds.start, date(2025, 1, 1));
        assert_eq!(bounds.end, date(2025, 1, 31));
    }

    #[test]
    fn test_custom_range_missing_bounds_default_to_today() {
        let today = date(2025, 8, 28);
        let bounds = resolve(DateRangeKind::CustomRange, None, None, today);
        assert_eq!(bounds, DateBounds { start: today, end: today });

        let bounds = resolve(DateRangeKind::CustomRange, Some(date(2025, 8, 1)), None, today);
        assert_eq!(bounds.start, date(2025, 8, 1));
        assert_eq!(bounds.end, today);
    }

    #[test]
    fn test_wire_strings() {
        let bounds = resolve(DateRangeKind::LastMonth, None, None, date(2025, 1, 15));
        assert_eq!(bounds.start_string(), "2024-12-01");
        assert_eq!(bounds.end_string(), "2024-12-31");
    }
}
