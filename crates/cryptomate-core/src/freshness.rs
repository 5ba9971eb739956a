//! Gating for upstream bar refreshes.
//!
//! A refresh asks the backend to hit the upstream market-data provider, so
//! it is suppressed while the stored series is already current: less than a
//! full UTC day elapsed since the last bar (inclusive at zero).

use crate::domain::{Bar, Day};

/// True when an upstream fetch would be redundant. A last bar dated today or
/// in the future disables fetching; one or more whole days elapsed enables
/// it.
pub fn fetch_disabled(last_bar_day: Day, today: Day) -> bool {
    today.whole_days_since(last_bar_day) <= 0
}

/// Series-level form; an empty series never suppresses a fetch.
pub fn series_fetch_disabled(bars: &[Bar], today: Day) -> bool {
    bars.last()
        .map(|bar| fetch_disabled(bar.day, today))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(input: &str) -> Day {
        Day::parse(input).expect("test day")
    }

    #[test]
    fn same_day_disables_fetch() {
        assert!(fetch_disabled(day("2024-03-09"), day("2024-03-09")));
    }

    #[test]
    fn one_day_elapsed_enables_fetch() {
        assert!(!fetch_disabled(day("2024-03-09"), day("2024-03-10")));
    }

    #[test]
    fn future_bar_disables_fetch() {
        assert!(fetch_disabled(day("2024-03-10"), day("2024-03-09")));
    }

    #[test]
    fn empty_series_enables_fetch() {
        assert!(!series_fetch_disabled(&[], day("2024-03-09")));
    }
}
