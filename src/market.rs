use crate::calendar::{CalendarDay, DateStyler, DayCell};
use crate::theme::{BASE_STYLE, FADED_MARKET_STYLE, MARKET_DAY_STYLE, OTHER_MONTH_STYLE};
use ratatui::{style::Style, text::Span};
use time::{macros::date, Date};

/// Phase zero of the market-day cycle
pub(crate) const ANCHOR: Date = date!(2026 - 02 - 02);

/// Days from one market day to the next
pub(crate) const PERIOD: i64 = 3;

pub(crate) static BADGE: &str = "街";

pub(crate) static TITLE: &str = "街天日历";

pub(crate) static LEGEND: &str = "街天 (Market Day)";

/// "Every third day is a market day"
pub(crate) static CYCLE_NOTE: &str = "每隔两天一街";

pub(crate) fn is_market_day<D: CalendarDay + ?Sized>(date: &D) -> bool {
    (date.calendar_date() - ANCHOR)
        .whole_days()
        .rem_euclid(PERIOD)
        == 0
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct MarketDays;

impl DateStyler for MarketDays {
    fn day_style(&self, cell: &DayCell) -> Style {
        match (cell.is_current_month, is_market_day(&cell.date)) {
            (true, true) => MARKET_DAY_STYLE,
            (true, false) => BASE_STYLE,
            (false, _) => OTHER_MONTH_STYLE,
        }
    }

    fn badge(&self, cell: &DayCell) -> Option<Span<'static>> {
        is_market_day(&cell.date).then(|| {
            let style = if cell.is_current_month {
                MARKET_DAY_STYLE
            } else {
                FADED_MARKET_STYLE
            };
            Span::styled(BADGE, style)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::iter::successors;
    use time::macros::datetime;
    use time::Duration;

    fn sample_dates() -> impl Iterator<Item = Date> {
        successors(Some(date!(2024 - 11 - 20)), |d| d.next_day()).take(900)
    }

    #[test]
    fn test_anchor() {
        assert!(is_market_day(&ANCHOR));
        assert!(is_market_day(&date!(2026 - 02 - 02)));
    }

    #[test]
    fn test_around_anchor() {
        assert!(!is_market_day(&date!(2026 - 02 - 01)));
        assert!(!is_market_day(&date!(2026 - 01 - 31)));
        assert!(is_market_day(&date!(2026 - 01 - 30)));
        assert!(!is_market_day(&date!(2026 - 02 - 03)));
        assert!(!is_market_day(&date!(2026 - 02 - 04)));
        assert!(is_market_day(&date!(2026 - 02 - 05)));
        assert!(is_market_day(&date!(2026 - 03 - 01)));
    }

    #[test]
    fn test_ignores_time_of_day() {
        assert!(is_market_day(&datetime!(2026 - 02 - 02 23:59:59)));
        assert!(is_market_day(&datetime!(2026 - 02 - 05 00:00:01 +08:00)));
        assert!(!is_market_day(&datetime!(2026 - 02 - 03 00:00)));
    }

    #[test]
    fn test_periodic() {
        let three_days = Duration::days(3);
        for d in sample_dates() {
            assert_eq!(is_market_day(&d), is_market_day(&(d + three_days)), "{d}");
            assert_eq!(is_market_day(&d), is_market_day(&(d - three_days)), "{d}");
        }
    }

    #[test]
    fn test_one_in_three() {
        for d in sample_dates() {
            let qty = successors(Some(d), |d| d.next_day())
                .take(3)
                .filter(|d| is_market_day(d))
                .count();
            assert_eq!(qty, 1, "{d}");
        }
    }

    #[test]
    fn test_far_from_anchor() {
        // 2026-02-02 minus 3 * 246_000 days
        let d = date!(2026 - 02 - 02) - Duration::days(3 * 246_000);
        assert!(is_market_day(&d));
        assert!(!is_market_day(&d.next_day().unwrap()));
        assert!(!is_market_day(&d.previous_day().unwrap()));
    }

    #[test]
    fn test_styles() {
        let market = DayCell {
            date: date!(2026 - 02 - 02),
            is_current_month: true,
        };
        let plain = DayCell {
            date: date!(2026 - 02 - 03),
            is_current_month: true,
        };
        let padding_market = DayCell {
            date: date!(2026 - 01 - 30),
            is_current_month: false,
        };
        assert_eq!(MarketDays.day_style(&market), MARKET_DAY_STYLE);
        assert_eq!(MarketDays.day_style(&plain), BASE_STYLE);
        assert_eq!(MarketDays.day_style(&padding_market), OTHER_MONTH_STYLE);
        assert_eq!(
            MarketDays.badge(&market),
            Some(Span::styled(BADGE, MARKET_DAY_STYLE))
        );
        assert_eq!(MarketDays.badge(&plain), None);
        assert_eq!(
            MarketDays.badge(&padding_market),
            Some(Span::styled(BADGE, FADED_MARKET_STYLE))
        );
    }
}
