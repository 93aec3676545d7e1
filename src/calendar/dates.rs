use super::grid::GRID_LEN;
use std::fmt;
use std::iter::successors;
use std::str::FromStr;
use thiserror::Error;
use time::{
    format_description::FormatItem, macros::format_description, parsing::Parsed, Date, Duration,
    Month, OffsetDateTime, PrimitiveDateTime, Weekday,
};

static YM_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]");

pub(crate) const DAYS_IN_WEEK: usize = 7;

const MONTHS_IN_YEAR: i32 = 12;

/// Column headers, Monday first
pub(crate) const WEEKDAY_LABELS: [&str; DAYS_IN_WEEK] = ["一", "二", "三", "四", "五", "六", "日"];

/// Anything that falls on a single calendar day.  Time-of-day components are
/// discarded.
pub(crate) trait CalendarDay {
    fn calendar_date(&self) -> Date;
}

impl CalendarDay for Date {
    fn calendar_date(&self) -> Date {
        *self
    }
}

impl CalendarDay for PrimitiveDateTime {
    fn calendar_date(&self) -> Date {
        self.date()
    }
}

impl CalendarDay for OffsetDateTime {
    fn calendar_date(&self) -> Date {
        self.date()
    }
}

pub(crate) trait WeekdayExt {
    /// Column of the weekday in a Monday-first week
    fn index0(&self) -> u16;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> u16 {
        self.number_days_from_monday().into()
    }
}

pub(crate) fn is_same_date<A, B>(a: &A, b: &B) -> bool
where
    A: CalendarDay + ?Sized,
    B: CalendarDay + ?Sized,
{
    let (a, b) = (a.calendar_date(), b.calendar_date());
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Renders the year and month of `date` as, e.g., `2026年  2月`
pub(crate) fn format_year_month<D: CalendarDay + ?Sized>(date: &D) -> String {
    let date = date.calendar_date();
    format!("{}年  {}月", date.year(), u8::from(date.month()))
}

/// A month whose entire grid, padding included, consists of representable
/// dates
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct YearMonth {
    first: Date,
    last: Date,
}

impl YearMonth {
    /// Construct the month `month0` (zero-based) of `year`.  Month indices
    /// outside `0..12` spill over into the neighbouring years, so that
    /// `YearMonth::new(2026, -1)` is December 2025 and `YearMonth::new(2026,
    /// 12)` is January 2027.
    pub(crate) fn new(year: i32, month0: i32) -> Result<YearMonth, OutOfTimeError> {
        let year = year
            .checked_add(month0.div_euclid(MONTHS_IN_YEAR))
            .ok_or(OutOfTimeError)?;
        let month = u8::try_from(month0.rem_euclid(MONTHS_IN_YEAR) + 1)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or(OutOfTimeError)?;
        YearMonth::from_calendar_month(year, month)
    }

    pub(crate) fn from_calendar_month(year: i32, month: Month) -> Result<YearMonth, OutOfTimeError> {
        let first = Date::from_calendar_date(year, month, 1).map_err(|_| OutOfTimeError)?;
        let last = successors(Some(first), |d| d.next_day().filter(|d2| d2.month() == month))
            .last()
            .unwrap_or(first);
        let lead = i64::from(first.weekday().index0());
        let trailing = i64::from(GRID_LEN) - lead - i64::from(last.day());
        if first.checked_sub(Duration::days(lead)).is_none()
            || last.checked_add(Duration::days(trailing)).is_none()
        {
            return Err(OutOfTimeError);
        }
        Ok(YearMonth { first, last })
    }

    /// The month containing `date`
    pub(crate) fn containing<D: CalendarDay + ?Sized>(date: &D) -> Result<YearMonth, OutOfTimeError> {
        let date = date.calendar_date();
        YearMonth::from_calendar_month(date.year(), date.month())
    }

    pub(crate) fn year(&self) -> i32 {
        self.first.year()
    }

    pub(crate) fn month(&self) -> Month {
        self.first.month()
    }

    /// Zero-based month index, January = 0
    pub(crate) fn month0(&self) -> i32 {
        i32::from(u8::from(self.month())) - 1
    }

    pub(crate) fn first_day(&self) -> Date {
        self.first
    }

    pub(crate) fn last_day(&self) -> Date {
        self.last
    }

    pub(crate) fn days_in_month(&self) -> u8 {
        self.last.day()
    }

    pub(crate) fn offset_months(&self, delta: i32) -> Result<YearMonth, OutOfTimeError> {
        let month0 = self.month0().checked_add(delta).ok_or(OutOfTimeError)?;
        YearMonth::new(self.year(), month0)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.year() < 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{:04}-{:02}",
            self.year().unsigned_abs(),
            u8::from(self.month())
        )
    }
}

impl FromStr for YearMonth {
    type Err = YearMonthParseError;

    fn from_str(s: &str) -> Result<YearMonth, YearMonthParseError> {
        let mut parsed = Parsed::new();
        let rest = parsed.parse_items(s.as_bytes(), YM_FMT)?;
        if !rest.is_empty() {
            return Err(YearMonthParseError::Trailing);
        }
        let (Some(year), Some(month)) = (parsed.year(), parsed.month()) else {
            return Err(YearMonthParseError::Incomplete);
        };
        Ok(YearMonth::from_calendar_month(year, month)?)
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub(crate) struct OutOfTimeError;

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum YearMonthParseError {
    #[error("invalid month, expected YYYY-MM")]
    Format(#[from] time::error::ParseFromDescription),
    #[error("unexpected text after YYYY-MM")]
    Trailing,
    #[error("incomplete month, expected YYYY-MM")]
    Incomplete,
    #[error("month cannot be displayed")]
    OutOfTime(#[from] OutOfTimeError),
}
