use super::dates::{WeekdayExt, YearMonth, DAYS_IN_WEEK};
use std::iter::successors;
use std::slice::Chunks;
use time::Date;

/// Number of cells in every month grid: six Monday-first weeks, whether or not
/// the month needs all six
pub(crate) const GRID_LEN: u16 = 42;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct DayCell {
    pub(crate) date: Date,
    /// `false` for padding borrowed from the previous or next month
    pub(crate) is_current_month: bool,
}

impl DayCell {
    fn current(date: Date) -> DayCell {
        DayCell {
            date,
            is_current_month: true,
        }
    }

    fn padding(date: Date) -> DayCell {
        DayCell {
            date,
            is_current_month: false,
        }
    }

    pub(crate) fn day(&self) -> u8 {
        self.date.day()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
// Invariant: `cells` has exactly `GRID_LEN` elements
pub(crate) struct Grid {
    month: YearMonth,
    cells: Vec<DayCell>,
}

impl Grid {
    pub(crate) fn month(&self) -> YearMonth {
        self.month
    }

    pub(crate) fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// The grid's weeks, top to bottom
    pub(crate) fn rows(&self) -> Chunks<'_, DayCell> {
        self.cells.chunks(DAYS_IN_WEEK)
    }
}

pub(crate) fn build_month_grid(month: YearMonth) -> Grid {
    let first = month.first_day();
    let last = month.last_day();
    let mut cells = Vec::with_capacity(usize::from(GRID_LEN));
    let mut leading = iter_days_before(first)
        .take(usize::from(first.weekday().index0()))
        .map(DayCell::padding)
        .collect::<Vec<_>>();
    leading.reverse();
    cells.append(&mut leading);
    cells.extend(
        successors(Some(first), |&d| d.next_day())
            .take_while(|&d| d <= last)
            .map(DayCell::current),
    );
    let missing = usize::from(GRID_LEN).saturating_sub(cells.len());
    cells.extend(iter_days_after(last).take(missing).map(DayCell::padding));
    Grid { month, cells }
}

fn iter_days_after(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.next_day()).skip(1)
}

fn iter_days_before(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.previous_day()).skip(1)
}
