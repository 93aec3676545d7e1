use super::dates::{format_year_month, DAYS_IN_WEEK, WEEKDAY_LABELS};
use super::grid::Grid;
use super::DateStyler;
use crate::market::{CYCLE_NOTE, LEGEND, TITLE};
use std::fmt::{self, Write};

/// Printed after the day number of every badged day
const MARK: char = '*';

/// A month grid as plain text, for printing outside the interactive
/// calendar
#[derive(Debug)]
pub(crate) struct PlainMonth<'a, S> {
    grid: &'a Grid,
    date_styler: &'a S,
}

impl<'a, S: DateStyler> PlainMonth<'a, S> {
    pub(crate) fn new(grid: &'a Grid, date_styler: &'a S) -> Self {
        PlainMonth { grid, date_styler }
    }
}

impl<S: DateStyler> fmt::Display for PlainMonth<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{}", format_year_month(&self.grid.month().first_day()))?;
        let mut line = String::new();
        for label in WEEKDAY_LABELS {
            write!(line, " {label} ")?;
        }
        writeln!(f, "{}", line.trim_end())?;
        for week in self.grid.cells().chunks(DAYS_IN_WEEK) {
            line.clear();
            for cell in week {
                let mark = if self.date_styler.badge(cell).is_some() {
                    MARK
                } else {
                    ' '
                };
                write!(line, "{:>3}{mark}", cell.day())?;
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        writeln!(f, "{MARK} {LEGEND}  {CYCLE_NOTE}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::dates::YearMonth;
    use crate::calendar::grid::build_month_grid;
    use crate::market::MarketDays;

    #[test]
    fn test_february_2026() {
        let grid = build_month_grid(YearMonth::new(2026, 1).unwrap());
        let s = PlainMonth::new(&grid, &MarketDays).to_string();
        assert_eq!(
            s,
            concat!(
                "街天日历\n",
                "2026年  2月\n",
                " 一  二  三  四  五  六  日\n",
                " 26  27* 28  29  30* 31   1\n",
                "  2*  3   4   5*  6   7   8*\n",
                "  9  10  11* 12  13  14* 15\n",
                " 16  17* 18  19  20* 21  22\n",
                " 23* 24  25  26* 27  28   1*\n",
                "  2   3   4*  5   6   7*  8\n",
                "* 街天 (Market Day)  每隔两天一街\n",
            )
        );
    }

    #[test]
    fn test_line_count() {
        let grid = build_month_grid(YearMonth::new(2027, 7).unwrap());
        let s = PlainMonth::new(&grid, &MarketDays).to_string();
        assert_eq!(s.lines().count(), 10);
        assert_eq!(s.lines().nth(1), Some("2027年  8月"));
    }
}
