use super::dates::{OutOfTimeError, YearMonth};
use super::grid::{build_month_grid, Grid};
use super::DateStyler;
use time::Date;

const MONTHS_IN_YEAR: i32 = 12;

/// The month currently on screen
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthView<S> {
    today: Date,
    home: YearMonth,
    month: YearMonth,
    date_styler: S,
}

impl<S: DateStyler> MonthView<S> {
    pub(crate) fn new(today: Date, date_styler: S) -> Result<Self, OutOfTimeError> {
        let home = YearMonth::containing(&today)?;
        Ok(MonthView {
            today,
            home,
            month: home,
            date_styler,
        })
    }

    pub(crate) fn start_month(mut self, month: YearMonth) -> Self {
        self.month = month;
        self
    }

    pub(crate) fn today(&self) -> Date {
        self.today
    }

    pub(crate) fn month(&self) -> YearMonth {
        self.month
    }

    pub(crate) fn date_styler(&self) -> &S {
        &self.date_styler
    }

    pub(crate) fn grid(&self) -> Grid {
        build_month_grid(self.month)
    }

    pub(crate) fn previous_month(&mut self) -> Result<(), OutOfTimeError> {
        self.shift(-1)
    }

    pub(crate) fn next_month(&mut self) -> Result<(), OutOfTimeError> {
        self.shift(1)
    }

    pub(crate) fn previous_year(&mut self) -> Result<(), OutOfTimeError> {
        self.shift(-MONTHS_IN_YEAR)
    }

    pub(crate) fn next_year(&mut self) -> Result<(), OutOfTimeError> {
        self.shift(MONTHS_IN_YEAR)
    }

    pub(crate) fn jump_to_today(&mut self) {
        self.jump_to(self.home);
    }

    pub(crate) fn jump_to(&mut self, month: YearMonth) {
        log::debug!("Jumping to {month}");
        self.month = month;
    }

    fn shift(&mut self, months: i32) -> Result<(), OutOfTimeError> {
        match self.month.offset_months(months) {
            Ok(month) => {
                log::debug!(
                    "Moving from {} to {month} ({} days)",
                    self.month,
                    month.days_in_month()
                );
                self.month = month;
                Ok(())
            }
            Err(e) => {
                log::warn!("Cannot move {months} month(s) from {}: {e}", self.month);
                Err(e)
            }
        }
    }
}
