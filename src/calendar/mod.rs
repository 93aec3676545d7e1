mod dates;
mod grid;
mod plain;
mod view;
mod widget;
pub(crate) use self::dates::{CalendarDay, YearMonth};
pub(crate) use self::grid::DayCell;
pub(crate) use self::plain::PlainMonth;
pub(crate) use self::view::MonthView;
pub(crate) use self::widget::Calendar;
use ratatui::{style::Style, text::Span};

pub(crate) trait DateStyler {
    fn day_style(&self, cell: &DayCell) -> Style;

    /// A short marker drawn beneath the day, if any
    fn badge(&self, cell: &DayCell) -> Option<Span<'static>>;
}
