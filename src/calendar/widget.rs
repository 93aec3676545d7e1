use super::dates::{format_year_month, is_same_date, WeekdayExt, WEEKDAY_LABELS};
use super::grid::DayCell;
use super::view::MonthView;
use super::DateStyler;
use crate::market::{CYCLE_NOTE, LEGEND, TITLE};
use crate::theme::{
    LEGEND_STYLE, MARKET_DAY_STYLE, MONTH_STYLE, TITLE_STYLE, TODAY_STYLE, WEEKDAY_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Span, Text},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use std::marker::PhantomData;

/// Number of columns per day of week
const DAY_WIDTH: u16 = 7;

/// Width of the calendar in columns; the gap after the last day is not drawn
const MAIN_WIDTH: u16 = DAY_WIDTH * 7 - 3;

const TITLE_LINE: u16 = 0;

/// Line holding the month name and the paging arrows
const MONTH_LINE: u16 = 1;

const HEADER_LINE: u16 = 3;

/// First line of the first week
const GRID_TOP: u16 = 5;

/// Number of lines taken up by each week of the calendar: the day numbers and
/// the badges beneath them
const WEEK_LINES: u16 = 2;

const WEEK_QTY: u16 = 6;

const LEGEND_LINE: u16 = GRID_TOP + WEEK_QTY * WEEK_LINES + 1;

const TOTAL_HEIGHT: u16 = LEGEND_LINE + 1;

/// Offset of the day number (and anything else two columns wide) within a
/// day's columns
const DIGITS_OFFSET: u16 = 1;

const PREV_ARROW: &str = "‹";
const NEXT_ARROW: &str = "›";
const LEGEND_DOT: &str = "●";

const ACS_HLINE: char = '─';

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Calendar<S> {
    _data: PhantomData<S>,
}

impl<S> Calendar<S> {
    pub(crate) fn new() -> Calendar<S> {
        Calendar { _data: PhantomData }
    }
}

impl<S: DateStyler> StatefulWidget for Calendar<S> {
    type State = MonthView<S>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [area] = Layout::horizontal([MAIN_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let [area] = Layout::vertical([TOTAL_HEIGHT])
            .flex(Flex::Center)
            .areas(area);
        let today = state.today();
        let styler = state.date_styler();
        let grid = state.grid();
        let mut canvas = BufferCanvas::new(area, buf);
        canvas.print_centered(TITLE_LINE, TITLE, TITLE_STYLE);
        canvas.draw_month_line(&format_year_month(&grid.month().first_day()));
        canvas.draw_header();
        canvas.hline(GRID_TOP - 1, 0, ACS_HLINE, MAIN_WIDTH);
        for (week_no, week) in std::iter::zip(0u16.., grid.rows()) {
            for cell in week {
                let is_today = cell.is_current_month && is_same_date(&cell.date, &today);
                let style = if is_today {
                    TODAY_STYLE
                } else {
                    styler.day_style(cell)
                };
                canvas.draw_day(week_no, cell, show_day(cell, is_today), style);
                if let Some(badge) = styler.badge(cell) {
                    canvas.draw_badge(week_no, cell, badge);
                }
            }
        }
        canvas.hline(LEGEND_LINE - 1, 0, ACS_HLINE, MAIN_WIDTH);
        canvas.draw_legend();
    }
}

fn show_day(cell: &DayCell, is_today: bool) -> String {
    if is_today {
        format!("[{:2}]", cell.day())
    } else {
        format!(" {:2} ", cell.day())
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_month_line(&mut self, month: &str) {
        self.mvprint(MONTH_LINE, DIGITS_OFFSET, PREV_ARROW, Some(MONTH_STYLE));
        self.mvprint(
            MONTH_LINE,
            MAIN_WIDTH - DIGITS_OFFSET - 1,
            NEXT_ARROW,
            Some(MONTH_STYLE),
        );
        self.print_centered(MONTH_LINE, month, MONTH_STYLE);
    }

    fn draw_header(&mut self) {
        for (i, label) in std::iter::zip(0u16.., WEEKDAY_LABELS) {
            self.mvprint(
                HEADER_LINE,
                DAY_WIDTH * i + DIGITS_OFFSET,
                label,
                Some(WEEKDAY_STYLE),
            );
        }
    }

    fn draw_day(&mut self, week_no: u16, cell: &DayCell, s: String, style: Style) {
        self.mvprint(
            GRID_TOP + week_no * WEEK_LINES,
            DAY_WIDTH * cell.date.weekday().index0(),
            s,
            Some(style),
        );
    }

    fn draw_badge(&mut self, week_no: u16, cell: &DayCell, badge: Span<'_>) {
        self.mvprint(
            GRID_TOP + week_no * WEEK_LINES + 1,
            DAY_WIDTH * cell.date.weekday().index0() + DIGITS_OFFSET,
            badge.content,
            Some(badge.style),
        );
    }

    fn draw_legend(&mut self) {
        self.mvprint(LEGEND_LINE, DIGITS_OFFSET, LEGEND_DOT, Some(MARKET_DAY_STYLE));
        self.mvprint(LEGEND_LINE, DIGITS_OFFSET + 2, LEGEND, Some(LEGEND_STYLE));
        let width = text_width(CYCLE_NOTE);
        self.mvprint(
            LEGEND_LINE,
            MAIN_WIDTH.saturating_sub(width),
            CYCLE_NOTE,
            Some(LEGEND_STYLE),
        );
    }

    fn print_centered(&mut self, y: u16, s: &str, style: Style) {
        let x = MAIN_WIDTH.saturating_sub(text_width(s)) / 2;
        self.mvprint(y, x, s, Some(style));
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond the
            // calendar's area, though we need to be sure that the Rect passed
            // to the Paragraph is entirely within the frame lest a panic
            // result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), None);
    }
}

fn text_width(s: &str) -> u16 {
    u16::try_from(Text::raw(s).width()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::dates::YearMonth;
    use crate::market::MarketDays;
    use crate::theme::{BASE_STYLE, FADED_MARKET_STYLE, OTHER_MONTH_STYLE};
    use ratatui::style::Color;
    use time::macros::date;

    fn render(today: time::Date, month: YearMonth, area: Rect) -> Buffer {
        let mut view = MonthView::new(today, MarketDays)
            .unwrap()
            .start_month(month);
        let mut buf = Buffer::empty(area);
        Calendar::<MarketDays>::new().render(area, &mut buf, &mut view);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_february_2026() {
        let buf = render(
            date!(2026 - 02 - 03),
            YearMonth::new(2026, 1).unwrap(),
            Rect::new(0, 0, MAIN_WIDTH, TOTAL_HEIGHT),
        );
        assert!(row_text(&buf, TITLE_LINE).contains('街'));
        let month_line = row_text(&buf, MONTH_LINE);
        assert!(month_line.contains("2026"));
        assert!(month_line.contains('年'));
        assert!(month_line.starts_with(" ‹"));
        assert!(month_line.ends_with("› "));
        assert!(row_text(&buf, HEADER_LINE).contains('一'));
        assert_eq!(row_text(&buf, GRID_TOP - 1), "─".repeat(46));
        assert_eq!(
            row_text(&buf, GRID_TOP),
            " 26     27     28     29     30     31      1 "
        );
        assert_eq!(
            row_text(&buf, GRID_TOP + 2),
            "  2    [ 3]     4      5      6      7      8 "
        );
        assert_eq!(
            row_text(&buf, GRID_TOP + 10),
            "  2      3      4      5      6      7      8 "
        );
        assert_eq!(row_text(&buf, LEGEND_LINE - 1), "─".repeat(46));
        assert!(row_text(&buf, LEGEND_LINE).contains("(Market Day)"));
    }

    #[test]
    fn test_february_2026_styles() {
        let buf = render(
            date!(2026 - 02 - 03),
            YearMonth::new(2026, 1).unwrap(),
            Rect::new(0, 0, MAIN_WIDTH, TOTAL_HEIGHT),
        );
        // Jan 26: padding, not a market day
        assert_eq!(buf[(1, GRID_TOP)].fg, OTHER_MONTH_STYLE.fg.unwrap());
        assert_eq!(buf[(1, GRID_TOP + 1)].symbol(), " ");
        // Jan 27: padding market day
        assert_eq!(buf[(8, GRID_TOP)].fg, OTHER_MONTH_STYLE.fg.unwrap());
        assert_eq!(buf[(8, GRID_TOP + 1)].symbol(), "街");
        assert_eq!(buf[(8, GRID_TOP + 1)].fg, FADED_MARKET_STYLE.fg.unwrap());
        // Feb 1: current month, not a market day
        assert_eq!(buf[(43, GRID_TOP)].fg, BASE_STYLE.fg.unwrap());
        assert_eq!(buf[(43, GRID_TOP + 1)].symbol(), " ");
        // Feb 2: market day
        assert_eq!(buf[(2, GRID_TOP + 2)].fg, Color::LightRed);
        assert_eq!(buf[(1, GRID_TOP + 3)].symbol(), "街");
        assert_eq!(buf[(1, GRID_TOP + 3)].fg, Color::LightRed);
        // Feb 3: today
        assert_eq!(buf[(9, GRID_TOP + 2)].fg, TODAY_STYLE.fg.unwrap());
        assert_eq!(buf[(8, GRID_TOP + 3)].symbol(), " ");
    }

    #[test]
    fn test_today_in_padding_not_highlighted() {
        let buf = render(
            date!(2026 - 03 - 03),
            YearMonth::new(2026, 1).unwrap(),
            Rect::new(0, 0, MAIN_WIDTH, TOTAL_HEIGHT),
        );
        assert_eq!(
            row_text(&buf, GRID_TOP + 10),
            "  2      3      4      5      6      7      8 "
        );
        assert_eq!(buf[(9, GRID_TOP + 10)].fg, OTHER_MONTH_STYLE.fg.unwrap());
    }

    #[test]
    fn test_centered_in_larger_area() {
        let buf = render(
            date!(2026 - 02 - 03),
            YearMonth::new(2026, 1).unwrap(),
            Rect::new(0, 0, 80, 25),
        );
        // (80 - 46) / 2 = 17 columns to the left, (25 - 19) / 2 = 3 lines above
        let margin = " ".repeat(17);
        assert_eq!(
            row_text(&buf, 3 + GRID_TOP),
            format!("{margin} 26     27     28     29     30     31      1 {margin}")
        );
        assert_eq!(row_text(&buf, 2), " ".repeat(80));
    }

    #[test]
    fn test_small_area_does_not_panic() {
        let buf = render(
            date!(2026 - 02 - 03),
            YearMonth::new(2026, 1).unwrap(),
            Rect::new(0, 0, 20, 5),
        );
        assert_eq!(buf.area.width, 20);
    }
}
