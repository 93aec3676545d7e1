use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.fg(Color::LightRed);

pub(crate) const MONTH_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.fg(Color::Gray);

pub(crate) const OTHER_MONTH_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) const MARKET_DAY_STYLE: Style = BASE_STYLE
    .fg(Color::LightRed)
    .add_modifier(Modifier::BOLD);

/// Market-day badge on a padding day
pub(crate) const FADED_MARKET_STYLE: Style = BASE_STYLE.fg(Color::Red);

pub(crate) const TODAY_STYLE: Style = BASE_STYLE
    .fg(Color::LightGreen)
    .add_modifier(Modifier::BOLD);

pub(crate) const LEGEND_STYLE: Style = BASE_STYLE.fg(Color::Gray);

pub(crate) mod jumpto {
    use super::*;

    pub(crate) const UNFILLED_CELL_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const READY_ENTER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::UNDERLINED);
}
