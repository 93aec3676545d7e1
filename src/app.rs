use crate::calendar::{Calendar, DateStyler, MonthView, YearMonth};
use crate::help::Help;
use crate::jumpto::{JumpTo, JumpToInput, JumpToOutput, JumpToState};
use crate::theme::BASE_STYLE;
use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App<S> {
    view: MonthView<S>,
    state: AppState,
}

impl<S: DateStyler> App<S> {
    pub(crate) fn new(view: MonthView<S>) -> App<S> {
        App {
            view,
            state: AppState::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(terminal)?;
            self.handle_input()?;
        }
        log::info!("Quitting");
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(&mut *self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = read()?
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Calendar => match key {
                KeyCode::Char('h') | KeyCode::Left => self.view.previous_month().is_ok(),
                KeyCode::Char('l') | KeyCode::Right => self.view.next_month().is_ok(),
                KeyCode::Char('k') | KeyCode::Up => self.view.previous_year().is_ok(),
                KeyCode::Char('j') | KeyCode::Down => self.view.next_year().is_ok(),
                KeyCode::Char('0') | KeyCode::Home => {
                    self.view.jump_to_today();
                    true
                }
                KeyCode::Char('g') => {
                    self.state = AppState::Jumping(JumpToState::new());
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Jumping(state) => {
                if matches!(key, KeyCode::Char('q' | 'g') | KeyCode::Esc) {
                    self.state = AppState::Calendar;
                    true
                } else {
                    let input = match key {
                        KeyCode::Char('-') => JumpToInput::Negative,
                        KeyCode::Char('+') => JumpToInput::Positive,
                        KeyCode::Char(c) => match c.to_digit(10).and_then(|d| u8::try_from(d).ok()) {
                            Some(d) => JumpToInput::Digit(d),
                            None => return false,
                        },
                        KeyCode::Backspace | KeyCode::Delete => JumpToInput::Backspace,
                        KeyCode::Enter => JumpToInput::Enter,
                        _ => return false,
                    };
                    match state.handle_input(input) {
                        JumpToOutput::Ok => true,
                        JumpToOutput::Invalid => false,
                        JumpToOutput::Jump(month) => {
                            self.state = AppState::Calendar;
                            self.jump_to(month);
                            true
                        }
                    }
                }
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn jump_to(&mut self, month: YearMonth) {
        self.view.jump_to(month);
    }
}

impl<S: DateStyler> Widget for &mut App<S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let cal = Calendar::<S>::new();
        cal.render(area, buf, &mut self.view);
        if self.state == AppState::Helping {
            Help.render(area, buf);
        } else if let AppState::Jumping(ref mut state) = self.state {
            JumpTo.render(area, buf, state);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Jumping(JumpToState),
    Quitting,
}
