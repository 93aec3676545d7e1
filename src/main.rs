mod app;
mod calendar;
mod help;
mod jumpto;
mod market;
mod theme;
use crate::app::App;
use crate::calendar::{MonthView, PlainMonth, YearMonth};
use crate::market::MarketDays;
use anyhow::Context;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use time::OffsetDateTime;

const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "info"
};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        month: Option<YearMonth>,
        print: bool,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut month = None;
        let mut print = false;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('p') | Arg::Long("print") => print = true,
                Arg::Short('l') | Arg::Long("log-file") => {
                    log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Value(value) if month.is_none() => month = Some(value.parse::<YearMonth>()?),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run {
            month,
            print,
            log_file,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                month,
                print,
                log_file,
            } => {
                let _logger = log_file.map(init_logger).transpose()?;
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let mut view = MonthView::new(today, MarketDays)
                    .with_context(|| format!("cannot display the month containing {today}"))?;
                if let Some(month) = month {
                    view = view.start_month(month);
                }
                log::info!("Starting at {} (today is {today})", view.month());
                if print {
                    print!("{}", PlainMonth::new(&view.grid(), view.date_styler()));
                    return Ok(());
                }
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(view)
                        .run(&mut terminal)
                        .context("failed to run calendar")
                })
            }
            Command::Help => {
                println!("Usage: jietian [-p] [-l <FILE>] [YYYY-MM]");
                println!();
                println!("Terminal month calendar highlighting market days on a fixed three-day cycle");
                println!();
                println!("Options:");
                println!("  -p, --print             Print the month as text and exit");
                println!("  -l, --log-file <FILE>   Write log messages to the given file");
                println!("  -h, --help              Display this help message and exit");
                println!("  -V, --version           Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn init_logger(path: PathBuf) -> anyhow::Result<LoggerHandle> {
    let filespec = FileSpec::try_from(path).context("invalid log file path")?;
    Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)
        .context("invalid log specification")?
        .log_to_file(filespec)
        .start()
        .context("failed to start logger")
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
