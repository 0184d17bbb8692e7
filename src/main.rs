use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use carte::activity::ActivityLog;
use carte::config::{self, DEFAULT_ACTIVITY_CAPACITY, DEFAULT_START_INDEX};
use carte::menu::Menu;
use carte::ui::{view, App};

const HELP: &str = "\
carte - interactive cocktail menu carousel

USAGE:
  carte [OPTIONS] [MENU_FILE]

ARGS:
  [MENU_FILE]          TOML menu document; the house menu is used if omitted

OPTIONS:
  --start <INDEX>      Open on this drink; any integer, wrapped into range
  --export-dir <DIR>   Where 'e' writes the session activity log (default: .)
  -h, --help           Print help
";

struct Flags {
    help: bool,
    start: Option<i64>,
    export_dir: Option<PathBuf>,
    menu_path: Option<PathBuf>,
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    Ok(Flags {
        help: args.contains(["-h", "--help"]),
        start: args.opt_value_from_str("--start")?,
        export_dir: args.opt_value_from_str("--export-dir")?,
        menu_path: args
            .finish()
            .into_iter()
            .next()
            .map(PathBuf::from),
    })
}

fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("carte: {err}");
            return ExitCode::from(2);
        }
    };
    if flags.help {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let config = config::load().unwrap_or_default();

    let menu = match flags.menu_path.or_else(|| config.menu_path.clone()) {
        Some(path) => match Menu::load_from_path(&path) {
            Ok(menu) => menu,
            Err(err) => {
                eprintln!("carte: failed to load {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => Menu::house_menu(),
    };

    let start = flags.start.or(config.start_index).unwrap_or(DEFAULT_START_INDEX);
    let capacity = config.activity_capacity.unwrap_or(DEFAULT_ACTIVITY_CAPACITY);
    let export_dir = flags.export_dir.unwrap_or_else(|| PathBuf::from("."));

    let mut app = App::new(menu, start, ActivityLog::new(capacity), export_dir);

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            eprintln!("carte: {err}");
            return ExitCode::FAILURE;
        }
    };

    let result = run_app(&mut terminal, &mut app);

    if let Err(err) = restore_terminal(&mut terminal) {
        eprintln!("carte: failed to restore terminal: {err}");
    }
    if let Err(err) = result {
        eprintln!("carte: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| view::render(frame, app))?;

        if app.should_quit() {
            break;
        }

        // Poll with a timeout so a resize repaints promptly
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key presses to avoid duplicate handling
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    app.request_quit();
                    continue;
                }
                app.handle_key(key);
            }
        }
    }
    Ok(())
}
