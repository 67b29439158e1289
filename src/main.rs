// declcheck: validate variable declarations and report the first error

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use declcheck::config::{usage, Config, ConfigError};
use declcheck::scanner::{AnalysisResult, DeclarationScanner};
use declcheck::ui::App;
use declcheck::{report, source};

fn main() -> ExitCode {
    // Logs go to stderr so they never mix with the report on stdout
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("declcheck");

    let config = match Config::from_args(args.iter().skip(1).cloned()) {
        Ok(config) => config,
        Err(ConfigError::HelpRequested) => {
            println!("{}", usage(program_name));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", usage(program_name));
            return ExitCode::from(2);
        }
    };

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!(error = %e, "declcheck failed");
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Scan, report, and optionally view. Returns whether the scan succeeded.
fn run(config: &Config) -> Result<bool, Box<dyn std::error::Error>> {
    info!(input = %config.input.display(), "scanning");
    let mut scanner = DeclarationScanner::new();
    let (text, result) = source::analyze_file(&mut scanner, &config.input);

    report::emit(&result, &config.output)?;

    if config.view {
        match text {
            Some(text) => view(text, result.clone())?,
            None => eprintln!("Nothing to view: the input could not be read."),
        }
    }

    if config.pause {
        pause()?;
    }

    Ok(result.is_success())
}

fn view(text: String, result: AnalysisResult) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(text, result);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn pause() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\nPress Enter to exit...")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
