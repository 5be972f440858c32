use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::OnceLock;
use std::time::Duration;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OutputSettings {
    pub verbosity: Verbosity,
}

static SETTINGS: OnceLock<OutputSettings> = OnceLock::new();

/// Initialize global output settings
pub fn init(verbosity: Verbosity, color: bool) {
    let _ = SETTINGS.set(OutputSettings { verbosity });
    if !color {
        colored::control::set_override(false);
    }
}

fn settings() -> OutputSettings {
    SETTINGS.get().copied().unwrap_or_default()
}

pub fn is_quiet() -> bool {
    matches!(settings().verbosity, Verbosity::Quiet)
}

pub fn is_verbose() -> bool {
    matches!(settings().verbosity, Verbosity::Verbose)
}

/// Print data as a table
pub fn print_table<T: Tabled>(items: &[T]) {
    if is_quiet() {
        return;
    }
    if items.is_empty() {
        println!("{}", "No results".dimmed());
        return;
    }
    let table = Table::new(items);
    println!("{}", table);
}

/// Print a status/info line (suppressed in quiet mode)
pub fn print_status(message: &str) {
    if !is_quiet() {
        println!("{}", message);
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", "error".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    if !is_quiet() {
        println!("{}: {}", "success".green().bold(), message);
    }
}

/// Print an info message
pub fn print_info(message: &str) {
    if !is_quiet() {
        println!("{}: {}", "info".blue().bold(), message);
    }
}

/// Print a verbose-only message
pub fn print_verbose(message: &str) {
    if is_verbose() {
        println!("{}", message);
    }
}

/// Spinner for a single network call; hidden in quiet mode
pub fn spinner(message: &str) -> ProgressBar {
    if is_quiet() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
