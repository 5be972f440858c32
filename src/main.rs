mod api;
mod artboard;
mod auth;
mod cli;
mod commands;
mod config;
mod error;
mod output;
mod walker;

use clap::Parser;
use cli::Cli;
use output::Verbosity;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    output::init(Verbosity::from_flags(cli.quiet, cli.verbose), cli.color_enabled());

    if let Err(e) = commands::upload::run(cli).await {
        output::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
