use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "protter")]
#[command(author, version, about = "Upload exported Sketch artboards to Prott")]
pub struct Cli {
    /// Run as if protter was started in <path> instead of the current working directory
    #[arg(short = 'C', long = "current-directory", value_name = "path", default_value = ".")]
    pub current_directory: PathBuf,

    /// Email of the Prott account
    #[arg(long, env = "PROTT_EMAIL")]
    pub prott_email: Option<String>,

    /// Password of the Prott account (falls back to the system keychain)
    #[arg(long, env = "PROTT_PASSWORD", hide_env_values = true)]
    pub prott_password: Option<String>,

    /// Root URL of the Prott service
    #[arg(long, env = "PROTT_BASE_URL", hide = true)]
    pub base_url: Option<String>,

    /// Sign in and list matching artboards without uploading them
    #[arg(long)]
    pub dry_run: bool,

    /// Store the password in the system keychain after signing in
    #[arg(long)]
    pub remember: bool,

    /// Print more detail
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors and warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output (also disabled by a non-empty NO_COLOR)
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Whether output may be colored, honoring the NO_COLOR convention
    pub fn color_enabled(&self) -> bool {
        color_enabled(self.no_color, std::env::var_os("NO_COLOR"))
    }
}

fn color_enabled(no_color_flag: bool, no_color_env: Option<OsString>) -> bool {
    !no_color_flag && no_color_env.map_or(true, |v| v.is_empty())
}
