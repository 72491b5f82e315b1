use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};

const DEFAULT_APP_JS: &str = "app.js";
const DEFAULT_STYLESHEET: &str = "style.css";

#[derive(Debug, Parser)]
#[command(
    name = "dashpatch",
    version,
    about = "Apply the shift-start and mobile layout edits to the attendance dashboard sources."
)]
pub struct Cli {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Path to the dashboard client script.
    #[arg(long, env = "DASHPATCH_APP_JS", default_value = DEFAULT_APP_JS)]
    pub app_js: PathBuf,

    /// Path to the dashboard stylesheet.
    #[arg(long, env = "DASHPATCH_STYLESHEET", default_value = DEFAULT_STYLESHEET)]
    pub stylesheet: PathBuf,

    /// Print a JSON report of per-step match counts after patching.
    #[arg(long)]
    pub report: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inject the Cairo clock helper and the shift-not-started edits into the script.
    App,
    /// Append the mobile stats-row override to the stylesheet.
    Style,
    /// Insert the Cairo date-key helper and route date lookups through it.
    Dates,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub app_js: PathBuf,
    pub stylesheet: PathBuf,
    pub report: bool,
    pub mode: Mode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Script,
    Stylesheet,
    DateKey,
}

impl Config {
    pub fn from_cli() -> Result<Self> {
        let cli = Cli::parse();
        Config::from_parts(cli.common, cli.command)
    }

    fn from_parts(common: CommonArgs, command: Option<Command>) -> Result<Self> {
        if common.app_js.as_os_str().is_empty() {
            return Err(anyhow!("script path must not be empty"));
        }

        if common.stylesheet.as_os_str().is_empty() {
            return Err(anyhow!("stylesheet path must not be empty"));
        }

        let mode = match command {
            Some(Command::App) | None => Mode::Script,
            Some(Command::Style) => Mode::Stylesheet,
            Some(Command::Dates) => Mode::DateKey,
        };

        Ok(Self {
            app_js: common.app_js,
            stylesheet: common.stylesheet,
            report: common.report,
            mode,
        })
    }
}
