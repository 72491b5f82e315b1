use anyhow::{Context, Result};
use dashpatch::config::Mode;
use dashpatch::{Config, PatchError, PatchReport, date_key, script, stylesheet};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();
    let config = Config::from_cli()?;
    let report = run(&config)?;
    if config.report {
        println!("{}", report.to_json().context("failed to encode report")?);
    }
    Ok(())
}

fn run(config: &Config) -> Result<PatchReport> {
    let report = match config.mode {
        Mode::Script => {
            let report = script::patch_file(&config.app_js).map_err(abort)?;
            println!("app.js patched successfully.");
            report
        }
        Mode::Stylesheet => {
            let report = stylesheet::patch_file(&config.stylesheet).map_err(abort)?;
            println!("style.css patched for mobile.");
            report
        }
        Mode::DateKey => {
            let report = date_key::patch_file(&config.app_js).map_err(abort)?;
            println!("Replaced dates successfully.");
            report
        }
    };
    tracing::debug!(
        target_file = %report.target.display(),
        total_matches = report.total_matches(),
        "run finished"
    );
    Ok(report)
}

fn abort(err: PatchError) -> anyhow::Error {
    let path = err.path().display().to_string();
    anyhow::Error::new(err).context(format!("could not patch {path}"))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
