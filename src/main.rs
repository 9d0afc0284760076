use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use changed_modules::classify::{changed_modules, KNOWN_MODULES};
use changed_modules::history::{GitLog, HistoryProvider};
use changed_modules::matrix;
use changed_modules::timeframe;

#[derive(Parser)]
#[command(name = "changed-modules")]
#[command(about = "Detect which modules changed recently and emit a JSON build matrix")]
#[command(version)]
struct Cli {
    /// Lookback window in git --since grammar (default: "24 hours")
    timeframe: Option<String>,

    /// Repository directory to inspect
    #[arg(short = 'C', long, default_value = ".")]
    dir: PathBuf,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let timeframe = timeframe::resolve(cli.timeframe.as_deref());
    let files = GitLog::new(&cli.dir).changed_files(&timeframe)?;
    let modules = changed_modules(&files, KNOWN_MODULES);

    println!("{}", matrix::to_json(&modules)?);

    Ok(())
}
