use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::Parser;
use log::{Level, info};

use sift_engine::run_query;
use sift_runtime::logging;
use sift_scan::populate_store;

#[derive(Debug, Parser)]
#[command(
    name = "sift",
    version,
    about = "Query filesystem metadata with a filter expression",
    after_help = "Examples:\n  \
        sift --path /var/log --filter \"size > 1048576 AND name LIKE '%.log'\"\n  \
        sift --depth 2 --filter \"directory = true OR modified_at >= '2024-01-01'\""
)]
struct Cli {
    /// The path where to search from
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// The maximum depth to traverse the tree
    #[arg(long, default_value_t = 10)]
    depth: usize,

    /// The query filter to use (empty matches every entry)
    #[arg(long, default_value = "")]
    filter: String,

    /// Print verbose output
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        logging::init_at(Level::Info).ok();
    } else {
        logging::init().ok();
    }

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[error] {e:#}");
            ExitCode::from(2)
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    if !cli.path.exists() {
        bail!("no such path: {}", cli.path.display());
    }

    info!("[cli] searching from {}", cli.path.display());

    let store = populate_store(&cli.path, cli.depth)?;

    info!("[cli] entering search process");

    // The query runs to completion before anything prints: a failed run
    // must not leave partial output on stdout.
    let paths = run_query(&store, &cli.filter)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for path in &paths {
        writeln!(out, "{path}")?;
    }
    out.flush()?;

    Ok(())
}
