// Interactive demo for the fixed-capacity array list.
//
// Reads single-letter commands (see `H`) from stdin or a script file and
// applies them to one `TypedArrayList<i32>`.

extern crate anyhow;
extern crate clap;
extern crate comparator;
extern crate static_array_list;
extern crate thiserror;
extern crate tracing;
extern crate tracing_subscriber;

mod shell;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use shell::Shell;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Create a list with this capacity before reading any command.
    #[arg(long)]
    capacity: Option<usize>,
    /// Read commands from this file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,
    /// Most verbose tracing level written to stderr: one of `error`, `warn`,
    /// `info`, `debug` or `trace`.
    #[arg(long, default_value = "warn")]
    log_level: String,
    /// Skip the command summary printed at startup.
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = Level::from_str(&args.log_level)
        .with_context(|| format!("invalid log level: {}", args.log_level))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let mut shell = Shell::new(io::stdout().lock());
    if !args.quiet {
        shell.execute("H")?;
    }
    if let Some(capacity) = args.capacity {
        shell.execute(&format!("N {capacity}"))?;
    }

    match &args.script {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("could not open {path:?}"))?;
            shell.run(BufReader::new(file))?;
        }
        None => shell.run(io::stdin().lock())?,
    }
    Ok(())
}
