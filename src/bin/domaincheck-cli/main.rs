mod args;
mod output;

use anyhow::{Context, Result};
use std::io::{self, BufRead};

use args::{Cli, Commands};
use output::{OutputRow, any_invalid, make_row, write_reports};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let Some(rows) = collect_rows(&cli, io::stdin().lock())? else {
        Cli::clap_command().print_help()?;
        println!();
        return Ok(());
    };

    write_reports(&rows, &cli)?;

    // exit codes: 0 all valid, 2 some invalid, 1 fatal
    if any_invalid(&rows) {
        std::process::exit(2);
    }
    Ok(())
}

/// Rows for the `validate` argument first, then one per line of `input` when
/// `--stdin` is set. `None` when there is nothing to validate.
fn collect_rows<R: BufRead>(cli: &Cli, input: R) -> Result<Option<Vec<OutputRow>>> {
    let mut rows = Vec::new();

    if let Some(Commands::Validate { domain }) = &cli.cmd {
        rows.push(make_row(domain));
    }

    if cli.stdin {
        for line in input.lines() {
            let domain = line.context("read stdin")?;
            rows.push(make_row(&domain));
        }
    } else if cli.cmd.is_none() {
        return Ok(None);
    }

    Ok(Some(rows))
}

#[cfg(feature = "with-tracing")]
fn init_logging() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();
    // a subscriber may already be installed
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(not(feature = "with-tracing"))]
fn init_logging() {}
