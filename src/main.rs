//! Print spiral matrices for one or more orders.
//!
//! Every order is validated before anything is printed, so a bad argument
//! produces no partial output.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use spiral_matrix::{FormatParams, format, generate, logging, validate_dimension};

#[derive(Parser)]
#[command(
    name = "spiral",
    version,
    about = "Print square matrices numbered along an outward spiral"
)]
struct Cli {
    /// Orders of the matrices to print, in order.
    #[arg(default_values_t = [3], allow_negative_numbers = true)]
    dimensions: Vec<i64>,
    /// Field width for every value. Defaults to the digit count of n².
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    width: Option<u16>,
}

/// Exit code for bad arguments and other failures.
const EXIT_INVALID: i32 = 1;

fn main() {
    logging::init();
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        // --help and --version arrive as errors that print to stdout.
        let code = if err.use_stderr() { EXIT_INVALID } else { 0 };
        let _ = err.print();
        std::process::exit(code);
    });
    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(EXIT_INVALID);
    }
}

fn run(cli: Cli) -> Result<()> {
    let dimensions = cli
        .dimensions
        .iter()
        .map(|&n| validate_dimension(n).with_context(|| format!("dimension {n}")))
        .collect::<Result<Vec<_>>>()?;
    let params = FormatParams {
        field_width: cli.width,
    };
    debug!(?dimensions, width = ?params.field_width, "printing spirals");

    let mut out = io::stdout().lock();
    for n in dimensions {
        let matrix = generate(n).with_context(|| format!("generate order {n}"))?;
        out.write_all(format(&matrix, &params).as_bytes())
            .context("write to stdout")?;
    }
    out.flush().context("flush stdout")?;
    Ok(())
}
