use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod bucket_cmd;
mod cli;
mod combine_cmd;
mod compare_cmd;
mod error;
mod inspect_cmd;
mod range_cmd;
mod shared;
mod time_cmd;

use bucket_cmd::run_bucket;
use cli::{Cli, Commands};
use combine_cmd::run_combine;
use compare_cmd::run_compare;
use error::{CliResult, OutputFormat, output_format_hint, parse_output_format, render_error};
use inspect_cmd::run_inspect;
use range_cmd::run_range;
use time_cmd::run_time;

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve the output format, then run the command and render any error.
fn dispatch<A>(
    args: A,
    output_format: &str,
    run: fn(A, OutputFormat) -> CliResult<ExitCode>,
) -> ExitCode {
    let fallback = output_format_hint(output_format);
    let output_format = match parse_output_format(output_format) {
        Ok(format) => format,
        Err(err) => return render_error(&err, fallback),
    };

    match run(args, output_format) {
        Ok(code) => code,
        Err(err) => render_error(&err, output_format),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!("Parsed CLI args: {:?}", cli);

    match cli.command {
        Commands::Bucket(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_bucket)
        }
        Commands::Range(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_range)
        }
        Commands::Time(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_time)
        }
        Commands::Combine(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_combine)
        }
        Commands::Compare(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_compare)
        }
        Commands::Inspect(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_inspect)
        }
    }
}
