use std::process::ExitCode;

use spanbucket_core::{Bucket, bucket_for_period};

use crate::cli::TimeArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat, print_json_pretty};
use crate::shared::parse_interval_arg;

const MAX_COUNT: u32 = 100_000;

pub fn run_time(args: TimeArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let interval = parse_interval_arg("interval", &args.interval)?;

    if args.count == 0 || args.count > MAX_COUNT {
        return Err(CliError::input(format!(
            "Invalid count {}. Expected 1..={}",
            args.count, MAX_COUNT
        )));
    }

    let last = args
        .period
        .checked_add(i64::from(args.count))
        .ok_or_else(|| CliError::input(format!("Period {} is out of range", args.period)))?;

    let buckets: Vec<Bucket> = (args.period..last)
        .map(|period| bucket_for_period(period, &interval))
        .collect();

    match output_format {
        OutputFormat::Json => print_json_pretty(&buckets)?,
        OutputFormat::Text => {
            for bucket in buckets {
                println!(
                    "{}: {} to {}",
                    bucket.period, bucket.start_utc, bucket.end_utc
                );
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
