use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;

use anyhow::Context;
use spanbucket_core::{BucketResult, InputTimestamp, Interval, TimestampFormat, compute_bucket};
use tracing::debug;

use crate::cli::BucketArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat, print_json};
use crate::shared::{parse_format, parse_interval_arg};

pub fn run_bucket(args: BucketArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let interval = parse_interval_arg("interval", &args.interval)?;
    if args.strict {
        interval.ensure_valid()?;
    }
    let format = parse_format(&args.format)?;

    let reader: Box<dyn BufRead> = if args.stdin || args.input == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("Failed to open file '{}'", args.input))?;
        Box::new(BufReader::new(file))
    };

    for line in reader.lines() {
        let line = line.context("Failed to read line")?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        let result = process_bucket_line(trimmed, &interval, format)
            .map_err(|e| CliError::core(&format!("Error processing '{}'", trimmed), &e))?;
        debug!(input = trimmed, period = result.bucket.period, "bucketed");

        match output_format {
            OutputFormat::Json => print_json(&result)?,
            OutputFormat::Text => {
                println!(
                    "{} -> {} to {}",
                    result.bucket.period, result.bucket.start_utc, result.bucket.end_utc
                );
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn process_bucket_line(
    input: &str,
    interval: &Interval,
    format: TimestampFormat,
) -> spanbucket_core::Result<BucketResult> {
    let instant = spanbucket_core::parse_timestamp(input, format)?;

    Ok(BucketResult {
        input: InputTimestamp {
            ts: input.to_string(),
            epoch_ms: instant.timestamp_millis(),
        },
        interval: interval.to_string(),
        bucket: compute_bucket(instant, interval),
    })
}
