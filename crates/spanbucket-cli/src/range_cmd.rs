use std::process::ExitCode;

use spanbucket_core::{Bucket, bucket_for_period};
use tracing::debug;

use crate::cli::RangeArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat, print_json_pretty};
use crate::shared::{parse_interval_arg, parse_rfc3339_arg};

/// Refuse to print absurdly long listings.
const MAX_RANGE_BUCKETS: u64 = 100_000;

pub fn run_range(args: RangeArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let interval = parse_interval_arg("interval", &args.interval)?;
    let start = parse_rfc3339_arg("start", &args.start)?;
    let end = parse_rfc3339_arg("end", &args.end)?;

    if start > end {
        return Err(CliError::input(format!(
            "Invalid range: start '{}' must not be later than end '{}'",
            args.start, args.end
        )));
    }

    let range = interval.range(start, end);
    debug!(from = range.from, to = range.to, "period range");
    if range.len() > MAX_RANGE_BUCKETS {
        return Err(CliError::input(format!(
            "Range spans {} buckets of {}; at most {} can be listed",
            range.len(),
            interval,
            MAX_RANGE_BUCKETS
        )));
    }

    let buckets: Vec<Bucket> = range
        .into_iter()
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
