use std::process::ExitCode;

use serde::Serialize;
use spanbucket_core::calendar::{default_reference, format_rfc3339_utc};

use crate::cli::CompareArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat, print_json_pretty};
use crate::shared::{format_duration, parse_interval_arg, parse_rfc3339_arg};

#[derive(Debug, Serialize)]
struct CompareOutput {
    left: String,
    right: String,
    at: String,
    left_seconds: i64,
    right_seconds: i64,
    less: bool,
}

pub fn run_compare(args: CompareArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let left = parse_interval_arg("left interval", &args.left)?;
    let right = parse_interval_arg("right interval", &args.right)?;
    let at = match args.at.as_deref() {
        Some(at) => parse_rfc3339_arg("reference", at)?,
        None => default_reference(),
    };

    let left_len = left.duration_at(at);
    let right_len = right.duration_at(at);

    let output = CompareOutput {
        left: left.to_string(),
        right: right.to_string(),
        at: format_rfc3339_utc(&at),
        left_seconds: left_len.num_seconds(),
        right_seconds: right_len.num_seconds(),
        less: left.less_at(&right, at),
    };

    match output_format {
        OutputFormat::Json => print_json_pretty(&output)?,
        OutputFormat::Text => {
            let relation = if output.less {
                "<"
            } else if right.less_at(&left, at) {
                ">"
            } else {
                "="
            };
            println!(
                "{} ({}) {} {} ({}) at {}",
                output.left,
                format_duration(left_len),
                relation,
                output.right,
                format_duration(right_len),
                output.at
            );
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
