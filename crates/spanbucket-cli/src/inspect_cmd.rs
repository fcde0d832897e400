use std::process::ExitCode;

use serde::Serialize;
use spanbucket_core::{Interval, Span};

use crate::cli::InspectArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat, print_json_pretty};
use crate::shared::parse_interval_arg;

#[derive(Debug, Serialize)]
struct InspectOutput {
    label: String,
    qty: u8,
    span: Span,
    span_code: u32,
    encoded: u32,
    max_qty: u8,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    problem: Option<String>,
}

pub fn run_inspect(args: InspectArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let interval = match (args.interval.as_deref(), args.encoded) {
        (Some(s), _) => parse_interval_arg("interval", s)?,
        (None, Some(value)) => Interval::decode(value)
            .map_err(|e| CliError::core(&format!("Invalid encoded value {}", value), &e))?,
        (None, None) => return Err(CliError::input("Expected an interval or --encoded")),
    };

    let problem = interval.ensure_valid().err().map(|e| e.to_string());
    let output = InspectOutput {
        label: interval.label().to_string(),
        qty: interval.qty(),
        span: interval.span(),
        span_code: interval.span().code(),
        encoded: interval.encode(),
        max_qty: interval.span().max_qty(),
        valid: problem.is_none(),
        problem,
    };

    match output_format {
        OutputFormat::Json => print_json_pretty(&output)?,
        OutputFormat::Text => {
            println!("interval: {}", output.label);
            println!("qty:      {}", output.qty);
            println!("span:     {:?} (code {})", output.span, output.span_code);
            println!("encoded:  {}", output.encoded);
            println!("max qty:  {}", output.max_qty);
            match &output.problem {
                None => println!("valid:    yes"),
                Some(problem) => println!("valid:    no ({})", problem),
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
