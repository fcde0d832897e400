use std::process::ExitCode;

use serde::Serialize;

use crate::cli::CombineArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat, print_json_pretty};
use crate::shared::parse_interval_arg;

#[derive(Debug, Serialize)]
struct CombineOutput {
    from: String,
    to: String,
    less: bool,
    can_combine: bool,
}

pub fn run_combine(args: CombineArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let from = parse_interval_arg("from interval", &args.from)?;
    let to = parse_interval_arg("to interval", &args.to)?;

    let output = CombineOutput {
        from: from.to_string(),
        to: to.to_string(),
        less: from.less(&to),
        can_combine: from.can_combine(&to),
    };

    match output_format {
        OutputFormat::Json => print_json_pretty(&output)?,
        OutputFormat::Text => {
            let verdict = if output.can_combine {
                "combines into"
            } else {
                "does not combine into"
            };
            println!("{} {} {}", output.from, verdict, output.to);
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
