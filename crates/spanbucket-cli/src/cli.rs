use clap::{Parser, Subcommand};

/// Epoch-aligned calendar period bucketing tool
#[derive(Parser, Debug)]
#[command(name = "spanbucket", version)]
#[command(about = "Epoch-aligned calendar period bucketing tool")]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the bucket of each input timestamp
    Bucket(BucketArgs),
    /// List every bucket touching a time range
    Range(RangeArgs),
    /// Show the boundaries of given period indices
    Time(TimeArgs),
    /// Check whether one interval cleanly subdivides another
    Combine(CombineArgs),
    /// Compare the bucket sizes of two intervals
    Compare(CompareArgs),
    /// Show the details of an interval or an encoded value
    Inspect(InspectArgs),
}

#[derive(clap::Args, Debug)]
pub struct BucketArgs {
    /// Bucket interval, e.g. 4hr, 15min, 1wk
    #[arg(short = 'i', long, default_value = "1d")]
    pub interval: String,

    /// Input format: epoch_ms, epoch_s, rfc3339, auto
    #[arg(short = 'f', long, default_value = "epoch_ms")]
    pub format: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,

    /// Input file path (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Read from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Reject quantities above the span's ceiling
    #[arg(long)]
    pub strict: bool,
}

#[derive(clap::Args, Debug)]
pub struct RangeArgs {
    /// Bucket interval
    #[arg(short = 'i', long, default_value = "1d")]
    pub interval: String,

    /// Start of range (inclusive, RFC3339)
    #[arg(long)]
    pub start: String,

    /// End of range (inclusive, RFC3339)
    #[arg(long)]
    pub end: String,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct TimeArgs {
    /// Bucket interval
    #[arg(short = 'i', long)]
    pub interval: String,

    /// First period index (may be negative)
    #[arg(short = 'p', long, allow_negative_numbers = true)]
    pub period: i64,

    /// Number of consecutive periods to show
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: u32,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct CombineArgs {
    /// Smaller interval
    #[arg(long)]
    pub from: String,

    /// Larger interval
    #[arg(long)]
    pub to: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct CompareArgs {
    /// Left-hand interval
    pub left: String,

    /// Right-hand interval
    pub right: String,

    /// Reference instant (RFC3339); defaults to 2018-01-01T12:00:00Z
    #[arg(long)]
    pub at: Option<String>,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// Interval to inspect
    #[arg(conflicts_with = "encoded", required_unless_present = "encoded")]
    pub interval: Option<String>,

    /// Encoded interval value to decode and inspect
    #[arg(long)]
    pub encoded: Option<u32>,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}
