//! CLI arguments.

use clap::Parser;

/// Search EC2 instances by a tag/filter pattern and print matches as a
/// table or a list of private IPs.
#[derive(Parser, Debug, Clone)]
#[command(name = "ec2grep")]
pub struct Args {
    /// EC2 instance search term (substring, matched server-side)
    #[arg(value_name = "SEARCH", required_unless_present = "version")]
    pub search: Option<String>,

    /// Output only private IPs
    #[arg(short = 'i', long)]
    pub ip_only: bool,

    /// Output each IP on a new line
    #[arg(short = 'n', long)]
    pub newline: bool,

    /// IP delimiter for joined output
    #[arg(short = 'd', long, default_value = " ")]
    pub delimiter: String,

    /// EC2 filter attribute name (see the DescribeInstances API reference)
    #[arg(short = 'f', long, default_value = "tag:Name")]
    pub filter_name: String,

    /// Print version and exit
    #[arg(short = 'v', long)]
    pub version: bool,
}
