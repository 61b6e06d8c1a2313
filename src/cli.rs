use clap::Parser;
use std::path::PathBuf;

/// CLIの定義
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "This tool checks whether IPv4 addresses are covered by a CIDR range."
)]
pub struct Cli {
    #[arg(
        short = 'r',
        long = "cidr",
        required = true,
        help = "Specify the CIDR range. '/32' is assumed when the prefix is omitted.\nExample: 192.168.0.0/24"
    )]
    pub cidr: String,

    #[arg(
        short = 'i',
        long = "ip",
        required_unless_present = "file",
        required = false,
        num_args = 1..,
        help = "Specify the IPv4 addresses to check.\nExample: 192.168.0.1 10.0.0.1"
    )]
    pub ip_addresses: Option<Vec<String>>,

    #[arg(
        short = 'F',
        long = "file",
        required = false,
        help = "Read the IPv4 addresses to check from a file (one per line, '#' starts a comment)."
    )]
    pub file: Option<PathBuf>,

    #[arg(
        short = 'f',
        long = "format",
        default_value = "txt",
        required = false,
        hide_default_value = true,
        help = "Select output format: 'txt' or 'json'.\ndefault: txt"
    )]
    pub output_format: String,

    #[arg(
        short = 'o',
        long = "output",
        required = false,
        help = "Write the report to a file instead of standard output."
    )]
    pub output: Option<PathBuf>,

    #[arg(
        long = "show-range",
        default_value = "false",
        help = "Include the network address, netmask, bounds and size of the CIDR range in the report."
    )]
    pub show_range: bool,

    #[arg(
        long = "concurrency",
        default_value = "0",
        value_parser = clap::value_parser!(usize),
        hide_default_value = true,
        help = "Number of worker threads for checking addresses.\ndefault: 0 (number of CPUs)"
    )]
    pub concurrency: usize,

    #[arg(long = "debug", default_value = "false", help = "Enable debug logging.")]
    pub debug: bool,
}
