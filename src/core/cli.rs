use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// All relative paths will be interpreted relative to this directory.
    #[arg(long, global = true)]
    pub cwd: Option<String>,

    /// HTML coverage report to read (default: ./coverage/lcov-report/index.html)
    #[arg(long, global = true)]
    pub input: Option<String>,

    /// JSON file to write (default: ./coverage-report.json)
    #[arg(long, global = true)]
    pub output: Option<String>,

    /// Logging level (overrides config). One of: trace, debug, info, warn, error
    #[arg(long = "log.level", global = true)]
    pub log_level: Option<String>,

    /// Logging color control: "on" to force colors, "off" to disable; omit for auto
    #[arg(long = "log.color", global = true)]
    pub log_color: Option<String>,

    /// Defaults to `write` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the coverage percentage and write it to the JSON file
    Write,

    /// Extract the coverage percentage and print it without writing anything
    Print(PrintArgs),

    /// Print the effective configuration
    Config(ConfigArgs),

    /// Create an example config file in the current directory
    Init,
}

/// Arguments for the print command
#[derive(Parser, Debug)]
pub struct PrintArgs {
    /// Output format: "json" (default, same as the written file) or "text" (bare percentage)
    #[arg(long, default_value = "json")]
    pub format: String,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}
