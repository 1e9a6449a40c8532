use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "scandeck", version, about = "Security finding normalization and triage service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP REST API server
    Serve(ServeArgs),
    /// Render a one-shot triage report in the terminal
    Report(ReportArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port (overrides config)
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct ReportArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Restrict to one scanner: image or dynamic
    #[arg(long)]
    pub source: Option<String>,

    /// Order findings by severity and score instead of scanner order
    #[arg(long)]
    pub sorted: bool,

    /// Show a single finding in full detail
    #[arg(long)]
    pub id: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
