use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "domaincheck-cli", version)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// read domain names from stdin (one per line)
    #[arg(long)]
    pub stdin: bool,

    /// write report to file (JSON/NDJSON/CSV depending on --format)
    #[arg(long)]
    pub out: Option<String>,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    pub format: String,

    /// print stable error codes instead of messages (human format)
    #[arg(long)]
    pub codes: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    Validate {
        /// domain name, already converted to ASCII
        domain: String,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }
}
