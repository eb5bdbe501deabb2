use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ur")]
#[command(about = "User registry CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (else UR_SERVER_URL, else derived from config)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
