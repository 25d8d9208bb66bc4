pub mod assign;
pub mod list;
pub mod show;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rangr")]
#[command(about = "Assigns contiguous static IPv4 ranges to a network adapter.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactively assign a static IPv4 range to one adapter
    #[command(alias = "a")]
    Assign,
    /// List the adapters that can take configuration
    #[command(alias = "l")]
    List,
    /// Show the current IPv4 configuration of an adapter
    #[command(alias = "s")]
    Show {
        /// Adapter name; prompts for one when omitted
        adapter: Option<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
