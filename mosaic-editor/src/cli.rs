use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mosaic", about = "Compose block layouts from surface event scripts")]
pub struct Args {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to <config dir>/mosaic/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a JSON-lines surface event script and print every saved layout
    Replay {
        script: PathBuf,

        /// Print layouts on one line regardless of config
        #[arg(long)]
        compact: bool,
    },
    /// List the palette templates
    Templates,
}

impl Args {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
