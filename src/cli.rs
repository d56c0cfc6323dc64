//! CLI argument parsing

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "espdoom-flash")]
#[command(author, version, about = "Flash ESP32-Doom with all partitions", long_about = None)]
pub struct Cli {
    /// ESP32 device port (overrides ESPPORT env var)
    #[arg(short, long)]
    pub port: Option<String>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
