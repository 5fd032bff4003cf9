pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "marina")]
#[command(about = "Boat inventory and billing for a small marina")]
pub struct CliConfig {
    /// Boat data file, one boat per line
    pub file: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the number of slots from the config
    #[arg(long)]
    pub capacity: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Print the inventory as JSON and exit
    #[arg(long)]
    pub inventory_json: bool,
}
