#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "syntax-smoke")]
#[command(version)]
#[command(about = "Prints the four-line syntax check smoke output")]
pub struct CliConfig {
    /// Enable verbose output (logs go to stderr)
    #[arg(short, long)]
    pub verbose: bool,
}
