use clap::Parser;
use syntax_smoke::utils::logger;
use syntax_smoke::{CliConfig, SmokeCheck};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting syntax-smoke");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = SmokeCheck::new().run(&mut out) {
        tracing::error!("❌ Smoke check failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }
}
