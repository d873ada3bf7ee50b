use clap::Parser;
use dirmirror::config::Cli;
use dirmirror::{daemon, Config, EventLog};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Convert CLI args to Config - this validates immediately
    let config = Config::try_from(cli)?;

    if config.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let log = EventLog::open(&config.log_file)?;

    println!("dirmirror v{}", dirmirror::VERSION);
    println!("  Source: {}", config.source.display());
    println!("  Destination: {}", config.destination.display());
    println!("  Log file: {}", config.log_file.display());
    println!("  Sync interval: {}s", config.sync_interval);

    daemon::run(&config, &log)
}
