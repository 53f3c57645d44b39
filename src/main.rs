use anyhow::{Context, Result};
use getmetobs::{Config, MetobsError};
use log::LevelFilter;
use std::process;

#[tokio::main]
async fn main() {
    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        // --help lands here too, it goes to stdout with exit code 0
        Err(MetobsError::Usage(e)) if !e.use_stderr() => e.exit(),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    if let Err(e) = try_main(&config).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn try_main(config: &Config) -> Result<()> {
    let log_level = if config.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::builder()
        .filter_level(log_level)
        .try_init()
        .context("Failed to initialise logger")?;

    let path = getmetobs::run(config).await?;
    println!("File downloaded successfully: {}", path.display());
    Ok(())
}
