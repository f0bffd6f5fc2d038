use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use postfeed::{
    infrastructure::{cli::Cli, config::Config, tui::real::RealTui},
    integration::app_runner::AppRunner,
    trace_dbg,
    utils::{initialize_logging, initialize_panic_handler},
};

/// File config with command line overrides applied
fn load_config(args: &Cli) -> Result<Config> {
    let mut config = Config::new()?;
    if let Some(base_url) = &args.base_url {
        config.api.base_url = base_url.clone();
    }
    Ok(config)
}

async fn tokio_main() -> Result<()> {
    initialize_logging()?;
    initialize_panic_handler()?;

    let args = Cli::parse();
    let config = load_config(&args)?;
    trace_dbg!(level: tracing::Level::DEBUG, &config.api);

    let tui = RealTui::new()?
        .tick_rate(args.tick_rate)
        .frame_rate(args.frame_rate)
        .paste(true);
    let mut runner = AppRunner::new_with_real(config, Arc::new(Mutex::new(tui))).await?;
    runner.run().await
}

#[tokio::main]
async fn main() -> Result<()> {
    tokio_main().await.inspect_err(|_| {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
    })
}
