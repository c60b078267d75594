mod api;
mod config;
mod logging;
mod models;
mod router;
mod run;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let (config, rest) = config::Config::split_args(&args);

    let log_dir = config::log_dir()?;
    logging::init(&log_dir)?;
    tracing::info!("campaigntui starting against {}", config.base_url);

    if rest.is_empty() {
        run::as_tui(&config, "/")
    } else {
        run::cli::as_cli(&rest, &config)
    }
}
