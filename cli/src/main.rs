//! Specimen CLI - binary entry point.
//!
//! ```text
//! main() -> init_tracing() -> load_settings() -> Runner::init() -> Runner::invoke(DEFAULT_ARGS)
//! ```
//!
//! Demo output goes to stdout through [`StdoutConsole`]; diagnostics go to
//! stderr through `tracing`, filtered by `RUST_LOG` (default `warn`).

use std::{io::stderr, sync::Arc};

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use specimen_engine::{DEFAULT_ARGS, RunSettings, Runner, SpecimenConfig, StdoutConsole};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    // stdout belongs to the demo output.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(stderr))
        .with(env_filter)
        .init();
}

fn load_settings() -> RunSettings {
    let config = match SpecimenConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Using default settings: {err}");
            None
        }
    };
    RunSettings::resolve(config.as_ref())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let settings = load_settings();
    tracing::info!(
        version = specimen_engine::VERSION,
        tag = %settings.tag,
        max_items = settings.max_items,
        fetch_delay_ms = settings.fetch_delay.as_millis() as u64,
        "Starting"
    );

    let console = Arc::new(StdoutConsole::new(settings.tag.clone()));
    let runner = Runner::new(settings, console);

    runner.init();
    runner.invoke(&DEFAULT_ARGS).await?;

    Ok(())
}
