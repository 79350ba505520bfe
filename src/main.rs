// src/main.rs
use color_eyre::eyre::eyre;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // RUST_LOG controls diagnostic output; human-facing progress goes
    // through the console sink regardless.
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .finish()
        .try_init();

    bible_fetch::cli::run().map_err(|e| eyre!(e.to_string()))
}
