use color_eyre::eyre::WrapErr;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where log lines go.
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    /// Headless runs share stderr with nothing else.
    Stderr,
    /// The TUI owns the terminal, so logs are appended to a file.
    File(&'a Path),
}

pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "climate_atlas=debug,info"
    } else {
        "climate_atlas=info,warn"
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over `debug`.
pub fn init_tracing(target: LogTarget<'_>, debug: bool) -> color_eyre::eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .wrap_err("failed to install tracing subscriber")?,
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .wrap_err_with(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
                .wrap_err("failed to install tracing subscriber")?;
        }
    }

    Ok(())
}
