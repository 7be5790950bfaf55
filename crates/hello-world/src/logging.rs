//! Sets up logging using `tracing`, writing to standard error so that standard
//! output only ever carries the greeting.

use crate::logging::LoggingError::{ColorInitialization, Configuration, GlobalSubscriber};
use thiserror::Error;
use time::format_description::well_known::Iso8601;
use time::UtcOffset;
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// An error that occurred when setting up logging.
#[derive(Error, Debug)]
pub enum LoggingError {
    /// `color_eyre` refused to install its report handler.
    #[error("could not install colored error reports")]
    ColorInitialization(#[source] color_eyre::Report),
    /// Neither `RUST_LOG` nor the default level formed a valid filter.
    #[error("invalid log filter")]
    Configuration(#[source] tracing_subscriber::filter::ParseError),
    /// Another global subscriber was already installed.
    #[error("a global tracing subscriber is already installed")]
    GlobalSubscriber(#[source] tracing_subscriber::util::TryInitError),
}

/// Whether installing logging succeeded.
pub type LoggingResult<T, E = LoggingError> = Result<T, E>;

/// Installs the global tracing subscriber and `color_eyre` error reports.
///
/// The log level is read from `RUST_LOG` and defaults to `warn`.
pub fn install() -> LoggingResult<()> {
    install_tracing()?;
    color_eyre::install().map_err(ColorInitialization)?;
    Ok(())
}

fn install_tracing() -> LoggingResult<()> {
    // The local offset is unavailable on some platforms (e.g. multithreaded unix processes).
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_thread_ids(true)
        .with_timer(OffsetTime::new(offset, Iso8601::DEFAULT))
        .with_target(false);
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .map_err(Configuration)?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .try_init()
        .map_err(GlobalSubscriber)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn installing_twice_reports_existing_subscriber() {
        // Whichever call comes first in this process claims the global subscriber.
        install().ok();

        let error = install().unwrap_err();

        assert!(matches!(error, GlobalSubscriber(_)));
        assert_eq!(
            "a global tracing subscriber is already installed",
            error.to_string()
        );
    }
}
