//! Prints a fixed greeting to standard output.

// rustc lints
#![warn(
    let_underscore,
    nonstandard_style,
    unused,
    explicit_outlives_requirements,
    meta_variable_misuse,
    missing_debug_implementations,
    missing_docs,
    non_ascii_idents,
    noop_method_call,
    trivial_casts,
    trivial_numeric_casts
)]
// clippy lints
#![warn(
    clippy::cognitive_complexity,
    clippy::dbg_macro,
    clippy::if_then_some_else_none,
    clippy::rc_mutex,
    clippy::unwrap_used,
    clippy::large_enum_variant
)]

pub mod console;
pub mod logging;

use std::io;
use std::io::Write;
use thiserror::Error;
use tracing::debug;

/// The greeting written by [`main`].
pub const GREETING: &str = "Hello, World!";

/// An error that occurred while greeting.
#[derive(Error, Debug)]
pub enum GreetingError {
    /// The greeting could not be written to its destination.
    #[error("could not write the greeting")]
    Write(#[source] io::Error),
}

/// Whether a greeting operation succeeded.
pub type GreetingResult<T, E = GreetingError> = Result<T, E>;

/// Writes [`GREETING`] followed by a newline to `writer`, then flushes it.
pub fn greet<W: Write>(writer: &mut W) -> GreetingResult<()> {
    writeln!(writer, "{GREETING}").map_err(GreetingError::Write)?;
    writer.flush().map_err(GreetingError::Write)?;
    debug!(greeting = GREETING, "wrote greeting");
    Ok(())
}

/// Writes [`GREETING`] to the process' standard output.
///
/// Output goes through [`console::stdout`], so an active
/// [`console::Redirection`] receives it instead of the terminal.
pub fn main() -> GreetingResult<()> {
    greet(&mut console::stdout())
}
