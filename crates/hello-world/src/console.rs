//! A process-wide standard output that can be temporarily redirected into memory.
//!
//! Everything written through [`stdout`] reaches the real standard output, unless a
//! [`Redirection`] is alive, in which case it is collected in that redirection's sink.
//! Only one redirection exists at a time. Other threads asking for one wait until the
//! current one is dropped.

use parking_lot::{const_mutex, Mutex, MutexGuard};
use std::cell::Cell;
use std::io;
use std::io::Write;
use std::string::FromUtf8Error;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, trace};

/// An error that occurred when redirecting standard output.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// The current thread already holds a redirection.
    #[error("standard output is already redirected by this thread")]
    NestedRedirection,
    /// The captured bytes were not valid UTF-8.
    #[error("captured output is not valid UTF-8")]
    InvalidUtf8(#[source] FromUtf8Error),
}

/// Whether a console operation succeeded.
pub type ConsoleResult<T, E = ConsoleError> = Result<T, E>;

type Sink = Arc<Mutex<Vec<u8>>>;

/// The sink of the active redirection, if any.
static ACTIVE_SINK: Mutex<Option<Sink>> = const_mutex(None);

/// Held for as long as a redirection is alive.
static REDIRECTION_LOCK: Mutex<()> = const_mutex(());

thread_local! {
    static HOLDS_REDIRECTION: Cell<bool> = Cell::new(false);
}

/// A handle to the process' standard output, honoring any active [`Redirection`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

/// Returns a handle to the process' standard output.
pub fn stdout() -> Stdout {
    Stdout
}

impl Write for Stdout {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match ACTIVE_SINK.lock().as_ref() {
            Some(sink) => {
                sink.lock().extend_from_slice(buf);
                Ok(buf.len())
            }
            None => io::stdout().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match ACTIVE_SINK.lock().as_ref() {
            Some(_) => Ok(()),
            None => io::stdout().flush(),
        }
    }
}

/// Whether standard output is currently redirected.
pub fn is_redirected() -> bool {
    ACTIVE_SINK.lock().is_some()
}

/// Redirects standard output into memory until the returned guard is dropped.
///
/// Blocks while another thread holds a redirection.
///
/// # Errors
/// Returns [`ConsoleError::NestedRedirection`] if the calling thread already holds one.
pub fn redirect() -> ConsoleResult<Redirection> {
    if HOLDS_REDIRECTION.with(Cell::get) {
        return Err(ConsoleError::NestedRedirection);
    }

    let exclusive = REDIRECTION_LOCK.lock();
    HOLDS_REDIRECTION.with(|holds| holds.set(true));

    let sink = Sink::default();
    *ACTIVE_SINK.lock() = Some(Arc::clone(&sink));
    debug!("redirected standard output into memory");

    Ok(Redirection {
        sink,
        _exclusive: exclusive,
    })
}

/// An active redirection of standard output.
///
/// Dropping it restores the original standard output, also during unwinding.
#[derive(Debug)]
#[must_use = "standard output is restored as soon as the redirection is dropped"]
pub struct Redirection {
    sink: Sink,
    _exclusive: MutexGuard<'static, ()>,
}

impl Redirection {
    /// Everything captured so far.
    pub fn contents(&self) -> ConsoleResult<String> {
        let bytes = self.sink.lock().clone();
        String::from_utf8(bytes).map_err(ConsoleError::InvalidUtf8)
    }

    /// Restores standard output and returns everything that was captured.
    pub fn restore(self) -> ConsoleResult<String> {
        let captured = std::mem::take(&mut *self.sink.lock());
        drop(self);
        String::from_utf8(captured).map_err(ConsoleError::InvalidUtf8)
    }
}

impl Drop for Redirection {
    fn drop(&mut self) {
        *ACTIVE_SINK.lock() = None;
        HOLDS_REDIRECTION.with(|holds| holds.set(false));
        trace!("restored standard output");
        // `_exclusive` is released after this, so the next redirection starts clean.
    }
}
