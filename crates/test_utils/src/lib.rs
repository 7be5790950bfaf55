use hello_world::console;
use hello_world::GREETING;
use tracing::debug;

/// Runs `f` with standard output redirected into memory and returns what it printed.
///
/// Standard output is restored before returning, and also if `f` panics.
pub fn capture_stdout<F: FnOnce()>(f: F) -> String {
    let redirection = console::redirect().expect("standard output should not be redirected yet");
    f();
    let captured = redirection
        .restore()
        .expect("captured output should be valid UTF-8");
    debug!(?captured, "captured standard output");
    captured
}

/// Asserts that `captured`, ignoring surrounding whitespace, is exactly the greeting.
pub fn assert_greeting(captured: &str) {
    assert_eq!(GREETING, captured.trim());
}
