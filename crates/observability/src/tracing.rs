//! Span helpers shared by glyphgraph crates

/// Create a span for one git invocation
///
/// The exit code and duration fields start empty; fill them with
/// `Span::record` or [`record_duration`](crate::record_duration).
///
/// # Example
///
/// ```rust
/// use glyphgraph_observability::git_span;
///
/// let span = git_span!("commit");
/// let _guard = span.enter();
/// // ... run git ...
/// ```
#[macro_export]
macro_rules! git_span {
    ($subcommand:expr) => {
        tracing::debug_span!(
            "git.command",
            git.subcommand = $subcommand,
            git.exit_code = tracing::field::Empty,
            git.duration_ms = tracing::field::Empty,
        )
    };
}

/// Create a span for painting a word onto a branch
///
/// # Example
///
/// ```rust
/// use glyphgraph_observability::paint_span;
///
/// let span = paint_span!("word-hi", 32);
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! paint_span {
    ($branch:expr, $commits:expr) => {
        tracing::info_span!(
            "paint",
            paint.branch = $branch,
            paint.commits = $commits,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Record an error on the current span
///
/// Records the error message on the current span and emits an error event.
pub fn record_error<E: std::fmt::Display + ?Sized>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::error!(error = %error, "Operation failed");
}

/// Record latency/duration on the current span
///
/// # Example
///
/// ```rust
/// use glyphgraph_observability::record_duration;
/// use std::time::Instant;
///
/// let start = Instant::now();
/// // ... operation ...
/// record_duration("git.duration_ms", start.elapsed());
/// ```
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
