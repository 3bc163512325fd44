//! Indented trace output on stderr, compiled in with the `logging` feature

use std::sync::atomic::{AtomicUsize, Ordering::Relaxed};

const INDENT_WIDTH: usize = 2;

static DEPTH: AtomicUsize = AtomicUsize::new(0);

pub(crate) fn write(args: std::fmt::Arguments<'_>) {
    let width = DEPTH.load(Relaxed) * INDENT_WIDTH;
    eprintln!("{:width$}{args}", "");
}

pub(crate) fn nest() {
    DEPTH.fetch_add(1, Relaxed);
}

pub(crate) fn unnest() {
    // the closure always returns Some
    let _ = DEPTH.fetch_update(Relaxed, Relaxed, |depth| Some(depth.saturating_sub(1)));
}

macro_rules! log {
    ($($tt:tt)*) => {
        $crate::logging::write(format_args!($($tt)*))
    };
}

/// Logs the line, then nests everything after it
macro_rules! indent {
    ($($tt:tt)*) => {{
        log!($($tt)*);
        $crate::logging::nest();
    }};
}

/// Ends the innermost nesting, then logs the line
macro_rules! dedent {
    ($($tt:tt)*) => {{
        $crate::logging::unnest();
        log!($($tt)*);
    }};
}
