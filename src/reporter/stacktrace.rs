//! Renders the call stack of the reporting site.

use std::backtrace::{Backtrace, BacktraceStatus};

/// Number of frames considered for rendering, including the capture site.
pub const MAX_FRAMES: usize = 31;

/// A single symbol from a rendered backtrace.
#[derive(Debug, PartialEq, Eq)]
struct Frame<'a> {
    symbol: &'a str,
    location: Option<&'a str>,
}

impl Frame<'_> {
    fn render(&self) -> String {
        match self.location {
            Some(location) => format!("{} at {}", self.symbol, location),
            None => self.symbol.to_string(),
        }
    }

    /// Frames belonging to the standard library's capture routines.
    fn is_capture_machinery(&self) -> bool {
        let symbol = self.symbol.trim_start_matches('<');
        symbol.starts_with("std::backtrace") || symbol.starts_with("std::backtrace_rs")
    }
}

/// Captures the current call stack and renders it one frame per line.
///
/// Capture ignores `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`; the result is
/// empty only when the platform cannot walk the stack.
#[inline(never)]
pub fn capture() -> String {
    let backtrace = Backtrace::force_capture();

    match backtrace.status() {
        BacktraceStatus::Captured => render(&backtrace.to_string()),
        _ => String::new(),
    }
}

/// Renders at most `MAX_FRAMES - 1` frames, dropping the capture-site frame.
fn render(trace: &str) -> String {
    parse_frames(trace)
        .into_iter()
        .filter(|frame| !frame.is_capture_machinery())
        .take(MAX_FRAMES)
        .skip(1)
        .map(|frame| frame.render())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses the textual form of a `std::backtrace::Backtrace`.
///
/// Each frame line looks like `  3: crate::module::function`, optionally
/// followed by an `at path:line:col` line. Inlined symbols share the index
/// of their physical frame and appear on unnumbered lines; they are treated
/// as frames of their own.
///
/// std does not guarantee this text format; it matches the output of current
/// toolchains and must be revisited if that output changes.
fn parse_frames(trace: &str) -> Vec<Frame<'_>> {
    let mut frames: Vec<Frame<'_>> = Vec::new();

    for line in trace.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if let Some(location) = line.strip_prefix("at ") {
            if let Some(frame) = frames.last_mut() {
                frame.location = Some(location.trim());
            }
            continue;
        }

        if line.starts_with("note:") {
            continue;
        }

        let symbol = match line.split_once(':') {
            Some((index, rest)) if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) =>
                rest.trim(),
            _ => line,
        };

        frames.push(Frame { symbol, location: None });
    }

    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic_trace(frames: usize) -> String {
        let mut trace = String::new();
        trace.push_str("   0: std::backtrace_rs::backtrace::libunwind::trace\n");
        trace.push_str("             at /rustc/library/std/src/../../backtrace/src/backtrace/libunwind.rs:116:5\n");
        trace.push_str("   1: std::backtrace::Backtrace::create\n");
        trace.push_str("             at /rustc/library/std/src/backtrace.rs:331:13\n");
        trace.push_str("   2: error_reporter::reporter::stacktrace::capture\n");
        trace.push_str("             at ./src/reporter/stacktrace.rs:36:21\n");
        for i in 0..frames {
            trace.push_str(&format!("  {}: app::handler_{}\n", i + 3, i));
            trace.push_str(&format!("             at ./src/app.rs:{}:5\n", i + 1));
        }
        trace
    }

    #[test]
    fn test_parse_frames_reads_symbols_and_locations() {
        let trace = "   0: app::main\n             at ./src/main.rs:3:5\n   1: <unknown>\n";

        let frames = parse_frames(trace);

        assert_eq!(
            frames,
            vec![
                Frame { symbol: "app::main", location: Some("./src/main.rs:3:5") },
                Frame { symbol: "<unknown>", location: None },
            ]
        );
    }

    #[test]
    fn test_parse_frames_keeps_inlined_symbols() {
        let trace = "   4: app::outer\n                 app::inlined\n             at ./src/app.rs:9:1\n";

        let frames = parse_frames(trace);

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], Frame { symbol: "app::outer", location: None });
        assert_eq!(frames[1], Frame { symbol: "app::inlined", location: Some("./src/app.rs:9:1") });
    }

    #[test]
    fn test_parse_frames_keeps_symbols_with_colons() {
        let frames = parse_frames("  12: <app::Handler as core::ops::Fn<()>>::call\n");
        assert_eq!(frames[0].symbol, "<app::Handler as core::ops::Fn<()>>::call");
    }

    #[test]
    fn test_render_skips_capture_site_frame() {
        let rendered = render(&synthetic_trace(3));

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "app::handler_0 at ./src/app.rs:1:5",
                "app::handler_1 at ./src/app.rs:2:5",
                "app::handler_2 at ./src/app.rs:3:5",
            ]
        );
        assert!(!rendered.contains("stacktrace::capture"));
        assert!(!rendered.contains("std::backtrace"));
    }

    #[test]
    fn test_render_limits_frame_count() {
        let rendered = render(&synthetic_trace(100));

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), MAX_FRAMES - 1);
        assert_eq!(lines[0], "app::handler_0 at ./src/app.rs:1:5");
        assert_eq!(lines[29], "app::handler_29 at ./src/app.rs:30:5");
    }

    #[test]
    fn test_render_empty_trace() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_capture_starts_at_caller() {
        let rendered = capture();

        assert!(!rendered.is_empty());
        assert!(rendered.lines().count() < MAX_FRAMES);
        assert!(!rendered.contains("stacktrace::capture"));
        assert!(
            rendered.starts_with("error_reporter::reporter::stacktrace::tests::test_capture_starts_at_caller"),
            "unexpected first frame: {rendered}"
        );
    }
}
