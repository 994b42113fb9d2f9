//! Plain-text report read by the invoking process.
//!
//! The parent only relies on the `RESULT: <value>` line; everything else is
//! tagged trace output.

use dataproc::dispatch::bracketed;
use dataproc::Outcome;

pub const TAG: &str = "[Rust]";

fn tagged(message: impl std::fmt::Display) -> String {
    format!("{} {}", TAG, message)
}

/// Lines printed before the operation runs. `name` is echoed as typed.
pub fn header(name: &str, args: &[String]) -> Vec<String> {
    vec![
        tagged("Starting data processing..."),
        tagged(format_args!("Operation: {}", name)),
        tagged(format_args!("Arguments: {}", bracketed(args))),
    ]
}

pub struct Report<'a> {
    pub outcome: &'a Outcome,
    pub duration_ms: f64,
}

impl Report<'_> {
    pub fn result_line(&self) -> String {
        format!("RESULT: {}", self.outcome.result)
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.outcome.trace.iter().map(tagged).collect();
        lines.push(self.result_line());
        lines.push(tagged(format_args!(
            "Execution time: {:.3}ms",
            self.duration_ms
        )));
        lines.push(tagged("Processing completed successfully!"));
        lines
    }
}
