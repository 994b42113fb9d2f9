/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Stdout carries the machine-read report, so diagnostics never go there.
///
/// Usage:
/// ```ignore
/// log_status!("dispatch", "{} with {} argument(s)", op, args.len());
/// log_status!("timing", "{:.3}ms", elapsed_ms);
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod core;
pub mod utils;

// Re-export everything from core for ergonomic library use
// Users can write `dataproc::dispatch` instead of `dataproc::core::dispatch`
pub use self::core::*;
pub use utils::*;
