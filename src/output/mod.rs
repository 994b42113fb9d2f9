//! CLI output: the plain-text report and the `--json` envelope.

pub mod report;
pub mod response;

use std::io::{self, Write};

use dataproc::{Error, Result};

pub use report::Report;
pub use response::{print_json_result, ProcessOutput, FAILURE_EXIT_CODE};

/// Write lines to stdout, treating a closed pipe as a clean exit.
pub fn write_stdout<S: AsRef<str>>(lines: &[S]) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for line in lines {
        if let Err(e) = writeln!(handle, "{}", line.as_ref()) {
            if e.kind() == io::ErrorKind::BrokenPipe {
                return Ok(()); // Exit gracefully on SIGPIPE
            }
            return Err(Error::internal_io(
                e.to_string(),
                Some("write stdout".to_string()),
            ));
        }
    }
    Ok(())
}

/// Print a failure the way text mode reports it and return the exit code.
///
/// Usage errors are followed by the usage listing on stdout.
pub fn print_text_error(err: &Error, usage: &str) -> i32 {
    eprintln!("Error: {}", err);
    if err.code.is_usage() {
        if let Err(io_err) = write_stdout(&[usage.trim_end()]) {
            eprintln!("Error: {}", io_err);
        }
    }
    FAILURE_EXIT_CODE
}
