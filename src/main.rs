use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

mod output;

use dataproc::{dispatch, log_status, operation};
use output::{ProcessOutput, Report, FAILURE_EXIT_CODE};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROGRAM: &str = "dataproc";

#[derive(Parser)]
#[command(name = "dataproc")]
#[command(version = VERSION)]
#[command(about = "Run an elementary string, list, or number operation and print the result")]
#[command(after_help = operation::usage(PROGRAM))]
struct Cli {
    /// Print a JSON envelope instead of the text report
    #[arg(long)]
    json: bool,

    /// Operation (case-insensitive) followed by its arguments, taken verbatim
    #[arg(
        value_name = "OPERATION",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    argv: Vec<String>,
}

fn main() -> ExitCode {
    let started = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.exit();
            }
            let _ = e.print();
            return ExitCode::from(exit_code_to_u8(FAILURE_EXIT_CODE));
        }
    };

    let exit_code = if cli.json {
        run_json(&cli.argv, started)
    } else {
        run_text(&cli.argv, started)
    };

    ExitCode::from(exit_code_to_u8(exit_code))
}

fn run_text(argv: &[String], started: Instant) -> i32 {
    let usage = operation::usage(PROGRAM);

    let (name, args) = match dispatch::split_argv(argv) {
        Ok(split) => split,
        Err(err) => return output::print_text_error(&err, &usage),
    };

    if let Err(err) = output::write_stdout(&output::report::header(name, args)) {
        return output::print_text_error(&err, &usage);
    }

    let outcome = match dispatch::run_named(name, args) {
        Ok((_, outcome)) => outcome,
        Err(err) => return output::print_text_error(&err, &usage),
    };

    let report = Report {
        outcome: &outcome,
        duration_ms: elapsed_ms(started),
    };
    log_status!("timing", "{:.3}ms", report.duration_ms);

    match output::write_stdout(&report.lines()) {
        Ok(()) => 0,
        Err(err) => output::print_text_error(&err, &usage),
    }
}

fn run_json(argv: &[String], started: Instant) -> i32 {
    let result = dispatch::run(argv).map(|(op, outcome)| ProcessOutput {
        command: op.name().to_string(),
        args: argv.iter().skip(1).cloned().collect(),
        result: outcome.result,
        trace: outcome.trace,
        duration_ms: elapsed_ms(started),
    });

    output::print_json_result(result)
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
