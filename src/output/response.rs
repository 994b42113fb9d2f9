//! JSON response envelope for `--json` mode.
//!
//! Provides the envelope, printing, and exit code mapping.

use dataproc::error::Hint;
use dataproc::{Error, Result, Value};
use serde::Serialize;

/// Exit status for every failure kind.
pub const FAILURE_EXIT_CODE: i32 = 1;

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
}

/// Payload of a successful run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessOutput {
    pub command: String,
    pub args: Vec<String>,
    pub result: Value,
    pub trace: Vec<String>,
    pub duration_ms: f64,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
            }),
        }
    }
}

fn print_response<T: Serialize>(response: &CliResponse<T>) -> Result<()> {
    let payload = response.to_json()?;
    super::write_stdout(&[payload])
}

fn print_result<T: Serialize>(result: Result<T>) -> Result<()> {
    match result {
        Ok(data) => print_response(&CliResponse::success(data)),
        Err(err) => print_response(&CliResponse::<()>::from_error(&err)),
    }
}

/// Print the envelope for `result` and return the process exit code.
pub fn print_json_result<T: Serialize>(result: Result<T>) -> i32 {
    let exit_code = match &result {
        Ok(_) => 0,
        Err(_) => FAILURE_EXIT_CODE,
    };

    match print_result(result) {
        Ok(()) => exit_code,
        Err(err) => {
            eprintln!("Error: {}", err);
            FAILURE_EXIT_CODE
        }
    }
}
