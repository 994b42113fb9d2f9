use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    UsageMissingArguments,
    UsageUnknownOperation,

    ValidationInvalidArity,
    ValidationInvalidNumber,
    ValidationOutOfRange,

    InternalIoError,
    InternalJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::UsageMissingArguments => "usage.missing_arguments",
            ErrorCode::UsageUnknownOperation => "usage.unknown_operation",

            ErrorCode::ValidationInvalidArity => "validation.invalid_arity",
            ErrorCode::ValidationInvalidNumber => "validation.invalid_number",
            ErrorCode::ValidationOutOfRange => "validation.out_of_range",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
        }
    }

    /// Usage errors are reported together with the usage text.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            ErrorCode::UsageMissingArguments | ErrorCode::UsageUnknownOperation
        )
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingArgumentsDetails {
    pub provided: usize,
    pub required: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnknownOperationDetails {
    pub operation: String,
    pub known: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArityDetails {
    pub operation: String,
    pub expected: String,
    pub actual: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidNumberDetails {
    pub operation: String,
    pub value: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutOfRangeDetails {
    pub operation: String,
    pub value: i64,
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn usage_missing_arguments(provided: usize, required: usize) -> Self {
        Self::new(
            ErrorCode::UsageMissingArguments,
            "Missing operation or arguments",
            to_details(MissingArgumentsDetails { provided, required }),
        )
        .with_hint("Run 'dataproc <operation> <arguments>'; see 'dataproc --help'")
    }

    pub fn usage_unknown_operation(operation: impl Into<String>, known: Vec<String>) -> Self {
        let operation = operation.into();
        Self::new(
            ErrorCode::UsageUnknownOperation,
            format!("Unknown operation '{}'", operation),
            to_details(UnknownOperationDetails {
                operation,
                known: known.clone(),
            }),
        )
        .with_hint(format!("Known operations: {}", known.join(", ")))
    }

    pub fn validation_invalid_arity(
        operation: impl Into<String>,
        message: impl Into<String>,
        expected: impl Into<String>,
        actual: usize,
    ) -> Self {
        Self::new(
            ErrorCode::ValidationInvalidArity,
            message,
            to_details(InvalidArityDetails {
                operation: operation.into(),
                expected: expected.into(),
                actual,
            }),
        )
    }

    pub fn validation_invalid_number(
        operation: impl Into<String>,
        value: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        let value = value.into();
        Self::new(
            ErrorCode::ValidationInvalidNumber,
            format!("Invalid number: '{}'", value),
            to_details(InvalidNumberDetails {
                operation: operation.into(),
                value,
                error: error.into(),
            }),
        )
    }

    pub fn validation_out_of_range(
        operation: impl Into<String>,
        message: impl Into<String>,
        value: i64,
        min: i64,
        max: i64,
    ) -> Self {
        Self::new(
            ErrorCode::ValidationOutOfRange,
            message,
            to_details(OutOfRangeDetails {
                operation: operation.into(),
                value,
                min,
                max,
            }),
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        Self::new(
            ErrorCode::InternalIoError,
            "IO error",
            to_details(InternalErrorDetails {
                error: error.into(),
                context,
            }),
        )
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        Self::new(
            ErrorCode::InternalJsonError,
            "JSON error",
            to_details(InternalErrorDetails {
                error: error.into(),
                context,
            }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
