// Public modules
pub mod collections;
pub mod dispatch;
pub mod error;
pub mod math;
pub mod operation;
pub mod strings;

// Re-export common types for convenience
pub use dispatch::{Outcome, Value};
pub use error::{Error, ErrorCode, Result};
pub use operation::Operation;
