//! Generic utility primitives shared by the operations.
//!
//! - `validation` - Arity, integer and range checks

pub mod validation;
