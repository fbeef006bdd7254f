//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Short code generation and well-formedness checks
//! - [`url_validator`] - Target URL validation
//! - [`db_error`] - Database error classification

pub mod code_generator;
pub mod db_error;
pub mod url_validator;
