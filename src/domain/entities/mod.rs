//! Core domain entities.
//!
//! - [`Link`] - A short code mapped to a target URL, with usage counters
//! - [`NewLink`] - Input for inserting a link
//! - [`CreateOutcome`] - Whether a create call inserted a link or bumped an existing one

pub mod link;

pub use link::{CreateOutcome, Link, NewLink};
