//! Infrastructure layer for storage backends.
//!
//! Implements the repository traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementation
//! - [`memory`] - In-process `DashMap` implementation for single-node use and tests

pub mod memory;
pub mod persistence;
