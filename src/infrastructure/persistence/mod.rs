//! PostgreSQL repository implementations.
//!
//! Queries are bound at runtime through SQLx prepared statements.

pub mod pg_link_repository;

pub use pg_link_repository::PgLinkRepository;
