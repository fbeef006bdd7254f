//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::code_allocator::CodeAllocator`] - Unused short code allocation
//! - [`services::link_service::LinkService`] - Link creation, lookup, deletion and click tracking

pub mod services;
