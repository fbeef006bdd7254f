//! In-process storage backend.

mod memory_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
