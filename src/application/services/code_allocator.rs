//! Rejection-sampling allocator for unused short codes.

use std::sync::Arc;

use metrics::counter;
use tracing::warn;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Upper bound on candidates tried by a single allocation.
pub const MAX_ALLOCATION_ATTEMPTS: usize = 1000;

/// Result of an allocation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Allocation {
    /// A code that was unused when checked.
    Found(String),
    /// Every candidate within the attempt bound was already taken.
    Exhausted,
}

/// Produces codes that are not currently used by any link.
///
/// A returned code is only free at the moment of the check. Callers still insert
/// through [`LinkRepository::insert`], which rejects a code claimed in between.
pub struct CodeAllocator<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    max_attempts: usize,
}

impl<L: LinkRepository + ?Sized> CodeAllocator<L> {
    /// Creates an allocator bounded by [`MAX_ALLOCATION_ATTEMPTS`].
    pub fn new(link_repository: Arc<L>) -> Self {
        Self::with_max_attempts(link_repository, MAX_ALLOCATION_ATTEMPTS)
    }

    /// Creates an allocator that gives up after `max_attempts` candidates.
    pub fn with_max_attempts(link_repository: Arc<L>, max_attempts: usize) -> Self {
        Self {
            link_repository,
            max_attempts,
        }
    }

    /// Number of candidates tried before reporting [`Allocation::Exhausted`].
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Generates candidates until one is unused or the attempt bound is hit.
    ///
    /// # Errors
    ///
    /// Propagates storage errors from the existence check.
    pub async fn allocate(&self) -> Result<Allocation, AppError> {
        for _ in 0..self.max_attempts {
            let candidate = generate_code();

            if !self.link_repository.exists(&candidate).await? {
                return Ok(Allocation::Found(candidate));
            }

            counter!("code_collisions_total").increment(1);
            warn!(code = %candidate, "Generated code collided with an existing link");
        }

        warn!(attempts = self.max_attempts, "Code allocation exhausted");
        Ok(Allocation::Exhausted)
    }
}
