//! Link creation, lookup, deletion and click tracking.

use std::sync::Arc;

use metrics::counter;
use tracing::{debug, info, warn};

use crate::application::services::code_allocator::{
    Allocation, CodeAllocator, MAX_ALLOCATION_ATTEMPTS,
};
use crate::domain::entities::{CreateOutcome, Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::is_well_formed;
use crate::utils::url_validator::validate_target_url;

/// Service exposing the link store operations.
///
/// Validates input, picks between the custom-code, generated-code and
/// repeated-URL paths, and delegates every mutation to a single atomic
/// repository call.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    allocator: CodeAllocator<L>,
    max_insert_attempts: usize,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        let allocator = CodeAllocator::new(link_repository.clone());
        Self {
            link_repository,
            allocator,
            max_insert_attempts: MAX_ALLOCATION_ATTEMPTS,
        }
    }

    /// Creates a service with a custom allocator bound.
    ///
    /// The bound applies both to candidates per allocation and to inserts lost
    /// to concurrent writers.
    pub fn with_max_attempts(link_repository: Arc<L>, max_attempts: usize) -> Self {
        let allocator = CodeAllocator::with_max_attempts(link_repository.clone(), max_attempts);
        Self {
            link_repository,
            allocator,
            max_insert_attempts: max_attempts,
        }
    }

    /// Creates a short link, or counts a repeated request for a known URL.
    ///
    /// # Paths
    ///
    /// - `custom_code` given: inserts a new link with that code. Never merges
    ///   into an existing link for the same URL.
    /// - No `custom_code`, URL already linked: bumps `creation_count` on the
    ///   oldest link for that exact URL string and returns
    ///   [`CreateOutcome::Incremented`].
    /// - No `custom_code`, URL unknown: allocates a code and inserts. An insert
    ///   lost to a concurrent writer is retried with a fresh code.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if `target_url` is not absolute `http(s)`
    /// - [`AppError::InvalidCode`] if `custom_code` is not 6-8 alphanumerics
    /// - [`AppError::CodeConflict`] if `custom_code` is taken
    /// - [`AppError::AllocationExhausted`] if no free code was found
    pub async fn create_link(
        &self,
        target_url: &str,
        custom_code: Option<&str>,
    ) -> Result<(Link, CreateOutcome), AppError> {
        validate_target_url(target_url)?;

        if let Some(code) = custom_code {
            if !is_well_formed(code) {
                return Err(AppError::InvalidCode {
                    code: code.to_string(),
                });
            }

            let link = self
                .link_repository
                .insert(NewLink::new(code, target_url))
                .await?;

            counter!("links_created_total").increment(1);
            info!(code = %link.code, target_url = %link.target_url, "Created link with custom code");
            return Ok((link, CreateOutcome::Created));
        }

        if let Some(existing) = self.link_repository.find_by_target_url(target_url).await? {
            if let Some(link) = self
                .link_repository
                .increment_creation_count(&existing.code)
                .await?
            {
                counter!("links_incremented_total").increment(1);
                info!(
                    code = %link.code,
                    creation_count = link.creation_count,
                    "Target URL requested again"
                );
                return Ok((link, CreateOutcome::Incremented));
            }

            debug!(code = %existing.code, "Existing link vanished before increment");
        }

        let link = self.insert_with_generated_code(target_url).await?;

        counter!("links_created_total").increment(1);
        info!(code = %link.code, target_url = %link.target_url, "Created link");
        Ok((link, CreateOutcome::Created))
    }

    /// Retrieves a link by code without side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(code))
    }

    /// Lists all links, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Deletes a link, freeing its code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if !self.link_repository.delete(code).await? {
            return Err(AppError::not_found(code));
        }

        info!(code = %code, "Deleted link");
        Ok(())
    }

    /// Records one redirect traversal and returns the updated link.
    ///
    /// The increment and the `last_clicked` stamp are one atomic repository
    /// call, so concurrent redirects of the same code are all counted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code; nothing is written.
    pub async fn record_click(&self, code: &str) -> Result<Link, AppError> {
        let link = self
            .link_repository
            .record_click(code)
            .await?
            .ok_or_else(|| AppError::not_found(code))?;

        counter!("link_clicks_total").increment(1);
        debug!(code = %link.code, total_clicks = link.total_clicks, "Recorded click");
        Ok(link)
    }

    /// Checks that the backing store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }

    async fn insert_with_generated_code(&self, target_url: &str) -> Result<Link, AppError> {
        for _ in 0..self.max_insert_attempts {
            let code = match self.allocator.allocate().await? {
                Allocation::Found(code) => code,
                Allocation::Exhausted => {
                    return Err(AppError::AllocationExhausted {
                        attempts: self.allocator.max_attempts(),
                    });
                }
            };

            match self
                .link_repository
                .insert(NewLink::new(code, target_url))
                .await
            {
                Ok(link) => return Ok(link),
                Err(AppError::CodeConflict { code }) => {
                    counter!("code_insert_races_total").increment(1);
                    warn!(code = %code, "Allocated code claimed concurrently, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::AllocationExhausted {
            attempts: self.max_insert_attempts,
        })
    }
}
