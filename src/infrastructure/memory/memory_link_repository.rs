//! In-memory implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry as MapEntry;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Stored link plus its insertion sequence, used to order links created within
/// the same clock tick.
#[derive(Debug, Clone)]
struct Entry {
    seq: u64,
    link: Link,
}

/// In-memory implementation of [`LinkRepository`] using DashMap.
///
/// Each mutation runs while holding the write guard of the shard that owns the
/// code, which makes inserts conditional on absence and counter updates free of
/// lost increments, without any lock spanning the whole map.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    storage: DashMap<String, Entry>,
    next_seq: AtomicU64,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        match self.storage.entry(new_link.code) {
            MapEntry::Occupied(occupied) => Err(AppError::conflict(occupied.key().clone())),
            MapEntry::Vacant(vacant) => {
                let link = Link::new(vacant.key().clone(), new_link.target_url, Utc::now());
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                vacant.insert(Entry {
                    seq,
                    link: link.clone(),
                });
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.storage.get(code).map(|entry| entry.link.clone()))
    }

    async fn find_by_target_url(&self, target_url: &str) -> Result<Option<Link>, AppError> {
        Ok(self
            .storage
            .iter()
            .filter(|entry| entry.link.target_url == target_url)
            .min_by_key(|entry| entry.seq)
            .map(|entry| entry.link.clone()))
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.storage.contains_key(code))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let mut entries: Vec<Entry> = self
            .storage
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        entries.sort_by(|a, b| {
            b.link
                .created_at
                .cmp(&a.link.created_at)
                .then(b.seq.cmp(&a.seq))
        });

        Ok(entries.into_iter().map(|entry| entry.link).collect())
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.storage.remove(code).is_some())
    }

    async fn increment_creation_count(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.storage.get_mut(code).map(|mut entry| {
            entry.link.bump_creation_count(Utc::now());
            entry.link.clone()
        }))
    }

    async fn record_click(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.storage.get_mut(code).map(|mut entry| {
            entry.link.register_click(Utc::now());
            entry.link.clone()
        }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
