// tests/support/mocks/repos.rs
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use catalog_slugs::domain::errors::DomainResult;
use catalog_slugs::domain::slug::{
    EntityId, NamespaceScope, NewSlugRecord, Slug, SlugRecord, SlugRecordRepository,
    SlugRecordUpdate,
};
use catalog_slugs::infrastructure::repositories::InMemorySlugRecordRepository;

/// Repository whose first `stale_reads` existence checks answer "free",
/// as if a concurrent writer committed right after the read.
pub struct RacingSlugRepository {
    inner: InMemorySlugRecordRepository,
    stale_reads: AtomicU32,
    pub writes: AtomicU32,
}

impl RacingSlugRepository {
    pub fn new(inner: InMemorySlugRecordRepository, stale_reads: u32) -> Self {
        Self {
            inner,
            stale_reads: AtomicU32::new(stale_reads),
            writes: AtomicU32::new(0),
        }
    }
}

#[async_trait]
impl SlugRecordRepository for RacingSlugRepository {
    async fn exists(
        &self,
        scope: &NamespaceScope,
        slug: &Slug,
        exclude: Option<EntityId>,
    ) -> DomainResult<bool> {
        let stale = self
            .stale_reads
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if stale {
            return Ok(false);
        }
        self.inner.exists(scope, slug, exclude).await
    }

    async fn find_by_id(
        &self,
        scope: &NamespaceScope,
        id: EntityId,
    ) -> DomainResult<Option<SlugRecord>> {
        self.inner.find_by_id(scope, id).await
    }

    async fn find_by_slug(
        &self,
        scope: &NamespaceScope,
        slug: &Slug,
    ) -> DomainResult<Option<SlugRecord>> {
        self.inner.find_by_slug(scope, slug).await
    }

    async fn insert(&self, record: NewSlugRecord) -> DomainResult<SlugRecord> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.insert(record).await
    }

    async fn update(&self, update: SlugRecordUpdate) -> DomainResult<SlugRecord> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.update(update).await
    }

    async fn delete(&self, scope: &NamespaceScope, id: EntityId) -> DomainResult<()> {
        self.inner.delete(scope, id).await
    }

    async fn list_missing_slugs(
        &self,
        after: Option<EntityId>,
        limit: u32,
    ) -> DomainResult<Vec<(EntityId, DomainResult<SlugRecord>)>> {
        self.inner.list_missing_slugs(after, limit).await
    }
}
