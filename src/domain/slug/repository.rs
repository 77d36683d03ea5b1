use crate::domain::errors::DomainResult;
use crate::domain::slug::entity::{NewSlugRecord, SlugRecord, SlugRecordUpdate};
use crate::domain::slug::value_objects::{EntityId, NamespaceScope, Slug};
use async_trait::async_trait;

/// Storage for slug-bearing records.
///
/// Implementations must reject a second live record with the same slug in
/// the same scope and report it as `DomainError::DuplicateSlugOnPersist`.
#[async_trait]
pub trait SlugRecordRepository: Send + Sync {
    async fn exists(
        &self,
        scope: &NamespaceScope,
        slug: &Slug,
        exclude: Option<EntityId>,
    ) -> DomainResult<bool>;

    async fn find_by_id(
        &self,
        scope: &NamespaceScope,
        id: EntityId,
    ) -> DomainResult<Option<SlugRecord>>;

    async fn find_by_slug(
        &self,
        scope: &NamespaceScope,
        slug: &Slug,
    ) -> DomainResult<Option<SlugRecord>>;

    async fn insert(&self, record: NewSlugRecord) -> DomainResult<SlugRecord>;

    async fn update(&self, update: SlugRecordUpdate) -> DomainResult<SlugRecord>;

    async fn delete(&self, scope: &NamespaceScope, id: EntityId) -> DomainResult<()>;

    /// Records without a slug, ordered by id, strictly after `after`.
    ///
    /// Each stored row is loaded on its own: a row that no longer forms a
    /// valid record comes back as an `Err` next to its id instead of failing
    /// the whole page.
    async fn list_missing_slugs(
        &self,
        after: Option<EntityId>,
        limit: u32,
    ) -> DomainResult<Vec<(EntityId, DomainResult<SlugRecord>)>>;
}
