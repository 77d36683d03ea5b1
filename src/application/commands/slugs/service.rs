// src/application/commands/slugs/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        services::SlugAllocator,
    },
    domain::slug::{EntityId, NamespaceScope, ScopedNamespace, Slug, SlugRecord, SlugRecordRepository},
};

pub struct SlugCommandService {
    pub(super) repo: Arc<dyn SlugRecordRepository>,
    pub(super) allocator: Arc<SlugAllocator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl SlugCommandService {
    pub fn new(
        repo: Arc<dyn SlugRecordRepository>,
        allocator: Arc<SlugAllocator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            allocator,
            clock,
        }
    }

    pub(super) fn namespace(&self, scope: NamespaceScope) -> ScopedNamespace {
        ScopedNamespace::new(Arc::clone(&self.repo), scope)
    }

    pub(super) async fn load(
        &self,
        scope: &NamespaceScope,
        id: EntityId,
    ) -> ApplicationResult<SlugRecord> {
        self.repo
            .find_by_id(scope, id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("{scope} record {id} not found")))
    }

    /// Hand-set slugs are taken as-is, so they must already be free.
    pub(super) async fn ensure_free(
        &self,
        scope: &NamespaceScope,
        slug: &Slug,
        exclude: Option<EntityId>,
    ) -> ApplicationResult<()> {
        if self.repo.exists(scope, slug, exclude).await? {
            return Err(ApplicationError::conflict(format!(
                "slug '{slug}' is already taken in {scope}"
            )));
        }
        Ok(())
    }
}
