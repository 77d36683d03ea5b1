use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::slug::repository::SlugRecordRepository;
use crate::domain::slug::value_objects::{EntityId, NamespaceScope, Slug};

/// Existence check the assigner probes candidates against.
///
/// `exclude` is the id of the entity being (re)assigned; a slug held by that
/// entity must not count as taken.
#[async_trait]
pub trait SlugNamespace: Send + Sync {
    async fn exists(&self, candidate: &Slug, exclude: Option<EntityId>) -> DomainResult<bool>;
}

/// A repository narrowed to one scope.
pub struct ScopedNamespace {
    repo: Arc<dyn SlugRecordRepository>,
    scope: NamespaceScope,
}

impl ScopedNamespace {
    pub fn new(repo: Arc<dyn SlugRecordRepository>, scope: NamespaceScope) -> Self {
        Self { repo, scope }
    }

    pub fn scope(&self) -> &NamespaceScope {
        &self.scope
    }
}

#[async_trait]
impl SlugNamespace for ScopedNamespace {
    async fn exists(&self, candidate: &Slug, exclude: Option<EntityId>) -> DomainResult<bool> {
        self.repo.exists(&self.scope, candidate, exclude).await
    }
}

/// Fixed snapshot of taken slugs. Ownership is unknown, so `exclude` is ignored.
#[async_trait]
impl SlugNamespace for HashSet<String> {
    async fn exists(&self, candidate: &Slug, _exclude: Option<EntityId>) -> DomainResult<bool> {
        Ok(self.contains(candidate.as_str()))
    }
}
