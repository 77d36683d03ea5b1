// src/application/services/allocator.rs
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{
    EntityId, Label, NamespaceScope, Slug, SlugNamespace, UniqueSlugAssigner,
};

/// How assignment and the following write are kept from racing each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcurrencyStrategy {
    /// Serialize assign + persist per namespace inside this process.
    NamespaceLock,
    /// Trust the storage unique constraint and reassign when the write loses a race.
    ConstraintRetry { max_attempts: u32 },
}

impl Default for ConcurrencyStrategy {
    fn default() -> Self {
        ConcurrencyStrategy::ConstraintRetry { max_attempts: 5 }
    }
}

/// Runs the assigner and the caller's write as one step under a [`ConcurrencyStrategy`].
pub struct SlugAllocator {
    assigner: Arc<UniqueSlugAssigner>,
    strategy: ConcurrencyStrategy,
    locks: Mutex<HashMap<NamespaceScope, Arc<Mutex<()>>>>,
}

impl SlugAllocator {
    pub fn new(assigner: Arc<UniqueSlugAssigner>, strategy: ConcurrencyStrategy) -> Self {
        Self {
            assigner,
            strategy,
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn strategy(&self) -> ConcurrencyStrategy {
        self.strategy
    }

    pub fn assigner(&self) -> &UniqueSlugAssigner {
        &self.assigner
    }

    pub async fn allocate<T, F, Fut>(
        &self,
        scope: &NamespaceScope,
        label: &Label,
        namespace: &dyn SlugNamespace,
        exclude: Option<EntityId>,
        mut persist: F,
    ) -> DomainResult<T>
    where
        F: FnMut(Slug) -> Fut + Send,
        Fut: Future<Output = DomainResult<T>> + Send,
        T: Send,
    {
        match self.strategy {
            ConcurrencyStrategy::NamespaceLock => {
                let lock = self.scope_lock(scope).await;
                let result = {
                    let _guard = lock.lock().await;
                    match self.assigner.assign(label, namespace, exclude).await {
                        Ok(slug) => persist(slug).await,
                        Err(err) => Err(err),
                    }
                };
                self.release_scope_lock(scope, lock).await;
                result
            }
            ConcurrencyStrategy::ConstraintRetry { max_attempts } => {
                let max_attempts = max_attempts.max(1);
                let mut attempt = 1;
                loop {
                    let slug = self.assigner.assign(label, namespace, exclude).await?;
                    match persist(slug).await {
                        Err(DomainError::DuplicateSlugOnPersist(detail)) if attempt < max_attempts => {
                            tracing::debug!(
                                scope = %scope,
                                attempt,
                                detail = %detail,
                                "slug taken by a concurrent write, reassigning"
                            );
                            attempt += 1;
                        }
                        other => return other,
                    }
                }
            }
        }
    }

    async fn scope_lock(&self, scope: &NamespaceScope) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        Arc::clone(locks.entry(*scope).or_default())
    }

    /// Forget the scope's mutex once no other caller holds or waits on it, so
    /// the map only tracks scopes with work in flight.
    async fn release_scope_lock(&self, scope: &NamespaceScope, lock: Arc<Mutex<()>>) {
        let mut locks = self.locks.lock().await;
        // Clones are only handed out under `locks`, so the count is stable here.
        if Arc::strong_count(&lock) == 2 {
            locks.remove(scope);
        }
    }
}
