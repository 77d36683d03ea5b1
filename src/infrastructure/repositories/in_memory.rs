use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{
    EntityId, NamespaceScope, NewSlugRecord, Slug, SlugRecord, SlugRecordRepository,
    SlugRecordUpdate,
};

#[derive(Default)]
struct Store {
    last_id: i64,
    records: BTreeMap<EntityId, SlugRecord>,
}

impl Store {
    fn slug_taken(&self, scope: &NamespaceScope, slug: &Slug, exclude: Option<EntityId>) -> bool {
        self.records.values().any(|record| {
            record.scope == *scope
                && record.slug.as_ref() == Some(slug)
                && Some(record.id) != exclude
        })
    }
}

/// Process-local repository with the same per-scope unique constraint as the SQL schema.
#[derive(Default)]
pub struct InMemorySlugRecordRepository {
    store: Mutex<Store>,
}

impl InMemorySlugRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn store(&self) -> DomainResult<MutexGuard<'_, Store>> {
        self.store
            .lock()
            .map_err(|_| DomainError::Persistence("in-memory store poisoned".into()))
    }
}

#[async_trait]
impl SlugRecordRepository for InMemorySlugRecordRepository {
    async fn exists(
        &self,
        scope: &NamespaceScope,
        slug: &Slug,
        exclude: Option<EntityId>,
    ) -> DomainResult<bool> {
        Ok(self.store()?.slug_taken(scope, slug, exclude))
    }

    async fn find_by_id(
        &self,
        scope: &NamespaceScope,
        id: EntityId,
    ) -> DomainResult<Option<SlugRecord>> {
        let store = self.store()?;
        Ok(store
            .records
            .get(&id)
            .filter(|record| record.scope == *scope)
            .cloned())
    }

    async fn find_by_slug(
        &self,
        scope: &NamespaceScope,
        slug: &Slug,
    ) -> DomainResult<Option<SlugRecord>> {
        let store = self.store()?;
        Ok(store
            .records
            .values()
            .find(|record| record.scope == *scope && record.slug.as_ref() == Some(slug))
            .cloned())
    }

    async fn insert(&self, record: NewSlugRecord) -> DomainResult<SlugRecord> {
        let mut store = self.store()?;
        if let Some(slug) = &record.slug {
            if store.slug_taken(&record.scope, slug, None) {
                return Err(DomainError::DuplicateSlugOnPersist(format!(
                    "'{slug}' already exists in {}",
                    record.scope
                )));
            }
        }

        store.last_id += 1;
        let id = EntityId::new(store.last_id)?;
        let created = SlugRecord {
            id,
            scope: record.scope,
            label: record.label,
            slug: record.slug,
            created_at: record.created_at,
            updated_at: record.created_at,
        };
        store.records.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: SlugRecordUpdate) -> DomainResult<SlugRecord> {
        let mut store = self.store()?;
        if let Some(slug) = &update.slug {
            if store.slug_taken(&update.scope, slug, Some(update.id)) {
                return Err(DomainError::DuplicateSlugOnPersist(format!(
                    "'{slug}' already exists in {}",
                    update.scope
                )));
            }
        }

        let record = store
            .records
            .get_mut(&update.id)
            .filter(|record| record.scope == update.scope)
            .ok_or_else(|| DomainError::NotFound(format!("record {} not found", update.id)))?;

        if let Some(label) = update.label {
            record.relabel(label, update.updated_at);
        }
        if let Some(slug) = update.slug {
            record.set_slug(slug, update.updated_at);
        }
        record.updated_at = update.updated_at;
        Ok(record.clone())
    }

    async fn delete(&self, scope: &NamespaceScope, id: EntityId) -> DomainResult<()> {
        let mut store = self.store()?;
        let owned = store
            .records
            .get(&id)
            .is_some_and(|record| record.scope == *scope);
        if !owned {
            return Err(DomainError::NotFound(format!("record {id} not found")));
        }
        store.records.remove(&id);
        Ok(())
    }

    async fn list_missing_slugs(
        &self,
        after: Option<EntityId>,
        limit: u32,
    ) -> DomainResult<Vec<(EntityId, DomainResult<SlugRecord>)>> {
        let store = self.store()?;
        Ok(store
            .records
            .values()
            .filter(|record| after.is_none_or(|after| record.id > after))
            .filter(|record| record.slug.is_none())
            .take(limit as usize)
            .map(|record| (record.id, Ok(record.clone())))
            .collect())
    }
}
