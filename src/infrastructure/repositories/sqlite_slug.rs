use super::{map_exists_check, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{
    EntityId, EntityKind, Label, NamespaceScope, NewSlugRecord, Slug, SlugRecord,
    SlugRecordRepository, SlugRecordUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const RECORD_COLUMNS: &str = "id, kind, parent_id, label, slug, created_at, updated_at";

/// Global scopes are stored with `parent_id = 0` so the unique index
/// `(kind, parent_id, slug)` also covers them (SQLite treats NULLs as distinct).
const NO_PARENT: i64 = 0;

#[derive(Clone)]
pub struct SqliteSlugRecordRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteSlugRecordRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

fn parent_column(scope: &NamespaceScope) -> i64 {
    scope.parent().map(i64::from).unwrap_or(NO_PARENT)
}

#[derive(Debug, FromRow)]
struct SlugRecordRow {
    id: i64,
    kind: String,
    parent_id: i64,
    label: String,
    slug: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SlugRecordRow> for SlugRecord {
    type Error = DomainError;

    fn try_from(row: SlugRecordRow) -> Result<Self, Self::Error> {
        let kind: EntityKind = row.kind.parse()?;
        let parent = match row.parent_id {
            NO_PARENT => None,
            id => Some(EntityId::new(id)?),
        };

        Ok(SlugRecord {
            id: EntityId::new(row.id)?,
            scope: NamespaceScope::for_kind(kind, parent)?,
            label: Label::new(row.label)?,
            slug: row.slug.map(Slug::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl SlugRecordRepository for SqliteSlugRecordRepository {
    async fn exists(
        &self,
        scope: &NamespaceScope,
        slug: &Slug,
        exclude: Option<EntityId>,
    ) -> DomainResult<bool> {
        let found: i64 = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM slug_records WHERE kind = ? AND parent_id = ? AND slug = ? AND id <> ?)",
        )
        .bind(scope.kind().as_str())
        .bind(parent_column(scope))
        .bind(slug.as_str())
        .bind(exclude.map(i64::from).unwrap_or(0))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_exists_check)?;

        Ok(found != 0)
    }

    async fn find_by_id(
        &self,
        scope: &NamespaceScope,
        id: EntityId,
    ) -> DomainResult<Option<SlugRecord>> {
        let row = sqlx::query_as::<_, SlugRecordRow>(&format!(
            "SELECT {RECORD_COLUMNS} FROM slug_records WHERE id = ? AND kind = ? AND parent_id = ?"
        ))
        .bind(i64::from(id))
        .bind(scope.kind().as_str())
        .bind(parent_column(scope))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(SlugRecord::try_from).transpose()
    }

    async fn find_by_slug(
        &self,
        scope: &NamespaceScope,
        slug: &Slug,
    ) -> DomainResult<Option<SlugRecord>> {
        let row = sqlx::query_as::<_, SlugRecordRow>(&format!(
            "SELECT {RECORD_COLUMNS} FROM slug_records WHERE kind = ? AND parent_id = ? AND slug = ?"
        ))
        .bind(scope.kind().as_str())
        .bind(parent_column(scope))
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(SlugRecord::try_from).transpose()
    }

    async fn insert(&self, record: NewSlugRecord) -> DomainResult<SlugRecord> {
        let NewSlugRecord {
            scope,
            label,
            slug,
            created_at,
        } = record;

        let row = sqlx::query_as::<_, SlugRecordRow>(&format!(
            "INSERT INTO slug_records (kind, parent_id, label, slug, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING {RECORD_COLUMNS}"
        ))
        .bind(scope.kind().as_str())
        .bind(parent_column(&scope))
        .bind(label.as_str())
        .bind(slug.as_ref().map(Slug::as_str))
        .bind(created_at)
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        SlugRecord::try_from(row)
    }

    async fn update(&self, update: SlugRecordUpdate) -> DomainResult<SlugRecord> {
        let SlugRecordUpdate {
            scope,
            id,
            label,
            slug,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, SlugRecordRow>(&format!(
            "UPDATE slug_records SET label = COALESCE(?, label), slug = COALESCE(?, slug), updated_at = ? WHERE id = ? AND kind = ? AND parent_id = ? RETURNING {RECORD_COLUMNS}"
        ))
        .bind(label.as_ref().map(Label::as_str))
        .bind(slug.as_ref().map(Slug::as_str))
        .bind(updated_at)
        .bind(i64::from(id))
        .bind(scope.kind().as_str())
        .bind(parent_column(&scope))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound(format!("record {id} not found")))?;

        SlugRecord::try_from(row)
    }

    async fn delete(&self, scope: &NamespaceScope, id: EntityId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM slug_records WHERE id = ? AND kind = ? AND parent_id = ?")
            .bind(i64::from(id))
            .bind(scope.kind().as_str())
            .bind(parent_column(scope))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("record {id} not found")));
        }
        Ok(())
    }

    async fn list_missing_slugs(
        &self,
        after: Option<EntityId>,
        limit: u32,
    ) -> DomainResult<Vec<(EntityId, DomainResult<SlugRecord>)>> {
        let rows = sqlx::query_as::<_, SlugRecordRow>(&format!(
            "SELECT {RECORD_COLUMNS} FROM slug_records WHERE slug IS NULL AND id > ? ORDER BY id LIMIT ?"
        ))
        .bind(after.map(i64::from).unwrap_or(0))
        .bind(i64::from(limit))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| -> DomainResult<_> {
                let id = EntityId::new(row.id)?;
                Ok((id, SlugRecord::try_from(row)))
            })
            .collect()
    }
}
