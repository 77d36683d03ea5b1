// src/domain/slug/entity.rs
use crate::domain::slug::value_objects::{EntityId, Label, NamespaceScope, Slug};
use chrono::{DateTime, Utc};

/// Slug-bearing view of a catalog entity (blog post, category, subcategory or package).
#[derive(Debug, Clone)]
pub struct SlugRecord {
    pub id: EntityId,
    pub scope: NamespaceScope,
    pub label: Label,
    pub slug: Option<Slug>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SlugRecord {
    pub fn relabel(&mut self, label: Label, now: DateTime<Utc>) {
        self.label = label;
        self.updated_at = now;
    }

    pub fn set_slug(&mut self, slug: Slug, now: DateTime<Utc>) {
        self.slug = Some(slug);
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewSlugRecord {
    pub scope: NamespaceScope,
    pub label: Label,
    pub slug: Option<Slug>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SlugRecordUpdate {
    pub scope: NamespaceScope,
    pub id: EntityId,
    pub label: Option<Label>,
    pub slug: Option<Slug>,
    pub updated_at: DateTime<Utc>,
}

impl SlugRecordUpdate {
    pub fn new(scope: NamespaceScope, id: EntityId, updated_at: DateTime<Utc>) -> Self {
        Self {
            scope,
            id,
            label: None,
            slug: None,
            updated_at,
        }
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }
}
