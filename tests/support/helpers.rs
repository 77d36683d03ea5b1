// tests/support/helpers.rs
use std::sync::Arc;

use catalog_slugs::application::services::{ApplicationServices, ConcurrencyStrategy, SlugSettings};
use catalog_slugs::domain::slug::{
    EntityKind, Label, NamespaceScope, NewSlugRecord, Slug, SlugRecord, SlugRecordRepository,
};
use catalog_slugs::infrastructure::{database, util::DefaultSlugGenerator};
use sqlx::SqlitePool;

use super::mocks::{FixedClock, fixed_now};

pub fn build_services(
    repo: Arc<dyn SlugRecordRepository>,
    strategy: ConcurrencyStrategy,
) -> ApplicationServices {
    ApplicationServices::new(
        repo,
        Arc::new(FixedClock),
        Arc::new(DefaultSlugGenerator),
        SlugSettings {
            max_probes: 100,
            strategy,
        },
    )
}

pub fn global(kind: EntityKind) -> NamespaceScope {
    NamespaceScope::global(kind).expect("global scope")
}

/// Store a record directly, bypassing assignment.
pub async fn seed(
    repo: &dyn SlugRecordRepository,
    scope: NamespaceScope,
    label: &str,
    slug: Option<&str>,
) -> SlugRecord {
    repo.insert(NewSlugRecord {
        scope,
        label: Label::new(label).expect("label"),
        slug: slug.map(|s| Slug::new(s).expect("slug")),
        created_at: fixed_now(),
    })
    .await
    .expect("seed record")
}

/// In-memory SQLite with the schema applied. One connection, since every
/// `sqlite::memory:` connection is its own database.
pub async fn sqlite_pool() -> SqlitePool {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool).await.expect("migrations");
    pool
}
