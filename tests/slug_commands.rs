use std::sync::Arc;

use catalog_slugs::application::commands::slugs::{
    CreateSlugRecordCommand, DeleteSlugRecordCommand, RelabelCommand, SetSlugCommand,
};
use catalog_slugs::application::error::ApplicationError;
use catalog_slugs::application::queries::slugs::ResolveSlugQuery;
use catalog_slugs::application::services::ConcurrencyStrategy;
use catalog_slugs::domain::errors::DomainError;
use catalog_slugs::domain::slug::{EntityId, EntityKind, NamespaceScope};
use catalog_slugs::infrastructure::repositories::InMemorySlugRecordRepository;

mod support;

use support::{build_services, fixed_now, global, seed};

const RETRY: ConcurrencyStrategy = ConcurrencyStrategy::ConstraintRetry { max_attempts: 3 };

fn create(kind: EntityKind, label: &str) -> CreateSlugRecordCommand {
    CreateSlugRecordCommand::builder()
        .kind(kind)
        .label(label)
        .build()
        .unwrap()
}

#[tokio::test]
async fn create_assigns_and_suffixes() {
    let repo = Arc::new(InMemorySlugRecordRepository::new());
    let services = build_services(repo, RETRY);

    let first = services
        .slug_commands
        .create(create(EntityKind::Package, "Paris Tour"))
        .await
        .unwrap();
    let second = services
        .slug_commands
        .create(create(EntityKind::Package, "Paris  Tour!"))
        .await
        .unwrap();

    assert_eq!(first.slug.as_deref(), Some("paris-tour"));
    assert_eq!(second.slug.as_deref(), Some("paris-tour-1"));
    assert_eq!(first.kind, "package");
    assert_eq!(first.created_at, fixed_now());
}

#[tokio::test]
async fn create_rejects_unusable_label() {
    let repo = Arc::new(InMemorySlugRecordRepository::new());
    let services = build_services(repo, RETRY);

    let err = services
        .slug_commands
        .create(create(EntityKind::Blog, "!!!"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::InvalidLabel(_))));
    assert!(err.is_validation());
}

#[test]
fn builder_requires_kind_and_label() {
    assert!(CreateSlugRecordCommand::builder().label("Goa").build().is_err());
    assert!(CreateSlugRecordCommand::builder().kind(EntityKind::Blog).build().is_err());
}

#[tokio::test]
async fn hand_set_slug_must_be_free() {
    let repo = Arc::new(InMemorySlugRecordRepository::new());
    seed(repo.as_ref(), global(EntityKind::Blog), "Goa", Some("goa")).await;
    let services = build_services(repo, RETRY);

    let command = CreateSlugRecordCommand::builder()
        .kind(EntityKind::Blog)
        .label("Beaches of Goa")
        .slug("goa")
        .build()
        .unwrap();
    let err = services.slug_commands.create(command).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));

    let command = CreateSlugRecordCommand::builder()
        .kind(EntityKind::Blog)
        .label("Beaches of Goa")
        .slug("Not A Slug")
        .build()
        .unwrap();
    let err = services.slug_commands.create(command).await.unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn subcategory_requires_parent() {
    let repo = Arc::new(InMemorySlugRecordRepository::new());
    let services = build_services(repo, RETRY);

    let err = services
        .slug_commands
        .create(create(EntityKind::Subcategory, "Trekking"))
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let command = CreateSlugRecordCommand::builder()
        .kind(EntityKind::Subcategory)
        .parent_id(4)
        .label("Trekking")
        .build()
        .unwrap();
    let created = services.slug_commands.create(command).await.unwrap();
    assert_eq!(created.parent_id, Some(4));
    assert_eq!(created.slug.as_deref(), Some("trekking"));
}

#[tokio::test]
async fn relabel_recomputes_only_on_label_change() {
    let repo = Arc::new(InMemorySlugRecordRepository::new());
    let services = build_services(repo, RETRY);
    let created = services
        .slug_commands
        .create(create(EntityKind::Category, "Himalayan Treks"))
        .await
        .unwrap();

    let same = services
        .slug_commands
        .relabel(RelabelCommand {
            kind: EntityKind::Category,
            parent_id: None,
            id: created.id,
            label: "Himalayan Treks ".into(),
        })
        .await
        .unwrap();
    assert_eq!(same.slug.as_deref(), Some("himalayan-treks"));

    let renamed = services
        .slug_commands
        .relabel(RelabelCommand {
            kind: EntityKind::Category,
            parent_id: None,
            id: created.id,
            label: "Nepal Treks".into(),
        })
        .await
        .unwrap();
    assert_eq!(renamed.label, "Nepal Treks");
    assert_eq!(renamed.slug.as_deref(), Some("nepal-treks"));
}

#[tokio::test]
async fn relabel_back_to_own_slug_does_not_suffix() {
    let repo = Arc::new(InMemorySlugRecordRepository::new());
    let services = build_services(repo, RETRY);
    let created = services
        .slug_commands
        .create(create(EntityKind::Package, "Paris Tour"))
        .await
        .unwrap();

    let renamed = services
        .slug_commands
        .relabel(RelabelCommand {
            kind: EntityKind::Package,
            parent_id: None,
            id: created.id,
            label: "PARIS TOUR".into(),
        })
        .await
        .unwrap();
    assert_eq!(renamed.slug.as_deref(), Some("paris-tour"));
}

#[tokio::test]
async fn hand_set_slug_survives_unchanged_label() {
    let repo = Arc::new(InMemorySlugRecordRepository::new());
    let services = build_services(repo, RETRY);
    let created = services
        .slug_commands
        .create(create(EntityKind::Blog, "Monsoon in Kerala"))
        .await
        .unwrap();

    services
        .slug_commands
        .set_slug(SetSlugCommand {
            kind: EntityKind::Blog,
            parent_id: None,
            id: created.id,
            slug: "kerala-monsoon".into(),
        })
        .await
        .unwrap();

    let saved = services
        .slug_commands
        .relabel(RelabelCommand {
            kind: EntityKind::Blog,
            parent_id: None,
            id: created.id,
            label: "Monsoon in Kerala".into(),
        })
        .await
        .unwrap();
    assert_eq!(saved.slug.as_deref(), Some("kerala-monsoon"));
}

#[tokio::test]
async fn set_slug_conflicts_with_siblings_only() {
    let repo = Arc::new(InMemorySlugRecordRepository::new());
    let services = build_services(repo, RETRY);
    let goa = services
        .slug_commands
        .create(create(EntityKind::Package, "Goa"))
        .await
        .unwrap();
    let kerala = services
        .slug_commands
        .create(create(EntityKind::Package, "Kerala"))
        .await
        .unwrap();

    let err = services
        .slug_commands
        .set_slug(SetSlugCommand {
            kind: EntityKind::Package,
            parent_id: None,
            id: kerala.id,
            slug: "goa".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));

    let same = services
        .slug_commands
        .set_slug(SetSlugCommand {
            kind: EntityKind::Package,
            parent_id: None,
            id: goa.id,
            slug: "goa".into(),
        })
        .await
        .unwrap();
    assert_eq!(same.slug.as_deref(), Some("goa"));
}

#[tokio::test]
async fn missing_records_are_not_found() {
    let repo = Arc::new(InMemorySlugRecordRepository::new());
    let services = build_services(repo, RETRY);

    let err = services
        .slug_commands
        .relabel(RelabelCommand {
            kind: EntityKind::Blog,
            parent_id: None,
            id: 99,
            label: "Anything".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let err = services
        .slug_commands
        .delete(DeleteSlugRecordCommand {
            kind: EntityKind::Blog,
            parent_id: None,
            id: 99,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn delete_frees_the_slug() {
    let repo = Arc::new(InMemorySlugRecordRepository::new());
    let services = build_services(repo, RETRY);
    let created = services
        .slug_commands
        .create(create(EntityKind::Package, "Paris Tour"))
        .await
        .unwrap();

    services
        .slug_commands
        .delete(DeleteSlugRecordCommand {
            kind: EntityKind::Package,
            parent_id: None,
            id: created.id,
        })
        .await
        .unwrap();

    let again = services
        .slug_commands
        .create(create(EntityKind::Package, "Paris Tour"))
        .await
        .unwrap();
    assert_eq!(again.slug.as_deref(), Some("paris-tour"));
}

#[tokio::test]
async fn resolve_finds_records_by_scope() {
    let repo = Arc::new(InMemorySlugRecordRepository::new());
    let parent = EntityId::new(3).unwrap();
    seed(
        repo.as_ref(),
        NamespaceScope::within(EntityKind::Subcategory, parent),
        "Rafting",
        Some("rafting"),
    )
    .await;
    let services = build_services(repo, RETRY);

    let found = services
        .slug_queries
        .resolve(ResolveSlugQuery {
            kind: EntityKind::Subcategory,
            parent_id: Some(3),
            slug: "rafting".into(),
        })
        .await
        .unwrap();
    assert_eq!(found.label, "Rafting");

    let err = services
        .slug_queries
        .resolve(ResolveSlugQuery {
            kind: EntityKind::Subcategory,
            parent_id: Some(4),
            slug: "rafting".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let err = services
        .slug_queries
        .resolve(ResolveSlugQuery {
            kind: EntityKind::Subcategory,
            parent_id: Some(3),
            slug: "Rafting!".into(),
        })
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn backfill_assigns_missing_slugs() {
    let repo = Arc::new(InMemorySlugRecordRepository::new());
    let packages = global(EntityKind::Package);
    seed(repo.as_ref(), packages, "Paris Tour", Some("paris-tour")).await;
    seed(repo.as_ref(), packages, "Paris Tour", None).await;
    seed(repo.as_ref(), packages, "Paris Tour", None).await;
    seed(repo.as_ref(), global(EntityKind::Blog), "Paris Tour", None).await;
    seed(repo.as_ref(), packages, "???", None).await;
    let services = build_services(repo.clone(), RETRY);

    let report = services.slug_commands.backfill(2).await.unwrap();
    assert_eq!(report.scanned, 4);
    assert_eq!(report.assigned, 3);
    assert_eq!(report.failed, 1);

    let query = |kind, slug: &str| ResolveSlugQuery {
        kind,
        parent_id: None,
        slug: slug.to_string(),
    };
    for slug in ["paris-tour-1", "paris-tour-2"] {
        assert!(services.slug_queries.resolve(query(EntityKind::Package, slug)).await.is_ok());
    }
    assert!(services.slug_queries.resolve(query(EntityKind::Blog, "paris-tour")).await.is_ok());

    let rerun = services.slug_commands.backfill(2).await.unwrap();
    assert_eq!(rerun.assigned, 0);
    assert_eq!(rerun.failed, 1);
}
