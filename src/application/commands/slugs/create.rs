use super::SlugCommandService;
use crate::{
    application::{dto::SlugRecordDto, error::ApplicationResult},
    domain::slug::{EntityKind, Label, NamespaceScope, NewSlugRecord, Slug},
};

pub struct CreateSlugRecordCommand {
    pub kind: EntityKind,
    pub parent_id: Option<i64>,
    pub label: String,
    /// Slug set by an editor; assigned from the label when absent.
    pub slug: Option<String>,
}

impl CreateSlugRecordCommand {
    pub fn builder() -> CreateSlugRecordCommandBuilder {
        CreateSlugRecordCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateSlugRecordCommandBuilder {
    kind: Option<EntityKind>,
    parent_id: Option<i64>,
    label: Option<String>,
    slug: Option<String>,
}

impl CreateSlugRecordCommandBuilder {
    pub fn kind(mut self, kind: EntityKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn parent_id(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn build(self) -> Result<CreateSlugRecordCommand, &'static str> {
        Ok(CreateSlugRecordCommand {
            kind: self.kind.ok_or("kind is required")?,
            parent_id: self.parent_id,
            label: self.label.ok_or("label is required")?,
            slug: self.slug,
        })
    }
}

impl SlugCommandService {
    pub async fn create(&self, command: CreateSlugRecordCommand) -> ApplicationResult<SlugRecordDto> {
        let scope = NamespaceScope::from_raw(command.kind, command.parent_id)?;
        let label = Label::new(command.label)?;
        let now = self.clock.now();

        let created = match command.slug {
            Some(raw) => {
                let slug = Slug::new(raw)?;
                self.ensure_free(&scope, &slug, None).await?;
                self.repo
                    .insert(NewSlugRecord {
                        scope,
                        label,
                        slug: Some(slug),
                        created_at: now,
                    })
                    .await?
            }
            None => {
                let namespace = self.namespace(scope);
                let repo = self.repo.as_ref();
                let insert_label = label.clone();
                self.allocator
                    .allocate(&scope, &label, &namespace, None, move |slug| {
                        repo.insert(NewSlugRecord {
                            scope,
                            label: insert_label.clone(),
                            slug: Some(slug),
                            created_at: now,
                        })
                    })
                    .await?
            }
        };

        tracing::info!(
            scope = %created.scope,
            id = %created.id,
            slug = created.slug.as_ref().map(Slug::as_str).unwrap_or_default(),
            "slug record created"
        );
        Ok(created.into())
    }
}
