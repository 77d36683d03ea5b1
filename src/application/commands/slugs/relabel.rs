use super::SlugCommandService;
use crate::{
    application::{dto::SlugRecordDto, error::ApplicationResult},
    domain::slug::{
        EntityId, EntityKind, Label, NamespaceScope, RecomputePolicy, SlugAction,
        SlugRecordUpdate,
    },
};

pub struct RelabelCommand {
    pub kind: EntityKind,
    pub parent_id: Option<i64>,
    pub id: i64,
    pub label: String,
}

impl SlugCommandService {
    /// Store a new label, recomputing the slug only when the label text changed
    /// or the record has no slug yet.
    pub async fn relabel(&self, command: RelabelCommand) -> ApplicationResult<SlugRecordDto> {
        let scope = NamespaceScope::from_raw(command.kind, command.parent_id)?;
        let id = EntityId::new(command.id)?;
        let label = Label::new(command.label)?;
        let record = self.load(&scope, id).await?;
        let now = self.clock.now();

        let updated = match RecomputePolicy::decide(record.slug.as_ref(), &record.label, &label) {
            SlugAction::Keep => {
                let update = SlugRecordUpdate::new(scope, id, now).with_label(label);
                self.repo.update(update).await?
            }
            SlugAction::Assign => {
                let namespace = self.namespace(scope);
                let repo = self.repo.as_ref();
                let update_label = label.clone();
                let updated = self
                    .allocator
                    .allocate(&scope, &label, &namespace, Some(id), move |slug| {
                        let update = SlugRecordUpdate::new(scope, id, now)
                            .with_label(update_label.clone())
                            .with_slug(slug);
                        repo.update(update)
                    })
                    .await?;
                tracing::info!(scope = %scope, id = %id, slug = ?updated.slug, "slug recomputed");
                updated
            }
        };

        Ok(updated.into())
    }
}
