use super::SlugCommandService;
use crate::{
    application::{dto::SlugRecordDto, error::ApplicationResult},
    domain::slug::{EntityId, EntityKind, NamespaceScope, Slug, SlugRecordUpdate},
};

/// Editor override of a record's slug.
pub struct SetSlugCommand {
    pub kind: EntityKind,
    pub parent_id: Option<i64>,
    pub id: i64,
    pub slug: String,
}

impl SlugCommandService {
    pub async fn set_slug(&self, command: SetSlugCommand) -> ApplicationResult<SlugRecordDto> {
        let scope = NamespaceScope::from_raw(command.kind, command.parent_id)?;
        let id = EntityId::new(command.id)?;
        let slug = Slug::new(command.slug)?;
        self.load(&scope, id).await?;
        self.ensure_free(&scope, &slug, Some(id)).await?;

        let update = SlugRecordUpdate::new(scope, id, self.clock.now()).with_slug(slug);
        let updated = self.repo.update(update).await?;
        Ok(updated.into())
    }
}
