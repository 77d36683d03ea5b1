// src/application/commands/slugs/delete.rs
use super::SlugCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::slug::{EntityId, EntityKind, NamespaceScope},
};

pub struct DeleteSlugRecordCommand {
    pub kind: EntityKind,
    pub parent_id: Option<i64>,
    pub id: i64,
}

impl SlugCommandService {
    pub async fn delete(&self, command: DeleteSlugRecordCommand) -> ApplicationResult<()> {
        let scope = NamespaceScope::from_raw(command.kind, command.parent_id)?;
        let id = EntityId::new(command.id)?;
        let record = self.load(&scope, id).await?;

        self.repo.delete(&scope, id).await?;
        tracing::info!(scope = %scope, id = %id, slug = ?record.slug, "slug retired");
        Ok(())
    }
}
