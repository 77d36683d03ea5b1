use super::SlugQueryService;
use crate::{
    application::{
        dto::SlugRecordDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::{EntityKind, NamespaceScope, Slug},
};

/// Lookup behind detail pages such as `/packages/{slug}` or
/// `/category/{slug}/{subslug}`.
pub struct ResolveSlugQuery {
    pub kind: EntityKind,
    pub parent_id: Option<i64>,
    pub slug: String,
}

impl SlugQueryService {
    pub async fn resolve(&self, query: ResolveSlugQuery) -> ApplicationResult<SlugRecordDto> {
        let scope = NamespaceScope::from_raw(query.kind, query.parent_id)?;
        let slug = Slug::new(query.slug)?;
        let record = self
            .repo
            .find_by_slug(&scope, &slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("{scope} '{slug}' not found")))?;

        Ok(record.into())
    }
}
