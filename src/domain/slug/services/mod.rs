// src/domain/slug/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::namespace::SlugNamespace;
use crate::domain::slug::value_objects::{EntityId, Label, Slug};

pub const DEFAULT_MAX_PROBES: u32 = 10_000;

/// Domain service producing slugs that are unique inside a namespace.
///
/// Candidates are probed in the order `base`, `base-1`, `base-2`, ... and the
/// first one the namespace reports as free wins. At most `max_probes`
/// suffixed candidates are tried before giving up.
pub struct UniqueSlugAssigner {
    generator: Arc<dyn SlugGenerator>,
    max_probes: u32,
}

impl UniqueSlugAssigner {
    pub fn new(generator: Arc<dyn SlugGenerator>, max_probes: u32) -> Self {
        Self {
            generator,
            max_probes,
        }
    }

    pub fn max_probes(&self) -> u32 {
        self.max_probes
    }

    /// Normalize a label into the base candidate.
    pub fn base_slug(&self, label: &Label) -> DomainResult<Slug> {
        let base = self.generator.slugify(label.as_str());
        if base.is_empty() {
            return Err(DomainError::InvalidLabel(format!(
                "'{}' has no characters usable in a slug",
                label.as_str()
            )));
        }
        Slug::new(base)
    }

    pub async fn assign(
        &self,
        label: &Label,
        namespace: &dyn SlugNamespace,
        exclude: Option<EntityId>,
    ) -> DomainResult<Slug> {
        let base = self.base_slug(label)?;

        if !namespace.exists(&base, exclude).await? {
            return Ok(base);
        }

        for counter in 1..=self.max_probes {
            let candidate = base.with_suffix(counter);
            tracing::trace!(candidate = %candidate, "probing slug candidate");
            if !namespace.exists(&candidate, exclude).await? {
                return Ok(candidate);
            }
        }

        tracing::warn!(base = %base, attempts = self.max_probes, "slug space exhausted");
        Err(DomainError::SlugSpaceExhausted {
            base: base.into(),
            attempts: self.max_probes,
        })
    }
}
