// src/application/services/mod.rs
mod allocator;

use std::sync::Arc;

pub use allocator::{ConcurrencyStrategy, SlugAllocator};

use crate::{
    application::{
        commands::slugs::SlugCommandService,
        ports::{time::Clock, util::SlugGenerator},
        queries::slugs::SlugQueryService,
    },
    domain::slug::{SlugRecordRepository, UniqueSlugAssigner, services::DEFAULT_MAX_PROBES},
};

/// Tunables for slug assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugSettings {
    pub max_probes: u32,
    pub strategy: ConcurrencyStrategy,
}

impl Default for SlugSettings {
    fn default() -> Self {
        Self {
            max_probes: DEFAULT_MAX_PROBES,
            strategy: ConcurrencyStrategy::default(),
        }
    }
}

pub struct ApplicationServices {
    pub slug_commands: Arc<SlugCommandService>,
    pub slug_queries: Arc<SlugQueryService>,
    assigner: Arc<UniqueSlugAssigner>,
}

impl ApplicationServices {
    pub fn new(
        slug_repo: Arc<dyn SlugRecordRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        settings: SlugSettings,
    ) -> Self {
        let assigner = Arc::new(UniqueSlugAssigner::new(
            Arc::clone(&slugger),
            settings.max_probes,
        ));

        let allocator = Arc::new(SlugAllocator::new(
            Arc::clone(&assigner),
            settings.strategy,
        ));

        let slug_commands = Arc::new(SlugCommandService::new(
            Arc::clone(&slug_repo),
            Arc::clone(&allocator),
            Arc::clone(&clock),
        ));

        let slug_queries = Arc::new(SlugQueryService::new(Arc::clone(&slug_repo)));

        Self {
            slug_commands,
            slug_queries,
            assigner,
        }
    }

    /// The bare assigner, for callers that bring their own existence check.
    pub fn assigner(&self) -> Arc<UniqueSlugAssigner> {
        Arc::clone(&self.assigner)
    }
}
