//! Deterministic unique-slug assignment for tour catalog content.
//!
//! The core is [`domain::slug::UniqueSlugAssigner`]: it normalizes a label into
//! a base slug and probes `base`, `base-1`, `base-2`, ... against a caller
//! supplied [`domain::slug::SlugNamespace`] until a free candidate is found.
//! The application layer adds create/relabel/backfill flows and a
//! [`application::services::SlugAllocator`] that pairs assignment with the
//! write under a configurable concurrency strategy.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
