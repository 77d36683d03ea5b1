pub mod entity;
pub mod namespace;
pub mod policy;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewSlugRecord, SlugRecord, SlugRecordUpdate};
pub use namespace::{ScopedNamespace, SlugNamespace};
pub use policy::{RecomputePolicy, SlugAction};
pub use repository::SlugRecordRepository;
pub use services::UniqueSlugAssigner;
pub use value_objects::{EntityId, EntityKind, Label, NamespaceScope, Slug};
