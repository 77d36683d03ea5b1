// src/application/commands/slugs/mod.rs
mod backfill;
mod create;
mod delete;
mod relabel;
mod service;
mod set_slug;

pub use create::{CreateSlugRecordCommand, CreateSlugRecordCommandBuilder};
pub use delete::DeleteSlugRecordCommand;
pub use relabel::RelabelCommand;
pub use service::SlugCommandService;
pub use set_slug::SetSlugCommand;
