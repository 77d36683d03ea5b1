// src/infrastructure/repositories/mod.rs
mod error;
mod in_memory;
mod sqlite_slug;

pub use error::{map_exists_check, map_sqlx};
pub use in_memory::InMemorySlugRecordRepository;
pub use sqlite_slug::SqliteSlugRecordRepository;
