pub mod slugs;

pub use slugs::{BackfillReport, SlugRecordDto};
