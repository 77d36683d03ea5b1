// tests/support/mocks/mod.rs
pub mod repos;
pub mod time;
pub mod util;

pub use repos::RacingSlugRepository;
pub use time::{FixedClock, fixed_now};
pub use util::PassthroughSlug;
