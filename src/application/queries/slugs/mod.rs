mod resolve;
mod service;

pub use resolve::ResolveSlugQuery;
pub use service::SlugQueryService;
