// tests/support/mocks/util.rs

/// Generator that skips normalization entirely, used to check that the
/// assigner refuses to hand out malformed slugs.
#[derive(Clone)]
pub struct PassthroughSlug;

impl catalog_slugs::application::ports::util::SlugGenerator for PassthroughSlug {
    fn slugify(&self, s: &str) -> String {
        s.to_string()
    }
}
