use crate::application::ports::util::SlugGenerator;

/// Slug normalization backed by the `slug` crate: lowercases, transliterates
/// non-ASCII text, collapses separators into single hyphens and trims them.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        ::slug::slugify(input)
    }
}
