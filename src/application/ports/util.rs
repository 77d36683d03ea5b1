// src/application/ports/util.rs
/// Turns free text into a slug base. Must be a pure function of its input.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
