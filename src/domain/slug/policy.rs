use crate::domain::slug::value_objects::{Label, Slug};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugAction {
    Assign,
    Keep,
}

/// Decides whether a save must (re)compute the slug.
///
/// A slug is computed when the entity has none yet or when its label text
/// changed. Anything else keeps the stored slug, including one set by hand.
pub struct RecomputePolicy;

impl RecomputePolicy {
    pub fn decide(current: Option<&Slug>, persisted: &Label, incoming: &Label) -> SlugAction {
        match current {
            None => SlugAction::Assign,
            Some(_) if !persisted.same_text(incoming) => SlugAction::Assign,
            Some(_) => SlugAction::Keep,
        }
    }
}
