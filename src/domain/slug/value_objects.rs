use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub i64);

impl EntityId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("entity id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<EntityId> for i64 {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog content kinds that carry a slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    Blog,
    Category,
    Subcategory,
    Package,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Blog => "blog",
            EntityKind::Category => "category",
            EntityKind::Subcategory => "subcategory",
            EntityKind::Package => "package",
        }
    }

    /// Subcategories live inside a category, so their slugs are only unique per parent.
    pub fn is_nested(&self) -> bool {
        matches!(self, EntityKind::Subcategory)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blog" => Ok(EntityKind::Blog),
            "category" => Ok(EntityKind::Category),
            "subcategory" => Ok(EntityKind::Subcategory),
            "package" => Ok(EntityKind::Package),
            other => Err(DomainError::Validation(format!("unknown entity kind '{other}'"))),
        }
    }
}

/// The set of siblings a slug must be unique among.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamespaceScope {
    kind: EntityKind,
    parent: Option<EntityId>,
}

impl NamespaceScope {
    pub fn global(kind: EntityKind) -> DomainResult<Self> {
        if kind.is_nested() {
            return Err(DomainError::Validation(format!(
                "{kind} slugs are scoped to a parent"
            )));
        }
        Ok(Self { kind, parent: None })
    }

    pub fn within(kind: EntityKind, parent: EntityId) -> Self {
        Self {
            kind,
            parent: Some(parent),
        }
    }

    /// Apply the catalog's scoping rule: subcategories are unique per parent
    /// category, everything else is unique across the whole kind.
    pub fn for_kind(kind: EntityKind, parent: Option<EntityId>) -> DomainResult<Self> {
        match (kind.is_nested(), parent) {
            (true, Some(parent)) => Ok(Self::within(kind, parent)),
            (true, None) => Err(DomainError::Validation(format!(
                "{kind} requires a parent id"
            ))),
            (false, None) => Self::global(kind),
            (false, Some(_)) => Err(DomainError::Validation(format!(
                "{kind} slugs are global and take no parent id"
            ))),
        }
    }

    /// Same as [`NamespaceScope::for_kind`] for an unvalidated parent id.
    pub fn from_raw(kind: EntityKind, parent_id: Option<i64>) -> DomainResult<Self> {
        let parent = parent_id.map(EntityId::new).transpose()?;
        Self::for_kind(kind, parent)
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }
}

impl fmt::Display for NamespaceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parent {
            Some(parent) => write!(f, "{}@{}", self.kind, parent),
            None => f.write_str(self.kind.as_str()),
        }
    }
}

/// Human-authored text a slug is derived from (a title or a name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label(String);

impl Label {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::InvalidLabel("label cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two labels are the same edit-wise when they only differ in surrounding whitespace.
    pub fn same_text(&self, other: &Label) -> bool {
        self.0.trim() == other.0.trim()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Label> for String {
    fn from(value: Label) -> Self {
        value.0
    }
}

/// URL-safe identifier: `^[a-z0-9]+(-[a-z0-9]+)*$`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !is_valid_slug(&value) {
            return Err(DomainError::Validation(format!(
                "'{value}' is not a valid slug"
            )));
        }
        Ok(Self(value))
    }

    /// Candidate `base-n` for the n-th collision probe.
    pub fn with_suffix(&self, n: u32) -> Self {
        Self(format!("{}-{}", self.0, n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_slug(value: &str) -> bool {
    value.split('-').all(|segment| {
        !segment.is_empty()
            && segment
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    })
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}
