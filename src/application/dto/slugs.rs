use crate::domain::slug::SlugRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlugRecordDto {
    pub id: i64,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    pub label: String,
    pub slug: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SlugRecord> for SlugRecordDto {
    fn from(record: SlugRecord) -> Self {
        Self {
            id: record.id.into(),
            kind: record.scope.kind().as_str().to_string(),
            parent_id: record.scope.parent().map(i64::from),
            label: record.label.into(),
            slug: record.slug.map(String::from),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Outcome of a backfill run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackfillReport {
    pub scanned: u64,
    pub assigned: u64,
    pub failed: u64,
}
