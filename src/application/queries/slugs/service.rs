use std::sync::Arc;

use crate::domain::slug::SlugRecordRepository;

pub struct SlugQueryService {
    pub(super) repo: Arc<dyn SlugRecordRepository>,
}

impl SlugQueryService {
    pub fn new(repo: Arc<dyn SlugRecordRepository>) -> Self {
        Self { repo }
    }
}
