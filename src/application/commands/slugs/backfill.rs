use super::SlugCommandService;
use crate::{
    application::{dto::BackfillReport, error::ApplicationResult},
    domain::slug::{SlugRecord, SlugRecordUpdate},
};

impl SlugCommandService {
    /// Assign slugs to stored records that have none, one page at a time.
    ///
    /// A record that cannot be loaded or assigned is counted and skipped; the
    /// id cursor guarantees the run still terminates.
    pub async fn backfill(&self, batch_size: u32) -> ApplicationResult<BackfillReport> {
        let batch_size = batch_size.max(1);
        let mut report = BackfillReport::default();
        let mut after = None;

        loop {
            let batch = self.repo.list_missing_slugs(after, batch_size).await?;
            let Some((last, _)) = batch.last() else {
                break;
            };
            after = Some(*last);

            for (id, loaded) in batch {
                report.scanned += 1;
                let record = match loaded {
                    Ok(record) => record,
                    Err(err) => {
                        report.failed += 1;
                        tracing::warn!(id = %id, error = %err, "skipping unreadable record");
                        continue;
                    }
                };
                match self.assign_missing(&record).await {
                    Ok(()) => report.assigned += 1,
                    Err(err) => {
                        report.failed += 1;
                        tracing::warn!(
                            scope = %record.scope,
                            id = %id,
                            error = %err,
                            "could not backfill slug"
                        );
                    }
                }
            }
        }

        tracing::info!(
            scanned = report.scanned,
            assigned = report.assigned,
            failed = report.failed,
            "slug backfill finished"
        );
        Ok(report)
    }

    async fn assign_missing(&self, record: &SlugRecord) -> ApplicationResult<()> {
        let scope = record.scope;
        let id = record.id;
        let now = self.clock.now();
        let namespace = self.namespace(scope);
        let repo = self.repo.as_ref();

        let updated = self
            .allocator
            .allocate(&scope, &record.label, &namespace, Some(id), move |slug| {
                repo.update(SlugRecordUpdate::new(scope, id, now).with_slug(slug))
            })
            .await?;
        tracing::debug!(scope = %scope, id = %id, slug = ?updated.slug, "slug backfilled");
        Ok(())
    }
}
