//! Per-user activity history.

use std::sync::Arc;

use tracing::info;

use clouddrive_core::result::AppResult;
use clouddrive_database::repositories::activity::ActivityRepository;
use clouddrive_entity::activity::ActivityRecord;

use crate::context::RequestContext;

/// Default page size for the history listing.
const DEFAULT_HISTORY_LIMIT: i64 = 50;

/// Read and clear access to the caller's activity ledger.
#[derive(Debug, Clone)]
pub struct ActivityService {
    /// Activity ledger repository.
    activity_repo: Arc<ActivityRepository>,
}

impl ActivityService {
    /// Creates a new activity service.
    pub fn new(activity_repo: Arc<ActivityRepository>) -> Self {
        Self { activity_repo }
    }

    /// Returns the caller's most recent activity entries, newest first.
    pub async fn history(
        &self,
        ctx: &RequestContext,
        limit: Option<i64>,
    ) -> AppResult<Vec<ActivityRecord>> {
        let limit = limit
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_HISTORY_LIMIT);
        self.activity_repo
            .find_recent_by_user(ctx.user_id(), limit)
            .await
    }

    /// Erases the caller's entire activity history and reports how many
    /// entries were removed.
    pub async fn clear(&self, ctx: &RequestContext) -> AppResult<u64> {
        let cleared = self.activity_repo.clear_for_user(ctx.user_id()).await?;
        info!(user_id = %ctx.user_id(), cleared, "Activity history cleared");
        Ok(cleared)
    }
}
