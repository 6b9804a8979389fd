//! Review summary port definition.

use crate::domain::{AppError, AppId, ReviewSummary};

/// Port for fetching the review summary of one app.
pub trait ReviewSummaryRetriever {
    fn fetch(&self, app_id: AppId) -> Result<ReviewSummary, AppError>;
}
