//! Review retriever double recording requested app ids.

use std::sync::{Arc, Mutex};

use crate::domain::{AppError, AppId, QuerySummary, ReviewSummary};
use crate::ports::ReviewSummaryRetriever;

#[derive(Clone, Debug, Default)]
pub struct FakeReviewRetriever {
    failure: Option<String>,
    pub requested: Arc<Mutex<Vec<AppId>>>,
}

impl FakeReviewRetriever {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { failure: Some(message.into()), ..Self::default() }
    }

    pub fn requested_ids(&self) -> Vec<AppId> {
        self.requested.lock().unwrap().clone()
    }

    /// Summary returned for `app_id`; the description embeds the id.
    pub fn summary_for(app_id: AppId) -> ReviewSummary {
        ReviewSummary {
            success: 1,
            query_summary: QuerySummary {
                num_reviews: 0,
                review_score: 7,
                review_score_desc: format!("Mostly Positive ({})", app_id),
                total_positive: 70,
                total_negative: 30,
                total_reviews: 100,
            },
            reviews: Vec::new(),
            cursor: "*".to_string(),
        }
    }
}

impl ReviewSummaryRetriever for FakeReviewRetriever {
    fn fetch(&self, app_id: AppId) -> Result<ReviewSummary, AppError> {
        self.requested.lock().unwrap().push(app_id);
        match &self.failure {
            Some(message) => Err(AppError::SummaryUnavailable(message.clone())),
            None => Ok(Self::summary_for(app_id)),
        }
    }
}
