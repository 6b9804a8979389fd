//! Review summary payload returned by the Steam store reviews endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// Aggregate review statistics plus the first page of reviews for one app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub success: i32,
    pub query_summary: QuerySummary,
    pub reviews: Vec<Review>,
    /// Opaque pagination cursor for the next page.
    pub cursor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySummary {
    pub num_reviews: u32,
    pub review_score: u32,
    pub review_score_desc: String,
    pub total_positive: u32,
    pub total_negative: u32,
    pub total_reviews: u32,
}

impl QuerySummary {
    /// Share of positive reviews in percent, `None` when there are no reviews.
    pub fn positive_ratio(&self) -> Option<f64> {
        let total = self.total_positive + self.total_negative;
        if total == 0 {
            return None;
        }
        Some(f64::from(self.total_positive) * 100.0 / f64::from(total))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "recommendationid")]
    pub recommendation_id: String,
    pub author: Author,
    pub language: String,
    pub review: String,
    pub timestamp_created: i64,
    pub timestamp_updated: i64,
    pub voted_up: bool,
    pub votes_up: u32,
    pub votes_funny: u32,
    #[serde(deserialize_with = "number_or_string")]
    pub weighted_vote_score: f64,
    pub comment_count: u32,
    pub steam_purchase: bool,
    pub received_for_free: bool,
    pub written_during_early_access: bool,
    #[serde(default)]
    pub hidden_in_steam_china: bool,
    #[serde(default)]
    pub steam_china_location: Option<String>,
    #[serde(default)]
    pub primarily_steam_deck: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "steamid")]
    pub steam_id: String,
    pub num_games_owned: u32,
    pub num_reviews: u32,
    pub playtime_forever: u64,
    pub playtime_last_two_weeks: u64,
    #[serde(default)]
    pub playtime_at_review: Option<u64>,
    #[serde(default)]
    pub last_played: Option<i64>,
}

/// Steam sends `weighted_vote_score` either as a number or as a decimal string.
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}
