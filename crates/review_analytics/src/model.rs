use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use survey_codec::schema::SurveyResponse;

/// A review row as the store hands it over. `content` and `rating` are
/// nullable there, so both stay optional here; all null-coalescing
/// happens in the accessors below rather than at every call site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewRecord {
	pub id: i64,
	pub content: Option<String>,
	pub rating: Option<f64>,
	pub created_at: DateTime<Utc>,
}

impl ReviewRecord {
	/// Decode the stored content into a structured survey response.
	/// Absent content decodes to an all-empty response.
	pub fn survey(&self) -> SurveyResponse {
		self.content.as_deref().map(survey_codec::decode).unwrap_or_default()
	}

	/// Star bucket for this review: the rating rounded to the nearest
	/// integer, with a missing rating counting as 0.
	pub fn star(&self) -> i64 {
		self.rating.unwrap_or(0.0).round() as i64
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarBucket {
	pub star: u8,
	pub count: usize,
}

impl StarBucket {
	/// Share of the collection that landed in this bucket, as 0-100.
	pub fn percentage(&self, review_count: usize) -> f64 {
		if review_count == 0 {
			0.0
		} else {
			(self.count as f64 / review_count as f64) * 100.0
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
	pub label: String,
	pub count: usize,
}

/// The statistics summary a company page renders. Always derived from
/// the review collection it was computed over; there is no cached copy
/// to invalidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
	pub review_count: usize,
	pub average_rating: f64,
	pub distribution: Vec<StarBucket>,
	pub top_positive_tags: Vec<TagCount>,
	pub top_negative_tags: Vec<TagCount>,
	pub sentiment_score: f64,
}

impl AggregateStats {
	/// The zero-review summary: empty lists, all-zero buckets, and the
	/// neutral sentiment default.
	pub fn empty() -> Self {
		AggregateStats {
			review_count: 0,
			average_rating: 0.0,
			distribution: (1..=5).rev().map(|star| StarBucket { star, count: 0 }).collect(),
			top_positive_tags: vec![],
			top_negative_tags: vec![],
			sentiment_score: crate::sentiment::EMPTY_COLLECTION_SCORE,
		}
	}

	/// Largest count across both top-tag lists, used to scale the tag
	/// mention bars. 0 when no tags were mentioned at all.
	pub fn max_tag_count(&self) -> usize {
		self.top_positive_tags.iter().chain(&self.top_negative_tags).map(|tag| tag.count).max().unwrap_or(0)
	}

	/// One-decimal average for display, or `N/A` with no reviews.
	pub fn formatted_average(&self) -> String {
		if self.review_count == 0 {
			"N/A".to_string()
		} else {
			format!("{:.1}", self.average_rating)
		}
	}
}
