//! The blended 0-100 sentiment score and its gauge bands.
//!
//! The star rating carries 70% of the weight and the positive share of
//! tag mentions the remaining 30%. Fixed weighting: the numeric rating
//! should dominate while qualitative tags still move the needle.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const RATING_WEIGHT: f64 = 0.7;
pub const TAG_WEIGHT: f64 = 0.3;
pub const MAX_RATING: f64 = 5.0;

/// Tag component when the collection mentions no tags at all.
pub const NEUTRAL_TAG_COMPONENT: f64 = 50.0;

/// Defined score for an empty review collection.
pub const EMPTY_COLLECTION_SCORE: f64 = 35.0;

/// Blend the average star rating with the positive tag share.
///
/// `positive_total` and `negative_total` are mention counts summed over
/// every tag in the collection, not just the top lists.
#[must_use]
pub fn blend(average_rating: f64, positive_total: usize, negative_total: usize) -> f64 {
	let rating_component = (average_rating / MAX_RATING) * 100.0;

	let tag_total = positive_total + negative_total;
	let tag_component = if tag_total == 0 {
		NEUTRAL_TAG_COMPONENT
	} else {
		(positive_total as f64 / tag_total as f64) * 100.0
	};

	(rating_component * RATING_WEIGHT + tag_component * TAG_WEIGHT).clamp(0.0, 100.0)
}

/// Gauge band for a 0-100 score, thresholds matching the dial labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentBand {
	Poor,
	Okay,
	Good,
	Great,
}

impl SentimentBand {
	pub fn from_score(score: f64) -> Self {
		if score >= 75.0 {
			SentimentBand::Great
		} else if score >= 60.0 {
			SentimentBand::Good
		} else if score < 40.0 {
			SentimentBand::Poor
		} else {
			SentimentBand::Okay
		}
	}

	pub const fn label(&self) -> &'static str {
		match self {
			SentimentBand::Poor => "Poor",
			SentimentBand::Okay => "Okay",
			SentimentBand::Good => "Good",
			SentimentBand::Great => "Great",
		}
	}
}

impl fmt::Display for SentimentBand {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.label())
	}
}
