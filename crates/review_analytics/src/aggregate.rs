use crate::model::{AggregateStats, ReviewRecord, StarBucket, TagCount};
use crate::sentiment;
use survey_codec::schema::TagPolarity;

/// At most this many tags per polarity make the summary.
pub const TOP_TAG_LIMIT: usize = 3;

/// Aggregate a review collection into the page's statistics summary.
///
/// Deterministic for a given input slice: tag tallies keep first-seen
/// order and the ranking sort is stable, so ties always resolve the
/// same way. Malformed or null fields count as zero/empty, never error.
#[must_use]
pub fn aggregate(reviews: &[ReviewRecord]) -> AggregateStats {
	if reviews.is_empty() {
		return AggregateStats::empty();
	}

	let review_count = reviews.len();
	let rating_total: f64 = reviews.iter().map(|review| review.rating.unwrap_or(0.0)).sum();
	let average_rating = rating_total / review_count as f64;

	let mut distribution: Vec<StarBucket> = (1..=5).rev().map(|star| StarBucket { star, count: 0 }).collect();
	for review in reviews {
		let star = review.star();
		// out-of-range stars are dropped, not an error
		if let Some(bucket) = distribution.iter_mut().find(|bucket| i64::from(bucket.star) == star) {
			bucket.count += 1;
		}
	}

	let mut positive: Vec<TagCount> = Vec::new();
	let mut negative: Vec<TagCount> = Vec::new();
	for review in reviews {
		for tag in review.survey().tags {
			let tally = match tag.polarity {
				TagPolarity::Positive => &mut positive,
				TagPolarity::Negative => &mut negative,
			};
			match tally.iter_mut().find(|entry| entry.label == tag.label) {
				Some(entry) => entry.count += 1,
				None => tally.push(TagCount { label: tag.label, count: 1 }),
			}
		}
	}

	let positive_total: usize = positive.iter().map(|entry| entry.count).sum();
	let negative_total: usize = negative.iter().map(|entry| entry.count).sum();
	let sentiment_score = sentiment::blend(average_rating, positive_total, negative_total);

	AggregateStats {
		review_count,
		average_rating,
		distribution,
		top_positive_tags: top_tags(positive),
		top_negative_tags: top_tags(negative),
		sentiment_score,
	}
}

fn top_tags(mut tallies: Vec<TagCount>) -> Vec<TagCount> {
	// stable sort: equal counts keep first-seen order
	tallies.sort_by(|a, b| b.count.cmp(&a.count));
	tallies.truncate(TOP_TAG_LIMIT);
	tallies
}
