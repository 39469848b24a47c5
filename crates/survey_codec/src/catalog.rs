//! The fixed tag catalogs the survey UI offers. Decode never checks
//! labels against these; they exist for survey-building callers only.

use crate::schema::Tag;

pub const POSITIVE_TAGS: [&str; 5] = ["Friendly Crew", "On-time Performance", "Seat Comfort", "Good Value", "Clean Aircraft"];

pub const NEGATIVE_TAGS: [&str; 5] = ["Rude Crew", "Delayed Flight", "Uncomfortable Seat", "Hidden Fees", "Dirty Aircraft"];

pub fn positive_tags() -> Vec<Tag> {
	POSITIVE_TAGS.iter().copied().map(Tag::positive).collect()
}

pub fn negative_tags() -> Vec<Tag> {
	NEGATIVE_TAGS.iter().copied().map(Tag::negative).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::schema::TagPolarity;

	#[test]
	fn test_catalogs_are_disjoint() {
		for label in POSITIVE_TAGS {
			assert!(!NEGATIVE_TAGS.contains(&label));
		}
	}

	#[test]
	fn test_catalog_tags_carry_polarity() {
		assert!(positive_tags().iter().all(|tag| tag.polarity == TagPolarity::Positive));
		assert!(negative_tags().iter().all(|tag| tag.polarity == TagPolarity::Negative));
		assert_eq!(positive_tags().len(), 5);
		assert_eq!(negative_tags().len(), 5);
	}
}
