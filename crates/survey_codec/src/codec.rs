//! The line-prefix wire format for a persisted review.
//!
//! Layout, newline-joined:
//!
//! ```text
//! Mood: 😊
//! Tags: + Friendly Crew, - Hidden Fees
//!
//! free-text comment, possibly spanning lines
//! ```
//!
//! The mood line is omitted when no mood was picked. Legacy rows written
//! by the old encoder carry a literal `Mood: null` instead; decode treats
//! that token as absent. Decode never fails: content with no markers at
//! all is a plain free-text review from before the survey existed.

use crate::schema::{Mood, SurveyResponse, Tag};
use std::str::FromStr;

pub const MOOD_PREFIX: &str = "Mood: ";
pub const TAGS_PREFIX: &str = "Tags: ";
pub const TAG_SEPARATOR: &str = ", ";

/// Legacy encoder artifact for an absent mood.
const NULL_MOOD_TOKEN: &str = "null";

/// Serialize a survey response into the store's single text column.
///
/// Total: every response encodes, even an entirely empty one. The
/// `rating` field travels in its own numeric column and is not part of
/// the encoded string.
#[must_use]
pub fn encode(response: &SurveyResponse) -> String {
	let mut lines = Vec::with_capacity(4);

	if let Some(mood) = response.mood {
		lines.push(format!("{}{}", MOOD_PREFIX, mood));
	}

	let tags = response.tags.iter().map(ToString::to_string).collect::<Vec<_>>().join(TAG_SEPARATOR);
	lines.push(format!("{}{}", TAGS_PREFIX, tags));

	lines.push(String::new());
	lines.push(response.comment.clone());

	lines.join("\n")
}

/// Parse stored review content back into a structured response.
///
/// Total: malformed pieces degrade to absent/empty fields instead of
/// erroring, and lines that carry neither marker stay in the comment.
/// The returned `rating` is always 0; it lives outside the string.
#[must_use]
pub fn decode(raw: &str) -> SurveyResponse {
	if raw.trim().is_empty() {
		return SurveyResponse::default();
	}

	let lines: Vec<&str> = raw.lines().collect();

	let mood = lines.iter().find_map(|line| line.strip_prefix(MOOD_PREFIX)).and_then(parse_mood);

	let tags = lines.iter().find_map(|line| line.strip_prefix(TAGS_PREFIX)).map(parse_tags).unwrap_or_default();

	let comment = lines
		.iter()
		.filter(|line| !line.starts_with("Mood:") && !line.starts_with("Tags:"))
		.copied()
		.collect::<Vec<_>>()
		.join("\n")
		.trim()
		.to_string();

	SurveyResponse {
		mood,
		tags,
		comment,
		rating: 0,
	}
}

fn parse_mood(token: &str) -> Option<Mood> {
	let token = token.trim();
	if token.is_empty() || token == NULL_MOOD_TOKEN {
		return None;
	}
	Mood::from_str(token).ok()
}

fn parse_tags(joined: &str) -> Vec<Tag> {
	joined
		.split(TAG_SEPARATOR)
		.map(str::trim)
		.filter(|entry| !entry.is_empty())
		.filter_map(|entry| Tag::from_str(entry).ok())
		.collect()
}
