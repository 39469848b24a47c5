use crate::error::MoodParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse sentiment a reviewer picks in step one of the survey.
///
/// The emoji token is what gets persisted; the label is what the
/// survey UI shows underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
	VeryBad,
	Okay,
	Good,
	Excellent,
}

impl Mood {
	pub const ALL: [Mood; 4] = [Mood::VeryBad, Mood::Okay, Mood::Good, Mood::Excellent];

	pub fn emoji(&self) -> &'static str {
		match self {
			Mood::VeryBad => "😠",
			Mood::Okay => "😐",
			Mood::Good => "😊",
			Mood::Excellent => "😍",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Mood::VeryBad => "Very Bad",
			Mood::Okay => "Okay",
			Mood::Good => "Good",
			Mood::Excellent => "Excellent",
		}
	}

	/// Star rating pre-filled when this mood is picked, before the
	/// reviewer confirms a final rating.
	pub fn default_rating(&self) -> u8 {
		match self {
			Mood::VeryBad => 1,
			Mood::Okay => 2,
			Mood::Good => 4,
			Mood::Excellent => 5,
		}
	}
}

impl fmt::Display for Mood {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.emoji())
	}
}

impl FromStr for Mood {
	type Err = MoodParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		match trimmed {
			"😠" => Ok(Mood::VeryBad),
			"😐" => Ok(Mood::Okay),
			"😊" => Ok(Mood::Good),
			"😍" => Ok(Mood::Excellent),
			_ => match trimmed.to_lowercase().as_str() {
				"very bad" => Ok(Mood::VeryBad),
				"okay" => Ok(Mood::Okay),
				"good" => Ok(Mood::Good),
				"excellent" => Ok(Mood::Excellent),
				_ => Err(MoodParseError::UnknownMood { input: trimmed.to_string() }),
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_mood_from_str() {
		let test_cases = vec![
			("😠", Mood::VeryBad),
			("😐", Mood::Okay),
			("😊", Mood::Good),
			("😍", Mood::Excellent),
			("Very Bad", Mood::VeryBad),
			("very bad", Mood::VeryBad),
			("OKAY", Mood::Okay),
			(" Good ", Mood::Good),
			("excellent", Mood::Excellent),
		];

		for (input, expected) in test_cases {
			assert_eq!(Mood::from_str(input), Ok(expected), "Failed for input: {}", input);
		}
	}

	#[test]
	fn test_mood_from_str_errors() {
		let error_cases = vec!["", "🤖", "null", "great", "Mood: 😊"];

		for input in error_cases {
			assert!(Mood::from_str(input).is_err(), "Expected error for input: {}", input);
		}
	}

	#[test]
	fn test_mood_default_ratings() {
		let test_cases = vec![(Mood::VeryBad, 1), (Mood::Okay, 2), (Mood::Good, 4), (Mood::Excellent, 5)];

		for (mood, expected) in test_cases {
			assert_eq!(mood.default_rating(), expected);
		}
	}

	#[test]
	fn test_mood_display_round_trips_through_emoji() {
		for mood in Mood::ALL {
			assert_eq!(Mood::from_str(&mood.to_string()), Ok(mood));
		}
	}
}
