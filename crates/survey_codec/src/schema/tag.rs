use crate::error::TagParseError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static TAG_ENTRY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([+-])\s*(.+)$").expect("tag entry pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagPolarity {
	Positive,
	Negative,
}

impl TagPolarity {
	pub const fn marker(&self) -> char {
		match self {
			TagPolarity::Positive => '+',
			TagPolarity::Negative => '-',
		}
	}
}

/// A short labeled aspect of the experience, polarized good or bad.
///
/// The label is opaque text: the catalog the survey UI offers has
/// drifted over time, so decode never assumes catalog membership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
	pub polarity: TagPolarity,
	pub label: String,
}

impl Tag {
	pub fn positive(label: impl Into<String>) -> Self {
		Tag {
			polarity: TagPolarity::Positive,
			label: label.into(),
		}
	}

	pub fn negative(label: impl Into<String>) -> Self {
		Tag {
			polarity: TagPolarity::Negative,
			label: label.into(),
		}
	}
}

impl fmt::Display for Tag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.polarity.marker(), self.label)
	}
}

impl FromStr for Tag {
	type Err = TagParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		let captures = TAG_ENTRY.captures(trimmed).ok_or_else(|| TagParseError::MissingPolarity { input: trimmed.to_string() })?;

		let polarity = match &captures[1] {
			"+" => TagPolarity::Positive,
			_ => TagPolarity::Negative,
		};
		let label = captures[2].trim();
		if label.is_empty() {
			return Err(TagParseError::EmptyLabel { input: trimmed.to_string() });
		}

		Ok(Tag {
			polarity,
			label: label.to_string(),
		})
	}
}
