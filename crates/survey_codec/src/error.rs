use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MoodParseError {
	#[error("Unable to determine mood from: {input}")]
	UnknownMood { input: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum TagParseError {
	#[error("Tag entry is missing a +/- polarity marker: {input}")]
	MissingPolarity { input: String },

	#[error("Tag entry has an empty label: {input}")]
	EmptyLabel { input: String },
}
