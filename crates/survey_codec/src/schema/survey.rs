use super::{Mood, Tag};
use serde::{Deserialize, Serialize};

/// A structured survey response, built up step by step before submit.
///
/// `rating == 0` means the reviewer has not confirmed a final star
/// rating yet; a finalized review always carries 1-5.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResponse {
	pub mood: Option<Mood>,
	pub tags: Vec<Tag>,
	pub comment: String,
	pub rating: u8,
}

impl SurveyResponse {
	/// Record the step-one mood pick. The mood's default star rating is
	/// pre-filled so the reviewer can submit without revisiting it.
	pub fn pick_mood(&mut self, mood: Mood) {
		self.mood = Some(mood);
		self.rating = mood.default_rating();
	}

	/// Add the tag if it is not selected yet, remove it if it is.
	pub fn toggle_tag(&mut self, tag: Tag) {
		if let Some(position) = self.tags.iter().position(|selected| *selected == tag) {
			self.tags.remove(position);
		} else {
			self.tags.push(tag);
		}
	}

	pub fn is_submittable(&self) -> bool {
		(1..=5).contains(&self.rating)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_pick_mood_prefills_rating() {
		let mut response = SurveyResponse::default();
		assert!(!response.is_submittable());

		response.pick_mood(Mood::Good);
		assert_eq!(response.mood, Some(Mood::Good));
		assert_eq!(response.rating, 4);
		assert!(response.is_submittable());
	}

	#[test]
	fn test_toggle_tag_adds_then_removes() {
		let mut response = SurveyResponse::default();

		response.toggle_tag(Tag::positive("Seat Comfort"));
		response.toggle_tag(Tag::negative("Hidden Fees"));
		assert_eq!(response.tags.len(), 2);

		response.toggle_tag(Tag::positive("Seat Comfort"));
		assert_eq!(response.tags, vec![Tag::negative("Hidden Fees")]);
	}

	#[test]
	fn test_rating_out_of_range_is_not_submittable() {
		let mut response = SurveyResponse::default();
		response.rating = 6;
		assert!(!response.is_submittable());
	}
}
