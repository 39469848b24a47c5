use survey_codec::schema::{Mood, SurveyResponse, Tag};
use survey_codec::{catalog, decode, encode};

fn round_trips(response: &SurveyResponse) {
	let decoded = decode(&encode(response));
	assert_eq!(decoded.mood, response.mood, "mood lost for: {:?}", response);
	assert_eq!(decoded.tags, response.tags, "tags lost for: {:?}", response);
	assert_eq!(decoded.comment, response.comment, "comment lost for: {:?}", response);
}

#[test]
fn encode_decode_round_trips_for_every_mood() {
	for mood in Mood::ALL {
		round_trips(&SurveyResponse {
			mood: Some(mood),
			tags: vec![Tag::positive("Friendly Crew")],
			comment: "as expected".to_string(),
			rating: mood.default_rating(),
		});
	}
}

#[test]
fn encode_decode_round_trips_without_mood() {
	round_trips(&SurveyResponse {
		mood: None,
		tags: vec![Tag::negative("Delayed Flight"), Tag::positive("Good Value")],
		comment: String::new(),
		rating: 2,
	});
}

#[test]
fn encode_decode_round_trips_full_catalog_selection() {
	let mut tags = catalog::positive_tags();
	tags.extend(catalog::negative_tags());

	round_trips(&SurveyResponse {
		mood: Some(Mood::Okay),
		tags,
		comment: "a bit of everything".to_string(),
		rating: 3,
	});
}

#[test]
fn encode_decode_round_trips_multiline_comment() {
	round_trips(&SurveyResponse {
		mood: Some(Mood::VeryBad),
		tags: vec![],
		comment: "delayed twice\n\nthen cancelled outright".to_string(),
		rating: 1,
	});
}

#[test]
fn encode_decode_round_trips_empty_response() {
	round_trips(&SurveyResponse::default());
}

#[test]
fn decoded_survey_serializes_for_the_page() {
	let decoded = decode("Mood: 😊\nTags: + Seat Comfort\n\nComfy.");
	let json = serde_json::to_value(&decoded).expect("survey response serializes");

	assert_eq!(json["mood"], "Good");
	assert_eq!(json["tags"][0]["label"], "Seat Comfort");
	assert_eq!(json["comment"], "Comfy.");
}
