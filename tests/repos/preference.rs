use crate::common::*;

use statement_api::types::Date;

#[test]
fn insert_preference_for_user() {
	let suite = Suite::setup();
	let user = suite.user("prefers-email@example.com");

	let preference = suite
		.preference_repo
		.create_preference(NewPreference {
			user_id: user.user_id,
			delivery_method: Some("EMAIL"),
			effective_date: Date::from_ymd_opt(2026, 1, 1),
		})
		.unwrap();

	let got = suite.preference_repo.find_for_user(user.user_id).unwrap();
	assert_eq!(got, preference);
}

#[test]
fn second_preference_for_user_is_rejected() {
	let suite = Suite::setup();
	let user = suite.user("one-pref@example.com");

	suite
		.preference_repo
		.create_preference(NewPreference {
			user_id: user.user_id,
			delivery_method: Some("EMAIL"),
			effective_date: None,
		})
		.unwrap();

	let got = suite.preference_repo.create_preference(NewPreference {
		user_id: user.user_id,
		delivery_method: Some("POSTAL"),
		effective_date: None,
	});

	assert_eq!(got, Err(Error::RecordAlreadyExists));
}

#[test]
fn deleting_user_cascades_preference() {
	let suite = Suite::setup();
	let user = suite.user("short-lived@example.com");

	suite
		.preference_repo
		.create_preference(NewPreference {
			user_id: user.user_id,
			delivery_method: Some("EMAIL"),
			effective_date: None,
		})
		.unwrap();

	suite.user_repo.delete_user(user.user_id).unwrap();

	let got = suite.preference_repo.find_for_user(user.user_id);
	assert_eq!(got, Err(Error::RecordNotFound));
}
