use crate::common::*;

#[test]
fn insert_user() {
	let suite = Suite::setup();
	let user = suite
		.user_repo
		.create_user(NewUser {
			client_id: None,
			email: "tom@example.com",
			phone_number: Some("555-5555"),
			role: Some("STANDARD"),
		})
		.unwrap();

	let got = suite.user_repo.find_user(UserKey::Id(user.user_id)).unwrap();
	assert_eq!(got, user);
}

#[test]
fn find_user_with_key() {
	let suite = Suite::setup();
	let user = suite.user("bob@example.com");

	let test_cases = vec![UserKey::Id(user.user_id), UserKey::Email(&user.email)];

	for user_key in test_cases {
		let got = suite.user_repo.find_user(user_key).expect("found user");
		assert_eq!(got, user);
	}
}

#[test]
fn duplicate_email_is_rejected() {
	let suite = Suite::setup();
	suite.user("taken@example.com");

	let got = suite.user_repo.create_user(NewUser {
		client_id: None,
		email: "taken@example.com",
		phone_number: None,
		role: None,
	});

	assert_eq!(got, Err(Error::RecordAlreadyExists));
}

#[test]
fn update_user_email_and_role() {
	let suite = Suite::setup();
	let user = suite.user("before@example.com");

	let updated = suite
		.user_repo
		.update_user(
			user.user_id,
			UserChanges {
				email: Some("after@example.com"),
				role: Some("ADMIN"),
				..UserChanges::default()
			},
		)
		.unwrap();

	assert_eq!(updated.user_id, user.user_id);
	assert_eq!(updated.email, "after@example.com");
	assert_eq!(updated.role.as_deref(), Some("ADMIN"));
	// untouched fields survive the partial update
	assert_eq!(updated.created_at, user.created_at);

	let got = suite
		.user_repo
		.find_user(UserKey::Email("after@example.com"))
		.unwrap();
	assert_eq!(got, updated);

	let gone = suite.user_repo.find_user(UserKey::Email("before@example.com"));
	assert_eq!(gone, Err(Error::RecordNotFound));
}

#[test]
fn delete_missing_user() {
	let suite = Suite::setup();
	let got = suite.user_repo.delete_user(999_999);
	assert_eq!(got, Err(Error::RecordNotFound));
}
