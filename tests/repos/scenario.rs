use crate::common::*;

// The demo flow end to end: client, linked user, read, update, delete.
#[test]
fn crud_walkthrough() {
	let suite = Suite::setup();

	let parent = suite.client("PARENT_COMPANY");

	let user = suite
		.user_repo
		.create_user(NewUser {
			client_id: Some(parent.client_id),
			email: "USER_12345@example.com",
			phone_number: Some("999-999-9999"),
			role: Some("STANDARD"),
		})
		.unwrap();
	assert_eq!(user.client_id, Some(parent.client_id));

	let listed = suite.user_repo.list_users().unwrap();
	assert_eq!(listed.len(), 1);
	assert_eq!(listed[0].email, "USER_12345@example.com");
	assert_eq!(listed[0].role.as_deref(), Some("STANDARD"));

	let updated = suite
		.user_repo
		.update_user(
			user.user_id,
			UserChanges {
				email: Some("DIFFERENT@example.com"),
				role: Some("ADMIN"),
				..UserChanges::default()
			},
		)
		.unwrap();
	assert_eq!(updated.user_id, user.user_id);

	let found = suite
		.user_repo
		.find_user(UserKey::Email("DIFFERENT@example.com"))
		.unwrap();
	assert_eq!(found.user_id, user.user_id);
	assert_eq!(found.role.as_deref(), Some("ADMIN"));

	let old = suite
		.user_repo
		.find_user(UserKey::Email("USER_12345@example.com"));
	assert_eq!(old, Err(Error::RecordNotFound));

	suite.user_repo.delete_user(found.user_id).unwrap();

	let remaining = suite.user_repo.list_users().unwrap();
	assert!(remaining.is_empty());
}
