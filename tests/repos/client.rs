use crate::common::*;

#[test]
fn insert_client_then_linked_user() {
	let suite = Suite::setup();
	let parent = suite.client("PARENT_COMPANY");

	let user = suite
		.user_repo
		.create_user(NewUser {
			client_id: Some(parent.client_id),
			email: "linked@example.com",
			phone_number: None,
			role: None,
		})
		.unwrap();

	assert_eq!(user.client_id, Some(parent.client_id));

	let got = suite.client_repo.find_client(parent.client_id).unwrap();
	assert_eq!(got, parent);
}

#[test]
fn list_clients_in_id_order() {
	let suite = Suite::setup();
	let first = suite.client("FIRST_COMPANY");
	let second = suite.client("SECOND_COMPANY");

	let got = suite.client_repo.list_clients().unwrap();
	assert_eq!(got, vec![first, second]);
}
