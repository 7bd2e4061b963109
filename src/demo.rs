use std::io;
use std::io::BufRead;

use log::info;

use crate::client::NewClient;
use crate::user::{NewUser, UserChanges, UserKey};
use crate::{client, setup, user, Error, PgPool, Result};

fn pause(text: &str) {
	println!("\n--- {} ---", text);
	println!("Press Enter to continue...");
	let mut line = String::new();
	io::stdin().lock().read_line(&mut line).ok();
}

/// Walk through the create/read/update/delete demo, strictly sequentially,
/// pausing for operator acknowledgment between steps. Any failure
/// propagates and aborts the run.
pub fn run(pool: PgPool) -> Result<()> {
	println!("\nResetting tables for clean demo");
	let conn = &mut pool.get()?;
	setup::reset(conn)?;
	pause("Fresh tables created");

	let client_repo = client::Repo::new(pool.clone());
	let user_repo = user::Repo::new(pool.clone());

	println!("\nCreating parent client...");
	let parent = client_repo.create_client(NewClient {
		name: "PARENT_COMPANY",
	})?;
	info!("client id {} assigned", parent.client_id);
	pause("Client inserted");

	println!("\nCreating user record...");
	let new_user = user_repo.create_user(NewUser {
		client_id: Some(parent.client_id),
		email: "USER_12345@example.com",
		phone_number: Some("999-999-9999"),
		role: Some("STANDARD"),
	})?;
	pause("User inserted (CREATE)");

	println!("\nReading users from database...");
	for u in user_repo.list_users()? {
		println!(
			"[USER] ID={} | EMAIL={} | PHONE={} | ROLE={}",
			u.user_id,
			u.email,
			u.phone_number.as_deref().unwrap_or("-"),
			u.role.as_deref().unwrap_or("-"),
		);
	}
	pause("Users retrieved (READ)");

	println!("\nUpdating user email and role...");
	let updated = user_repo.update_user(
		new_user.user_id,
		UserChanges {
			email: Some("DIFFERENT@example.com"),
			role: Some("ADMIN"),
			..UserChanges::default()
		},
	)?;
	pause("User updated (UPDATE)");

	println!("\nDeleting updated user...");
	let target = user_repo.find_user(UserKey::Email(&updated.email))?;
	user_repo.delete_user(target.user_id)?;
	match user_repo.find_user(UserKey::Email(&updated.email)) {
		Err(Error::RecordNotFound) => {}
		Ok(_) => println!("user row still present after delete"),
		Err(e) => return Err(e),
	}
	pause("User deleted (DELETE)");

	println!("\nDemo complete.");
	Ok(())
}
