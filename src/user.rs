use diesel::prelude::*;

use crate::client::Client;
use crate::schema::users;
use crate::types::{Id, Time};
use crate::{Error, PgPool, Result};

#[derive(Queryable, Identifiable, Associations, PartialEq, Debug)]
#[diesel(table_name = users, primary_key(user_id), belongs_to(Client, foreign_key = client_id))]
pub struct User {
	pub user_id: Id,
	pub client_id: Option<Id>,
	pub email: String,
	pub phone_number: Option<String>,
	pub role: Option<String>,
	pub created_at: Time,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
	pub client_id: Option<Id>,
	pub email: &'a str,
	pub phone_number: Option<&'a str>,
	pub role: Option<&'a str>,
}

/// Partial update payload; `None` fields are left untouched
#[derive(AsChangeset, Default)]
#[diesel(table_name = users)]
pub struct UserChanges<'a> {
	pub email: Option<&'a str>,
	pub phone_number: Option<&'a str>,
	pub role: Option<&'a str>,
}

/// Keys that uniquely identify a user, so lookups never depend on
/// whichever row the store happens to return first
pub enum UserKey<'a> {
	Id(Id),
	Email(&'a str),
}

pub struct Repo {
	db: PgPool,
}

impl Repo {
	pub fn new(db: PgPool) -> Self {
		Repo { db }
	}

	pub fn create_user(&self, new_user: NewUser) -> Result<User> {
		let conn = &mut self.db.get()?;
		diesel::insert_into(users::table)
			.values(&new_user)
			.get_result(conn)
			.map_err(Into::into)
	}

	pub fn find_user(&self, key: UserKey) -> Result<User> {
		let conn = &mut self.db.get()?;
		match key {
			UserKey::Id(id) => users::table.find(id).first::<User>(conn),
			UserKey::Email(email) => users::table
				.filter(users::email.eq(email))
				.first::<User>(conn),
		}
		.map_err(Into::into)
	}

	pub fn list_users(&self) -> Result<Vec<User>> {
		let conn = &mut self.db.get()?;
		users::table
			.order(users::user_id.asc())
			.load::<User>(conn)
			.map_err(Into::into)
	}

	pub fn update_user(&self, user_id: Id, changes: UserChanges) -> Result<User> {
		let conn = &mut self.db.get()?;
		diesel::update(users::table.find(user_id))
			.set(&changes)
			.get_result(conn)
			.map_err(Into::into)
	}

	/// Delete the user row. The store cascades removal of the user's
	/// preference and its user/account association rows.
	pub fn delete_user(&self, user_id: Id) -> Result<()> {
		let conn = &mut self.db.get()?;
		let deleted = diesel::delete(users::table.find(user_id)).execute(conn)?;
		if deleted == 0 {
			return Err(Error::RecordNotFound);
		}
		Ok(())
	}
}
