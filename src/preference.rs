use diesel::prelude::*;

use crate::schema::preferences;
use crate::types::{Date, Id};
use crate::user::User;
use crate::{PgPool, Result};

/// Delivery preference, at most one per user. The store enforces the 1:1
/// through the unique constraint on `user_id` and cascades deletion when
/// the owning user is deleted.
#[derive(Queryable, Identifiable, Associations, PartialEq, Debug)]
#[diesel(table_name = preferences, primary_key(preference_id), belongs_to(User, foreign_key = user_id))]
pub struct Preference {
	pub preference_id: Id,
	pub user_id: Id,
	pub delivery_method: Option<String>,
	pub effective_date: Option<Date>,
}

#[derive(Insertable)]
#[diesel(table_name = preferences)]
pub struct NewPreference<'a> {
	pub user_id: Id,
	pub delivery_method: Option<&'a str>,
	pub effective_date: Option<Date>,
}

pub struct Repo {
	db: PgPool,
}

impl Repo {
	pub fn new(db: PgPool) -> Self {
		Repo { db }
	}

	pub fn create_preference(&self, new_preference: NewPreference) -> Result<Preference> {
		let conn = &mut self.db.get()?;
		diesel::insert_into(preferences::table)
			.values(&new_preference)
			.get_result(conn)
			.map_err(Into::into)
	}

	pub fn find_for_user(&self, user_id: Id) -> Result<Preference> {
		let conn = &mut self.db.get()?;
		preferences::table
			.filter(preferences::user_id.eq(user_id))
			.first::<Preference>(conn)
			.map_err(Into::into)
	}
}
