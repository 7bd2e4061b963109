use diesel::prelude::*;

use crate::schema::notifications;
use crate::statement::Statement;
use crate::types::{Id, Time};
use crate::{PgPool, Result};

#[derive(Queryable, Identifiable, Associations, PartialEq, Debug)]
#[diesel(table_name = notifications, primary_key(notification_id), belongs_to(Statement, foreign_key = statement_id))]
pub struct Notification {
	pub notification_id: Id,
	pub statement_id: Option<Id>,
	pub sent_date: Time,
	// column is named "type" in the store
	pub kind: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = notifications)]
pub struct NewNotification<'a> {
	pub statement_id: Option<Id>,
	pub kind: Option<&'a str>,
}

pub struct Repo {
	db: PgPool,
}

impl Repo {
	pub fn new(db: PgPool) -> Self {
		Repo { db }
	}

	pub fn create_notification(&self, new_notification: NewNotification) -> Result<Notification> {
		let conn = &mut self.db.get()?;
		diesel::insert_into(notifications::table)
			.values(&new_notification)
			.get_result(conn)
			.map_err(Into::into)
	}

	pub fn list_for_statement(&self, statement_id: Id) -> Result<Vec<Notification>> {
		let conn = &mut self.db.get()?;
		notifications::table
			.filter(notifications::statement_id.eq(statement_id))
			.order(notifications::notification_id.asc())
			.load::<Notification>(conn)
			.map_err(Into::into)
	}
}
