use diesel::prelude::*;

use crate::schema::audit_logs;
use crate::statement::Statement;
use crate::types::{Id, Time};
use crate::{PgPool, Result};

#[derive(Queryable, Identifiable, Associations, PartialEq, Debug)]
#[diesel(table_name = audit_logs, primary_key(log_id), belongs_to(Statement, foreign_key = statement_id))]
pub struct AuditLog {
	pub log_id: Id,
	pub statement_id: Option<Id>,
	pub timestamp: Time,
	pub action: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = audit_logs)]
pub struct NewAuditLog<'a> {
	pub statement_id: Option<Id>,
	pub action: Option<&'a str>,
}

pub struct Repo {
	db: PgPool,
}

impl Repo {
	pub fn new(db: PgPool) -> Self {
		Repo { db }
	}

	pub fn record(&self, new_entry: NewAuditLog) -> Result<AuditLog> {
		let conn = &mut self.db.get()?;
		diesel::insert_into(audit_logs::table)
			.values(&new_entry)
			.get_result(conn)
			.map_err(Into::into)
	}

	pub fn list_for_statement(&self, statement_id: Id) -> Result<Vec<AuditLog>> {
		let conn = &mut self.db.get()?;
		audit_logs::table
			.filter(audit_logs::statement_id.eq(statement_id))
			.order(audit_logs::log_id.asc())
			.load::<AuditLog>(conn)
			.map_err(Into::into)
	}
}
