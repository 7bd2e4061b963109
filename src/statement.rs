use diesel::prelude::*;

use crate::account::Account;
use crate::schema::statements;
use crate::types::{Date, Id};
use crate::{PgPool, Result};

// Statements carry no workflow here; nothing generates or delivers them.
// They exist as structure for notifications and audit logs to hang off.
#[derive(Queryable, Identifiable, Associations, PartialEq, Debug)]
#[diesel(table_name = statements, primary_key(statement_id), belongs_to(Account, foreign_key = account_id))]
pub struct Statement {
	pub statement_id: Id,
	pub account_id: Option<Id>,
	pub issue_date: Option<Date>,
	pub delivery_type: Option<String>,
	pub file_path: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = statements)]
pub struct NewStatement<'a> {
	pub account_id: Option<Id>,
	pub issue_date: Option<Date>,
	pub delivery_type: Option<&'a str>,
	pub file_path: Option<&'a str>,
}

pub struct Repo {
	db: PgPool,
}

impl Repo {
	pub fn new(db: PgPool) -> Self {
		Repo { db }
	}

	pub fn create_statement(&self, new_statement: NewStatement) -> Result<Statement> {
		let conn = &mut self.db.get()?;
		diesel::insert_into(statements::table)
			.values(&new_statement)
			.get_result(conn)
			.map_err(Into::into)
	}

	pub fn find_statement(&self, statement_id: Id) -> Result<Statement> {
		let conn = &mut self.db.get()?;
		statements::table
			.find(statement_id)
			.first::<Statement>(conn)
			.map_err(Into::into)
	}

	pub fn list_for_account(&self, account_id: Id) -> Result<Vec<Statement>> {
		let conn = &mut self.db.get()?;
		statements::table
			.filter(statements::account_id.eq(account_id))
			.order(statements::statement_id.asc())
			.load::<Statement>(conn)
			.map_err(Into::into)
	}
}
