use diesel::prelude::*;

use crate::schema::accounts;
use crate::types::Id;
use crate::{PgPool, Result};

#[derive(Queryable, Identifiable, PartialEq, Debug)]
#[diesel(table_name = accounts, primary_key(account_id))]
pub struct Account {
	pub account_id: Id,
	pub account_number: String,
	pub account_type: Option<String>,
	pub status: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = accounts)]
pub struct NewAccount<'a> {
	pub account_number: &'a str,
	pub account_type: Option<&'a str>,
	pub status: Option<&'a str>,
}

pub enum AccountKey<'a> {
	Id(Id),
	Number(&'a str),
}

pub struct Repo {
	db: PgPool,
}

impl Repo {
	pub fn new(db: PgPool) -> Self {
		Repo { db }
	}

	pub fn create_account(&self, new_account: NewAccount) -> Result<Account> {
		let conn = &mut self.db.get()?;
		diesel::insert_into(accounts::table)
			.values(&new_account)
			.get_result(conn)
			.map_err(Into::into)
	}

	pub fn find_account(&self, key: AccountKey) -> Result<Account> {
		let conn = &mut self.db.get()?;
		match key {
			AccountKey::Id(id) => accounts::table.find(id).first::<Account>(conn),
			AccountKey::Number(number) => accounts::table
				.filter(accounts::account_number.eq(number))
				.first::<Account>(conn),
		}
		.map_err(Into::into)
	}

	pub fn list_accounts(&self) -> Result<Vec<Account>> {
		let conn = &mut self.db.get()?;
		accounts::table
			.order(accounts::account_id.asc())
			.load::<Account>(conn)
			.map_err(Into::into)
	}
}
