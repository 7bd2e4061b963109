use diesel::prelude::*;

use crate::account::Account;
use crate::schema::{accounts, user_accounts, users};
use crate::types::Id;
use crate::user::User;
use crate::{PgPool, Result};

/// Association row for the user/account many-to-many relation.
/// Deleting either endpoint cascades removal of the row.
#[derive(Queryable, Identifiable, Associations, Insertable, PartialEq, Debug)]
#[diesel(
	table_name = user_accounts,
	primary_key(user_id, account_id),
	belongs_to(User, foreign_key = user_id),
	belongs_to(Account, foreign_key = account_id)
)]
pub struct UserAccount {
	pub user_id: Id,
	pub account_id: Id,
}

pub struct Repo {
	db: PgPool,
}

impl Repo {
	pub fn new(db: PgPool) -> Self {
		Repo { db }
	}

	pub fn link(&self, user_id: Id, account_id: Id) -> Result<UserAccount> {
		let conn = &mut self.db.get()?;
		diesel::insert_into(user_accounts::table)
			.values(&UserAccount { user_id, account_id })
			.get_result(conn)
			.map_err(Into::into)
	}

	pub fn links_for_user(&self, user_id: Id) -> Result<Vec<UserAccount>> {
		let conn = &mut self.db.get()?;
		user_accounts::table
			.filter(user_accounts::user_id.eq(user_id))
			.order(user_accounts::account_id.asc())
			.load::<UserAccount>(conn)
			.map_err(Into::into)
	}

	pub fn accounts_for_user(&self, user_id: Id) -> Result<Vec<Account>> {
		let conn = &mut self.db.get()?;
		user_accounts::table
			.inner_join(accounts::table)
			.filter(user_accounts::user_id.eq(user_id))
			.select(accounts::all_columns)
			.order(accounts::account_id.asc())
			.load::<Account>(conn)
			.map_err(Into::into)
	}

	pub fn users_for_account(&self, account_id: Id) -> Result<Vec<User>> {
		let conn = &mut self.db.get()?;
		user_accounts::table
			.inner_join(users::table)
			.filter(user_accounts::account_id.eq(account_id))
			.select(users::all_columns)
			.order(users::user_id.asc())
			.load::<User>(conn)
			.map_err(Into::into)
	}
}
