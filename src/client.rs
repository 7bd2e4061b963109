use diesel::prelude::*;

use crate::schema::clients;
use crate::types::Id;
use crate::{PgPool, Result};

#[derive(Queryable, Identifiable, PartialEq, Debug)]
#[diesel(table_name = clients, primary_key(client_id))]
pub struct Client {
	pub client_id: Id,
	pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = clients)]
pub struct NewClient<'a> {
	pub name: &'a str,
}

pub struct Repo {
	db: PgPool,
}

impl Repo {
	pub fn new(db: PgPool) -> Self {
		Repo { db }
	}

	pub fn create_client(&self, new_client: NewClient) -> Result<Client> {
		let conn = &mut self.db.get()?;
		diesel::insert_into(clients::table)
			.values(&new_client)
			.get_result(conn)
			.map_err(Into::into)
	}

	pub fn find_client(&self, client_id: Id) -> Result<Client> {
		let conn = &mut self.db.get()?;
		clients::table
			.find(client_id)
			.first::<Client>(conn)
			.map_err(Into::into)
	}

	pub fn list_clients(&self) -> Result<Vec<Client>> {
		let conn = &mut self.db.get()?;
		clients::table
			.order(clients::client_id.asc())
			.load::<Client>(conn)
			.map_err(Into::into)
	}
}
