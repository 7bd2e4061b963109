use diesel::prelude::*;
use diesel::sql_query;

use crate::Result;

// Creation order satisfies foreign key references; drops run in reverse.
const CREATE_TABLES: &[&str] = &[
	"CREATE TABLE clients (
		client_id SERIAL PRIMARY KEY,
		name VARCHAR(255) NOT NULL
	)",
	"CREATE TABLE users (
		user_id SERIAL PRIMARY KEY,
		client_id INTEGER REFERENCES clients (client_id),
		email VARCHAR(255) NOT NULL UNIQUE,
		phone_number VARCHAR(20),
		role VARCHAR(50),
		created_at TIMESTAMPTZ NOT NULL DEFAULT now()
	)",
	"CREATE TABLE accounts (
		account_id SERIAL PRIMARY KEY,
		account_number VARCHAR(50) NOT NULL UNIQUE,
		account_type VARCHAR(50),
		status VARCHAR(50)
	)",
	"CREATE TABLE preferences (
		preference_id SERIAL PRIMARY KEY,
		user_id INTEGER NOT NULL UNIQUE REFERENCES users (user_id) ON DELETE CASCADE,
		delivery_method VARCHAR(50),
		effective_date DATE
	)",
	"CREATE TABLE statements (
		statement_id SERIAL PRIMARY KEY,
		account_id INTEGER REFERENCES accounts (account_id),
		issue_date DATE,
		delivery_type VARCHAR(50),
		file_path TEXT
	)",
	"CREATE TABLE notifications (
		notification_id SERIAL PRIMARY KEY,
		statement_id INTEGER REFERENCES statements (statement_id),
		sent_date TIMESTAMPTZ NOT NULL DEFAULT now(),
		type VARCHAR(50)
	)",
	"CREATE TABLE audit_logs (
		log_id SERIAL PRIMARY KEY,
		statement_id INTEGER REFERENCES statements (statement_id),
		timestamp TIMESTAMPTZ NOT NULL DEFAULT now(),
		action TEXT
	)",
	"CREATE TABLE user_accounts (
		user_id INTEGER NOT NULL REFERENCES users (user_id) ON DELETE CASCADE,
		account_id INTEGER NOT NULL REFERENCES accounts (account_id) ON DELETE CASCADE,
		PRIMARY KEY (user_id, account_id)
	)",
];

const DROP_TABLES: &[&str] = &[
	"DROP TABLE IF EXISTS user_accounts CASCADE",
	"DROP TABLE IF EXISTS audit_logs CASCADE",
	"DROP TABLE IF EXISTS notifications CASCADE",
	"DROP TABLE IF EXISTS statements CASCADE",
	"DROP TABLE IF EXISTS preferences CASCADE",
	"DROP TABLE IF EXISTS accounts CASCADE",
	"DROP TABLE IF EXISTS users CASCADE",
	"DROP TABLE IF EXISTS clients CASCADE",
];

pub fn create_tables(conn: &mut PgConnection) -> Result<()> {
	for stmt in CREATE_TABLES {
		sql_query(*stmt).execute(conn)?;
	}
	Ok(())
}

pub fn drop_tables(conn: &mut PgConnection) -> Result<()> {
	for stmt in DROP_TABLES {
		sql_query(*stmt).execute(conn)?;
	}
	Ok(())
}

/// Drop every entity table and recreate it from the definitions.
///
/// Destroys any existing data. This is a reset primitive for demos and
/// tests only and must not be exposed as a production operation.
pub fn reset(conn: &mut PgConnection) -> Result<()> {
	drop_tables(conn)?;
	create_tables(conn)
}
