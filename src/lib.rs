#[macro_use]
extern crate diesel;

pub mod schema;
pub mod types;
pub mod db;
pub mod setup;
pub mod client;
pub mod user;
pub mod account;
pub mod preference;
pub mod statement;
pub mod notification;
pub mod audit_log;
pub mod user_account;
pub mod demo;

use std::fmt;

use diesel::result::DatabaseErrorKind::UniqueViolation;
use diesel::result::Error::{DatabaseError, NotFound};

pub use crate::account::{Account, AccountKey, NewAccount};
pub use crate::audit_log::{AuditLog, NewAuditLog};
pub use crate::client::{Client, NewClient};
pub use crate::db::PgPool;
pub use crate::notification::{NewNotification, Notification};
pub use crate::preference::{NewPreference, Preference};
pub use crate::statement::{NewStatement, Statement};
pub use crate::user::{NewUser, User, UserChanges, UserKey};
pub use crate::user_account::UserAccount;

pub type Result<T> = std::result::Result<T, Error>;

/// Error that can occur when querying against the database
#[derive(Debug, PartialEq)]
pub enum Error {
	RecordAlreadyExists,
	RecordNotFound,
	Connection(String),
	/// A required `DB_*` environment variable is missing or empty
	Config(String),
	/// Catch-all for any other database failure
	DatabaseError(diesel::result::Error),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Error::RecordAlreadyExists => write!(f, "record violates a unique constraint"),
			Error::RecordNotFound => write!(f, "record does not exist"),
			Error::Connection(e) => write!(f, "opening database connection: {}", e),
			Error::Config(e) => write!(f, "reading configuration: {}", e),
			Error::DatabaseError(e) => write!(f, "database error: {:?}", e),
		}
	}
}

impl From<diesel::result::Error> for Error {
	fn from(e: diesel::result::Error) -> Self {
		match e {
			DatabaseError(UniqueViolation, _) => Error::RecordAlreadyExists,
			NotFound => Error::RecordNotFound,

			_ => Error::DatabaseError(e),
		}
	}
}

impl From<diesel::r2d2::PoolError> for Error {
	fn from(e: diesel::r2d2::PoolError) -> Self {
		Error::Connection(e.to_string())
	}
}
