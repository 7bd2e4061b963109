use chrono::{DateTime, NaiveDate, Utc};

/// Surrogate key assigned by the database on insert
pub type Id = i32;
pub type Time = DateTime<Utc>;
pub type Date = NaiveDate;
