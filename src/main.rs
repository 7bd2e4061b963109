use std::{env, process};

use log::error;

use statement_api::{db, demo};

fn main() {
	if env::var("RUST_LOG").is_err() {
		env::set_var("RUST_LOG", "info");
	}
	pretty_env_logger::init();

	let pool = match db::pg_pool() {
		Ok(pool) => pool,
		Err(e) => {
			error!("{}", e);
			process::exit(1);
		}
	};

	if let Err(e) = demo::run(pool) {
		error!("demo aborted: {}", e);
		process::exit(1);
	}
}
