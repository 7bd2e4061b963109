
mod client;
mod preference;
mod scenario;
mod user;
