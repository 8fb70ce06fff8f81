pub mod crypto;
pub mod jwt;
pub mod query;
pub mod time;
