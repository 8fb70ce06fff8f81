pub mod auth;
pub mod docs;
pub mod extract;
pub mod health;
pub mod option;
pub mod question;
pub mod response;
pub mod survey;
