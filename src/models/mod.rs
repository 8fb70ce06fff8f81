pub mod answer;
pub mod option;
pub mod question;
pub mod response;
pub mod survey;
pub mod user;
