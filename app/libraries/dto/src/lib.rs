pub mod auth;
pub mod booking;
pub mod contact;
pub mod settings;
pub mod tour;
pub mod validate;
