pub mod admin_tours;
pub mod book;
pub mod bookings;
pub mod contact;
pub mod customers;
pub mod dashboard;
pub mod index;
pub mod login;
pub mod messages;
pub mod ping;
pub mod settings;
pub mod tours;
pub mod user;
