pub mod auth;
pub mod booking;
pub mod event;
pub mod group;
pub mod health;
pub mod user;
