pub mod model;
pub mod permission;
pub mod relation;
pub mod repository;
