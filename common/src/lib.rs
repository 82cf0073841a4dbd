pub mod entities;
pub mod inner_error;
pub mod repository;
