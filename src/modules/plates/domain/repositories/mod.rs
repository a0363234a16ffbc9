mod plate_repository;

pub use plate_repository::*;
