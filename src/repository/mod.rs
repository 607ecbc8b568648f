//! Repository layer: find/save primitives over PostgreSQL

pub mod movie_repo;
pub mod user_repo;

pub use movie_repo::MovieRepository;
pub use user_repo::UserRepository;
