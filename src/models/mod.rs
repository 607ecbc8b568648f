//! Domain models

pub mod movie;
pub mod user;
