//! Filters for tags.

mod database;
mod model;

pub use database::DatabaseTagFilter;
pub use model::ModelTagFilter;
