//! Filters for tokens.

mod annotated_form;
mod plain;

pub use annotated_form::AnnotatedFormFilter;
pub use plain::{plain, PlainFilter};
