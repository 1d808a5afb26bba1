//! HTML templates and page generation

pub mod base;
pub mod home;

pub use base::{DocumentMetadata, base_document};
pub use home::home_content;
