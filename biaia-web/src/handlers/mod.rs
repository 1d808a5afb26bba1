//! HTTP request handlers organized by functionality

pub mod api;
pub mod pages;

pub use api::{not_found, places_search};
pub use pages::home_page;
