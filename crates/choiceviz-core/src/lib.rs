pub mod config;
pub mod logging;

pub mod bundle;
pub mod cache;
pub mod details;
pub mod error;
pub mod fetch;
pub mod page;
pub mod render;
pub mod source;
pub mod url_model;
