pub mod build;
pub mod config;
pub mod extract;
pub mod json;
pub mod time;
