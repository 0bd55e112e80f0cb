//! Domain layer - Date tokens and their expansion

pub mod date_token;

pub use date_token::{DateToken, ExpandedDate};
