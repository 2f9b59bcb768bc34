// Core text utilities shared by every rendering path

pub mod text;

pub use text::{escape_html, truncate_chars};
