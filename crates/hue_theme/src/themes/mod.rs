//! Built-in themes

mod standard;

pub use standard::{latte, mocha, StandardTheme};
