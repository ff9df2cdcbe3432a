pub mod common;
pub mod menu;
