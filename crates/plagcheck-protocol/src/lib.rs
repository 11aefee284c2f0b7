pub mod checker;
pub mod config;
