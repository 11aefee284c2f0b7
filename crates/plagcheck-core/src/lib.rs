// Re-export types from the protocol crate so they are accessible via plagcheck_core::*
pub use plagcheck_protocol::checker;
pub use plagcheck_protocol::config;

// Internal Modules
pub mod analyzer;
pub mod consts;
pub mod detector;
pub mod error;
pub mod intake;
pub mod text;
pub mod view;
