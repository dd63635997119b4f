pub mod config;
pub mod error;
pub mod listing;
pub mod state;
