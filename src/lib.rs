pub mod config;
pub mod error;
pub mod grid;
pub mod presenter;
pub mod snapshot;
pub mod source;
pub mod table;
