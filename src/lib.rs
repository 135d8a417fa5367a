pub mod config;
pub mod elapsed;
pub mod model;
pub mod storage;
pub mod store;
pub mod transfer;

#[cfg(feature = "tui")]
pub mod tui;
