pub mod cli;
pub mod config;
pub mod storage;
pub mod store;

pub use config::Config;
pub use store::ListStore;
