pub mod args;
pub mod commands;
mod config;
mod error;
pub mod geo;
pub mod ledger;
pub mod model;
pub mod storage;
pub mod translate;
pub mod trip;
mod utils;
pub mod weather;

pub use config::Config;
pub use error::Error;
pub use error::Result;
pub use storage::{FileStore, KvStore};
