pub mod cli;
pub mod config;
pub mod error;
pub mod lockfile;
pub mod logging;
pub mod report;
pub mod resolve;

pub use error::{LockfileError, Result};
