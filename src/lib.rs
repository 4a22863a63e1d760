// Library surface shared by the binary and the integration tests.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod judge;
pub mod kana;
pub mod pool;
pub mod runtime;
pub mod selection;
pub mod session;
pub mod targets;
pub mod ui;
pub mod vocab;

pub use error::{Error, Result};
