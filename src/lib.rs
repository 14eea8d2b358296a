pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod loc;
pub mod meta;
pub mod model;
pub mod profile;
pub mod projects;
pub mod theme;
pub mod tui;
pub mod util;

pub use error::{FolioError, Result};
