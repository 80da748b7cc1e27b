pub mod adapters;
pub mod clipboard;
pub mod config;
pub mod description;
pub mod error;
pub mod exec;
pub mod git;
pub mod github;
pub mod io;
pub mod paths;
pub mod ports;
pub mod probe;
pub mod prompt;
pub mod sequencer;
pub mod types;

pub use error::{Result, SolpushError};
