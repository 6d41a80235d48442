pub mod config;
pub mod error;
pub mod fetch;
pub mod llm;
pub mod pipeline;
pub mod recipe;
pub mod server;
pub mod video;
pub mod vision;

pub use error::{Error, Result};
