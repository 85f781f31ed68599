#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod commands;
pub mod logging;
pub mod parser;

pub use commands::{Commands, InferenceArgs, RagArgs};
pub use logging::init_tracing;
pub use parser::Cli;
