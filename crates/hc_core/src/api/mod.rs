//! External command interface for presentation layers.

pub mod json_api;

pub use json_api::{apply_command, process_command_json, CommandResponse, EngineCommand};
