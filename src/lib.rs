pub mod archive;
pub mod commands;
pub mod error;
pub mod package;
pub mod runtime;
