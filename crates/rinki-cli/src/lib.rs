//! rinki CLI library: argument definitions, commands and logging setup.

pub mod cli;
pub mod commands;
pub mod logger;
