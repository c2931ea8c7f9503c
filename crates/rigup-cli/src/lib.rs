//! Library surface of the rigup CLI, split out so integration tests can
//! exercise command plumbing directly.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;
