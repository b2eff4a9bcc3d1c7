//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! generic over the process runner so they can be exercised without
//! spawning real package managers.

pub mod dispatcher;
pub mod install;
pub mod status;
pub mod up;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
