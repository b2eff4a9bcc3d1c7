//! Child-process execution for package-manager invocations.

pub mod command;
pub mod mock;

pub use command::{CommandResult, CommandSpec, ProcessRunner, SystemRunner};
pub use mock::RecordingRunner;
