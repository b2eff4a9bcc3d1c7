//! Detection and installation of the Foundry Local runtime.
//!
//! - [`manager`] - The memoizing [`InstallManager`]
//! - [`state`] - Probe state and install outcome types

pub mod manager;
pub mod state;

pub use manager::InstallManager;
pub use state::{InstallOutcome, InstallState};
