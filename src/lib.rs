//! Skiff: container runtimes in a lightweight virtual machine
//!
//! A per-profile VM environment launcher. The core is the settings resolver:
//! built-in defaults, the saved record, and the current invocation's explicit
//! flags are merged into the effective settings handed to the VM driver and
//! saved back after a successful start.

pub mod cli;
pub mod error;
pub mod logging;
pub mod platform;
pub mod profile;
pub mod provision;
pub mod settings;
pub mod store;
