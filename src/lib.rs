// file: src/lib.rs
// version: 1.1.0
// guid: 8e2d50b9-4c17-4a83-b6f0-d591c3e78a24

//! # posix-cmds
//!
//! Interpreter-style command bindings over POSIX facilities: interval
//! timers, filesystem links, scheduling priority, process suspension,
//! filesystem sync, subprocess execution, the file-creation mask, and DNS
//! host lookups.
//!
//! Each binding validates its argument words, makes a single call through
//! the OS facade, and translates the result or errno into a typed value.
//! The bindings are stateless and independent; the only shared state is
//! process-global OS state (timer, priority, umask), where the OS primitive
//! itself is the synchronization boundary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod interp;
pub mod logging;
pub mod os;

pub use error::{CommandError, Result};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
