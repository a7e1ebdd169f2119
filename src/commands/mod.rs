// file: src/commands/mod.rs
// version: 1.3.0
// guid: 84f1c2ab-7d59-4e08-9c36-b02a5f7d81e4

//! The POSIX command bindings.
//!
//! Each binding is a stateless handler: validate the argument words, make a
//! single call through the OS facade, translate the result (or failure)
//! into a [`Value`]. No handler depends on another; the only shared state
//! is the process-global OS state behind the facade.

pub mod alarm;
pub mod host_info;
pub mod link;
pub mod nice;
pub mod sleep;
pub mod sync;
pub mod system;
pub mod umask;

use crate::interp::{ChannelRegistry, Value};
use crate::os::OsFacade;
use crate::{CommandError, Result};
use std::collections::HashMap;

/// Per-invocation context handed to every handler
pub struct CommandContext<'a> {
    pub os: &'a dyn OsFacade,
    pub channels: &'a mut ChannelRegistry,
}

/// A command handler over the interpreter's word list
pub type Handler = fn(&mut CommandContext, &[String]) -> Result<Value>;

/// Name-to-handler table for the full command surface
pub struct CommandSet {
    table: HashMap<&'static str, Handler>,
}

impl CommandSet {
    /// The standard eight bindings
    pub fn standard() -> Self {
        let mut table: HashMap<&'static str, Handler> = HashMap::new();
        table.insert(alarm::NAME, alarm::run);
        table.insert(link::NAME, link::run);
        table.insert(nice::NAME, nice::run);
        table.insert(sleep::NAME, sleep::run);
        table.insert(sync::NAME, sync::run);
        table.insert(system::NAME, system::run);
        table.insert(umask::NAME, umask::run);
        table.insert(host_info::NAME, host_info::run);
        Self { table }
    }

    /// Registered command names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.table.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch one invocation
    pub fn invoke(&self, name: &str, ctx: &mut CommandContext, argv: &[String]) -> Result<Value> {
        let handler = self
            .table
            .get(name)
            .ok_or_else(|| CommandError::argument(format!("invalid command name \"{name}\"")))?;
        handler(ctx, argv)
    }
}
