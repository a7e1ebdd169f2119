// file: src/cli/commands.rs
// version: 1.2.0
// guid: b91d45f0-7c28-4e63-a057-3f8e60d2c1a9

//! Dispatch of CLI invocations through the command table

use crate::commands::{CommandContext, CommandSet};
use crate::interp::ChannelRegistry;
use crate::os::RealOs;
use crate::Result;
use std::io::Write;
use tracing::debug;

/// Run one command invocation against the real OS and print its result.
///
/// The first word selects the binding; the rest are passed through as the
/// command's argument list, exactly as an embedding interpreter would.
pub fn execute(words: &[String], json: bool) -> Result<()> {
    let (name, argv) = words
        .split_first()
        .expect("clap guarantees at least one word");
    debug!("dispatching command: {name}");

    let os = RealOs::new();
    let mut channels = ChannelRegistry::new();
    let mut ctx = CommandContext {
        os: &os,
        channels: &mut channels,
    };

    let value = CommandSet::standard().invoke(name, &mut ctx, argv)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        writeln!(out, "{}", serde_json::to_string(&value)?).ok();
    } else if !value.is_empty() {
        writeln!(out, "{value}").ok();
    }
    Ok(())
}
