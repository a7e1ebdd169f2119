// file: src/commands/sleep.rs
// version: 1.0.0
// guid: c75e10b3-6f92-4ad8-9041-e28d7a3c5f19

//! `sleep seconds` — suspend the calling process.
//!
//! This is a deliberate blocking point: on a single-threaded host it stalls
//! the whole process for the duration. If a signal cuts the sleep short the
//! command returns early; callers must not assume the full duration
//! elapsed.

use super::CommandContext;
use crate::interp::{int_arg, Value};
use crate::{CommandError, Result};

pub const NAME: &str = "sleep";

pub fn run(ctx: &mut CommandContext, argv: &[String]) -> Result<Value> {
    if argv.len() != 1 {
        return Err(CommandError::wrong_args(NAME, "seconds"));
    }
    let seconds = int_arg(NAME, &argv[0])?;
    let seconds = u32::try_from(seconds).map_err(|_| {
        CommandError::argument(format!(
            "{NAME}: seconds must be a non-negative integer, got \"{}\"",
            argv[0]
        ))
    })?;
    ctx.os.sleep(seconds);
    Ok(Value::Empty)
}
