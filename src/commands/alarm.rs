// file: src/commands/alarm.rs
// version: 1.0.0
// guid: 61c8f3e9-24da-47b5-a90e-8d5b16c4f072

//! `alarm seconds` — arm the one-shot interval timer.
//!
//! Arming supersedes any previously scheduled delay from this facility;
//! zero cancels. The result is the previous remaining delay in seconds,
//! fractional precision preserved.

use super::CommandContext;
use crate::interp::{real_arg, Value};
use crate::{CommandError, Result};

pub const NAME: &str = "alarm";

pub fn run(ctx: &mut CommandContext, argv: &[String]) -> Result<Value> {
    if argv.len() != 1 {
        return Err(CommandError::wrong_args(NAME, "seconds"));
    }
    let seconds = real_arg(NAME, &argv[0])?;
    let previous = ctx.os.set_alarm(seconds)?;
    Ok(Value::Real(previous))
}
