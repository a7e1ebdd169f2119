// file: src/commands/umask.rs
// version: 1.0.1
// guid: 7a45d2c8-93e1-4b60-af79-5c08e1b3d946

//! `umask ?octalmask?` — read or set the file-creation mask.
//!
//! The query form probes with a mask of 0 and immediately restores the
//! original, so the mask is never left changed by a read. The result is
//! formatted in octal without a leading zero, the surface's long-standing
//! formatting.

use super::CommandContext;
use crate::interp::Value;
use crate::{CommandError, Result};

pub const NAME: &str = "umask";

pub fn run(ctx: &mut CommandContext, argv: &[String]) -> Result<Value> {
    if argv.len() > 1 {
        return Err(CommandError::wrong_args(NAME, "?octalmask?"));
    }

    if argv.is_empty() {
        let mask = ctx.os.set_umask(0);
        ctx.os.set_umask(mask);
        return Ok(Value::Str(format!("{mask:o}")));
    }

    let word = &argv[0];
    let mask = u32::from_str_radix(word, 8).map_err(|_| {
        CommandError::argument(format!("{NAME}: expected octal number, got: \"{word}\""))
    })?;
    ctx.os.set_umask(mask);
    Ok(Value::Empty)
}
