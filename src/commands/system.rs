// file: src/commands/system.rs
// version: 1.0.0
// guid: 48b6e9d1-0c35-4f7a-8e12-d97a40c6b385

//! `system command` — run a command line through the shell and wait.
//!
//! Stdio is inherited; nothing is captured. The result is the child's exit
//! code. Abnormal termination (a signal) and a shell that could not find
//! the command are errors, never coerced into a numeric exit code.

use super::CommandContext;
use crate::interp::Value;
use crate::{CommandError, Result};

pub const NAME: &str = "system";

pub fn run(ctx: &mut CommandContext, argv: &[String]) -> Result<Value> {
    if argv.len() != 1 {
        return Err(CommandError::wrong_args(NAME, "command"));
    }
    let exit_code = ctx.os.run_shell(&argv[0])?;
    Ok(Value::Int(exit_code as i64))
}
