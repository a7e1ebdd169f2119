// file: src/commands/link.rs
// version: 1.0.1
// guid: f0a72d58-c316-49be-85d4-1e98b3c60a27

//! `link ?-sym? srcpath destpath` — create a hard or symbolic link.
//!
//! Both paths get home-directory and variable expansion before the OS call;
//! an expansion failure is reported as its own error class, never as a
//! link-creation failure.

use super::CommandContext;
use crate::interp::{expand_path, Value};
use crate::{CommandError, Result};

pub const NAME: &str = "link";

pub fn run(ctx: &mut CommandContext, argv: &[String]) -> Result<Value> {
    if argv.len() < 2 || argv.len() > 3 {
        return Err(CommandError::wrong_args(NAME, "?-sym? srcpath destpath"));
    }

    let symbolic = argv.len() == 3;
    if symbolic && argv[0] != "-sym" {
        return Err(CommandError::argument(format!(
            "invalid option, expected: \"-sym\", got: {}",
            argv[0]
        )));
    }

    let src = expand_path(&argv[argv.len() - 2])?;
    let dest = expand_path(&argv[argv.len() - 1])?;

    if symbolic {
        ctx.os.sym_link(&src, &dest)?;
    } else {
        ctx.os.hard_link(&src, &dest)?;
    }
    Ok(Value::Empty)
}
