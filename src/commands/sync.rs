// file: src/commands/sync.rs
// version: 1.0.1
// guid: 9d30c8f2-517b-4e6a-b5d9-042e81fa6c37

//! `sync ?filehandle?` — flush filesystem buffers.
//!
//! The bare form schedules all buffers system-wide and has no error path.
//! With a handle, the named channel must be open for writing: its
//! interpreter-level buffer is flushed first, then the descriptor's data is
//! committed to stable storage.

use super::CommandContext;
use crate::interp::Value;
use crate::{CommandError, Result};

pub const NAME: &str = "sync";

pub fn run(ctx: &mut CommandContext, argv: &[String]) -> Result<Value> {
    if argv.len() > 1 {
        return Err(CommandError::wrong_args(NAME, "?filehandle?"));
    }

    if argv.is_empty() {
        ctx.os.sync_all();
        return Ok(Value::Empty);
    }

    let channel = ctx.channels.writable(&argv[0])?;
    channel.flush().map_err(|e| CommandError::os("flush", e))?;
    let fd = channel.raw_fd();
    ctx.os.fsync(fd)?;
    Ok(Value::Empty)
}
