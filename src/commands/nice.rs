// file: src/commands/nice.rs
// version: 1.0.0
// guid: 2b9d47e0-8a6f-4351-bc18-74e09d2f5a86

//! `nice ?priorityincr?` — read or adjust the process scheduling priority.
//!
//! With no argument the current priority is returned. With an increment the
//! priority is adjusted relative to its current value (not set absolutely)
//! and the new value is returned.

use super::CommandContext;
use crate::interp::{int_arg, Value};
use crate::{CommandError, Result};

pub const NAME: &str = "nice";

pub fn run(ctx: &mut CommandContext, argv: &[String]) -> Result<Value> {
    if argv.len() > 1 {
        return Err(CommandError::wrong_args(NAME, "?priorityincr?"));
    }

    if argv.is_empty() {
        return Ok(Value::Int(ctx.os.get_priority()? as i64));
    }

    let incr = int_arg(NAME, &argv[0])?;
    let incr = i32::try_from(incr).map_err(|_| {
        CommandError::argument(format!("{NAME}: priority increment out of range: {incr}"))
    })?;
    Ok(Value::Int(ctx.os.adjust_priority(incr)? as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::invoke_with;
    use crate::os::testing::FakeOs;

    #[test]
    fn test_query_returns_current_priority() {
        let os = FakeOs::new();
        *os.priority.lock().unwrap() = 4;
        assert_eq!(invoke_with(&os, NAME, &[]).unwrap(), Value::Int(4));
    }

    #[test]
    fn test_zero_increment_matches_bare_query() {
        let os = FakeOs::new();
        *os.priority.lock().unwrap() = 7;
        let queried = invoke_with(&os, NAME, &[]).unwrap();
        let adjusted = invoke_with(&os, NAME, &["0"]).unwrap();
        assert_eq!(queried, adjusted);
    }

    #[test]
    fn test_increment_is_relative() {
        let os = FakeOs::new();
        *os.priority.lock().unwrap() = 5;
        assert_eq!(invoke_with(&os, NAME, &["3"]).unwrap(), Value::Int(8));
        assert_eq!(invoke_with(&os, NAME, &["-2"]).unwrap(), Value::Int(6));
    }

    #[test]
    fn test_insufficient_privilege_surfaces_os_error() {
        let os = FakeOs {
            priority_denied: true,
            ..FakeOs::new()
        };
        let err = invoke_with(&os, NAME, &["-5"]).unwrap_err();
        assert_eq!(err.os_code(), Some(libc::EACCES));
    }

    #[test]
    fn test_non_integer_argument() {
        let os = FakeOs::new();
        let err = invoke_with(&os, NAME, &["fast"]).unwrap_err();
        assert_eq!(err.to_string(), "nice: expected integer but got \"fast\"");
    }
}
