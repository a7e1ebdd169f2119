// file: src/interp/value.rs
// version: 1.1.0
// guid: 7b2e94cf-0d31-4a8e-b6f5-2c9e81d4a703

//! Result value representation and typed argument coercion.
//!
//! Commands receive their arguments as plain strings (the interpreter's word
//! list) and produce a single [`Value`]. Coercion failures are argument
//! errors that name the command and the offending literal, and are always
//! raised before any OS call happens.

use crate::{CommandError, Result};
use serde::Serialize;
use std::fmt;

/// A single well-typed command result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// No result (successful commands with nothing to report)
    Empty,
    Int(i64),
    Real(f64),
    Str(String),
    List(Vec<String>),
}

impl Value {
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => Ok(()),
            Value::Int(n) => write!(f, "{n}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::List(items) => write!(f, "{}", items.join(" ")),
        }
    }
}

/// Coerce a word to a signed integer
pub fn int_arg(command: &str, word: &str) -> Result<i64> {
    word.parse::<i64>().map_err(|_| {
        CommandError::argument(format!("{command}: expected integer but got \"{word}\""))
    })
}

/// Coerce a word to a real number
pub fn real_arg(command: &str, word: &str) -> Result<f64> {
    word.parse::<f64>()
        .ok()
        .filter(|r| r.is_finite())
        .ok_or_else(|| {
            CommandError::argument(format!(
                "{command}: expected floating-point number but got \"{word}\""
            ))
        })
}
