// file: src/commands/host_info.rs
// version: 1.1.0
// guid: da52c791-38b4-4e0f-96a8-70c3f5e2d814

//! `host_info option host` — name-service queries about one host.
//!
//! Sub-commands: `addresses`, `address_name`, `official_name`, `aliases`.
//! A dotted-quad host argument resolves by address, anything else by name.
//! `address_name` returns the canonical name once per resolved address, a
//! long-standing quirk of this surface that callers depend on.

use super::CommandContext;
use crate::interp::Value;
use crate::{CommandError, Result};

pub const NAME: &str = "host_info";

const ADDRESSES: &str = "addresses";
const ADDRESS_NAME: &str = "address_name";
const OFFICIAL_NAME: &str = "official_name";
const ALIASES: &str = "aliases";

pub fn run(ctx: &mut CommandContext, argv: &[String]) -> Result<Value> {
    if argv.is_empty() {
        return Err(CommandError::wrong_args(NAME, "option ..."));
    }

    let sub_command = argv[0].as_str();
    if ![ADDRESSES, ADDRESS_NAME, OFFICIAL_NAME, ALIASES].contains(&sub_command) {
        return Err(CommandError::argument(format!(
            "invalid option \"{sub_command}\", expected one of \"{ADDRESSES}\", \
             \"{ADDRESS_NAME}\", \"{OFFICIAL_NAME}\" or \"{ALIASES}\""
        )));
    }
    if argv.len() != 2 {
        return Err(CommandError::wrong_args(
            &format!("{NAME} {sub_command}"),
            "host",
        ));
    }

    let record = ctx.os.lookup_host(&argv[1])?;
    Ok(match sub_command {
        ADDRESSES => Value::List(record.addresses),
        ADDRESS_NAME => {
            Value::List(vec![record.canonical_name; record.addresses.len()])
        }
        OFFICIAL_NAME => Value::Str(record.canonical_name),
        ALIASES => Value::List(record.aliases),
        _ => unreachable!(),
    })
}
