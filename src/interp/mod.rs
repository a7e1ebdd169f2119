// file: src/interp/mod.rs
// version: 1.0.0
// guid: 52da70c3-91b8-4e46-a2d9-37f615c08bea

//! Interpreter collaborator contract: typed values, argument coercion,
//! the open-channel registry, and path expansion.

pub mod channels;
pub mod expand;
pub mod value;

pub use channels::{Channel, ChannelDirection, ChannelRegistry};
pub use expand::expand_path;
pub use value::{int_arg, real_arg, Value};
