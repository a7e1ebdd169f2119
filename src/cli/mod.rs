// file: src/cli/mod.rs
// version: 1.0.0
// guid: 1c7f92e4-d058-4b3a-8f61-24a9c5e70db3

//! CLI argument parsing and dispatch

pub mod args;
pub mod commands;
