// file: src/logging/mod.rs
// version: 1.0.0
// guid: 3e51a8c0-6b9d-4f27-91e3-c74d20f5b8a6

//! Logging initialization

pub mod logger;
