// file: src/cli/args.rs
// version: 1.1.0
// guid: 06e8b4d7-52f9-4a1c-83b6-9d0f72e5c318

//! Command line argument definitions

use clap::Parser;

#[derive(Parser)]
#[command(name = "posix-cmds")]
#[command(about = "Interpreter-style command bindings over POSIX facilities")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(short, long)]
    pub quiet: bool,

    /// Render the command result as JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Command name followed by its argument words
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND [ARGS...]"
    )]
    pub words: Vec<String>,
}
