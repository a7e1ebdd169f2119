// file: src/main.rs
// version: 1.0.1
// guid: 27c94e6a-b1d8-4f05-93c2-e80a56d41f7b

//! posix-cmds - Main entry point

use clap::Parser;
use posix_cmds::{
    cli::{args::Cli, commands},
    logging::logger,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    logger::init_logger(cli.verbose, cli.quiet);

    match commands::execute(&cli.words, cli.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("posix-cmds: {e}");
            ExitCode::FAILURE
        }
    }
}
