// ABOUTME: Thin entry point: parses CLI args, then either runs a script or starts the REPL

mod builtins;
mod config;
mod env;
mod error;
mod eval;
mod parser;
mod reader;
mod repl;
mod value;

use clap::Parser;
use env::Environment;
use std::path::PathBuf;

/// Lisb: an interactive interpreter for a small homoiconic Lisp-family
/// expression language.
#[derive(Parser, Debug)]
#[command(name = "lisb")]
#[command(version = config::VERSION)]
#[command(about = "An interactive interpreter for the Lisb expression language")]
struct CliArgs {
    /// Script file to execute. If omitted, starts the interactive REPL.
    #[arg(value_name = "FILE")]
    script: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let env = Environment::new();
    builtins::register_builtins(&env);

    match args.script {
        Some(path) => repl::run_script(&path, env),
        None => repl::run(env),
    }
}
