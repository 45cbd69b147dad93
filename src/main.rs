//! # stacker
//!
//! A small concatenative language with a live operator table.
//!

use clap::Parser;
use std::path::PathBuf;

mod term;

/// stacker evaluates stack programs. With no arguments it starts an
/// interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Program file to run.
    file: Option<PathBuf>,

    /// Program text to run instead of a file.
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,

    /// Print the final stack and registers after running a program.
    #[arg(long)]
    stack: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("STACKER_LOG", "warn"))
        .init();
    let args = Args::parse();
    let code = match (&args.file, &args.eval) {
        (Some(path), _) => term::run_file(path, args.stack),
        (None, Some(source)) => term::run_source(source, args.stack),
        (None, None) => term::main(),
    };
    std::process::exit(code);
}
