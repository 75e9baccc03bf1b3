//! Line-oriented REPL over schemelet; each line is one expression.
//!
//! Run as:                 `RUST_LOG=debug cargo run --example repl`.
//! Evaluate once and exit: `cargo run --example repl -- -e "(+ 1 2)"`.

use clap::{Arg, Command};
use log::{info, LevelFilter};
use rustyline::error::ReadlineError;
use rustyline::Editor;

use schemelet::error::Error;
use schemelet::sexp::HeapSexp;
use schemelet::token::cli_helper::CliHelper;


fn main() -> Result<(), String> {
    // Setup logging.
    env_logger::Builder::from_default_env()
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = Command::new("Schemelet REPL")
        .version("0.1")
        .about("Reads, evaluates and prints one expression per line")
        .arg(
            Arg::new("expr")
                .short('e')
                .long("expr")
                .takes_value(true)
                .help("Evaluate EXPR, print the result and exit"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Print brackets without colour"),
        )
        .get_matches();

    if matches.is_present("no-color") {
        colored::control::set_override(false);
    }

    if let Some(expr) = matches.value_of("expr") {
        let result = schemelet::eval_str(expr);
        print_result(&result);
        return result.map(|_| ()).map_err(|err| err.to_string());
    }

    let mut editor = Editor::<CliHelper>::new();
    editor.set_helper(Some(CliHelper::new()));
    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                editor.add_history_entry(line.as_str());
                print_result(&schemelet::eval_str(&line));
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(format!("Reading line failed: {}", err)),
        }
    }

    info!("Exiting");
    Ok(())
}

fn print_result(result: &Result<HeapSexp, Error>) {
    match result {
        Ok(val) => println!("-> {}", val.colored()),
        Err(err) => println!("{}", err),
    };
    println!("");
}
