//! chronokv CLI: a redis-cli style front end for the versioned store.
//!
//! Three modes:
//! - **Shell mode**: `chronokv [flags] COMMAND`, one command on a fresh store, then exit
//! - **REPL mode**: `chronokv [flags]`, interactive prompt (if stdin is a TTY)
//! - **Pipe mode**: `printf 'set 1 k f v\nget 1 k f\n' | chronokv`, line by line from stdin
//!
//! The store lives in memory, so state only carries across lines within one
//! REPL or pipe session.

mod commands;
mod config;
mod format;
mod parse;
mod repl;
mod state;

use std::io::IsTerminal;
use std::path::Path;
use std::process;

use chronokv::ChronoKv;

use commands::build_cli;
use format::{format_error, format_output, OutputMode};
use parse::{matches_to_action, CliAction};
use state::SessionState;

fn main() {
    let cli = build_cli();
    let matches = cli.get_matches();

    let level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or("warn");
    if let Err(e) = config::init_logging(level) {
        eprintln!("(error) {}", e);
        process::exit(1);
    }

    // Determine output mode
    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };

    let config_path = matches.get_one::<String>("config").map(Path::new);
    let store_config = match config::load_store_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    };

    let mut state = SessionState::new(ChronoKv::with_config(store_config));

    // Dispatch mode
    if matches.subcommand().is_some() {
        let exit_code = run_shell_mode(&matches, &mut state, output_mode);
        process::exit(exit_code);
    } else if std::io::stdin().is_terminal() {
        repl::run_repl(&mut state, output_mode);
    } else {
        let exit_code = repl::run_pipe(&mut state, output_mode);
        process::exit(exit_code);
    }
}

fn run_shell_mode(matches: &clap::ArgMatches, state: &mut SessionState, mode: OutputMode) -> i32 {
    match matches_to_action(matches) {
        Ok(CliAction::Execute(cmd)) => match state.execute_strict(cmd) {
            Ok(output) => {
                let formatted = format_output(&output, mode);
                if !formatted.is_empty() {
                    println!("{}", formatted);
                }
                0
            }
            Err(e) => {
                eprintln!("{}", format_error(&e, mode));
                1
            }
        },
        Ok(CliAction::Meta(_)) => {
            eprintln!("(error) Meta-commands are only available in REPL mode");
            1
        }
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    }
}
