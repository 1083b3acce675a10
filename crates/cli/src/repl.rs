//! REPL (interactive) and pipe (line-by-line stdin) modes.

use std::io::{self, BufRead};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::commands::build_line_parser;
use crate::format::{format_error, format_output, OutputMode};
use crate::parse::{parse_line, CliAction, MetaCommand};
use crate::state::SessionState;

const PROMPT: &str = "chronokv> ";

/// What the caller should do after one line.
enum Flow {
    Continue,
    Failed,
    Quit,
}

pub fn run_repl(state: &mut SessionState, mode: OutputMode) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("(error) Failed to start line editor: {}", e);
            return;
        }
    };

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = editor.add_history_entry(line.as_str()) {
                        tracing::debug!(error = %e, "failed to record history entry");
                    }
                }
                match run_line(state, &line, mode, true) {
                    Flow::Quit => break,
                    Flow::Continue | Flow::Failed => {}
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("(error) {}", e);
                break;
            }
        }
    }
}

/// Execute stdin line by line. Returns 1 if any line failed.
pub fn run_pipe(state: &mut SessionState, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let mut exit_code = 0;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("(error) {}", e);
                return 1;
            }
        };
        match run_line(state, &line, mode, false) {
            Flow::Continue => {}
            Flow::Failed => exit_code = 1,
            Flow::Quit => break,
        }
    }
    exit_code
}

fn run_line(state: &mut SessionState, line: &str, mode: OutputMode, interactive: bool) -> Flow {
    let action = match parse_line(line) {
        Ok(Some(action)) => action,
        Ok(None) => return Flow::Continue,
        Err(e) => {
            eprintln!("(error) {}", e);
            return Flow::Failed;
        }
    };

    match action {
        CliAction::Execute(cmd) => match state.execute(cmd) {
            Ok(output) => {
                let formatted = format_output(&output, mode);
                if !formatted.is_empty() {
                    println!("{}", formatted);
                }
                Flow::Continue
            }
            Err(e) => {
                eprintln!("{}", format_error(&e, mode));
                Flow::Failed
            }
        },
        CliAction::Meta(MetaCommand::Quit) => Flow::Quit,
        CliAction::Meta(MetaCommand::Clear) => {
            if interactive {
                // ANSI: clear screen, cursor home
                print!("\x1b[2J\x1b[H");
            }
            Flow::Continue
        }
        CliAction::Meta(MetaCommand::Help { command }) => {
            print_help(command.as_deref());
            Flow::Continue
        }
    }
}

fn print_help(command: Option<&str>) {
    let mut parser = build_line_parser();
    match command {
        Some(name) => match parser.find_subcommand_mut(name) {
            Some(sub) => println!("{}", sub.render_help()),
            None => eprintln!("(error) Unknown command: {}", name),
        },
        None => {
            for sub in parser.get_subcommands() {
                let about = sub.get_about().map(|s| s.to_string()).unwrap_or_default();
                println!("  {:<10} {}", sub.get_name(), about);
            }
            let meta = [
                ("help", "Show help, or `help COMMAND` for one command"),
                ("clear", "Clear the screen"),
                ("quit", "Leave the session"),
            ];
            for (name, about) in meta {
                println!("  {:<10} {}", name, about);
            }
        }
    }
}
