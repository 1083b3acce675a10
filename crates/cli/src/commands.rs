//! clap command tree.
//!
//! The same tree parses shell-mode arguments and REPL/pipe lines, so every
//! store command is available in every mode.

use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("chronokv")
        .about("In-memory versioned key/field store")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(false)
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Print results as JSON"),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .action(ArgAction::SetTrue)
                .global(true)
                .conflicts_with("json")
                .help("Print bare values without decoration"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Store configuration (TOML)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .default_value("warn")
                .help("Log filter for stderr (error, warn, info, debug, trace)"),
        )
        .subcommands(store_commands())
}

/// Parser for one REPL or pipe line (no binary name, no global flags).
pub fn build_line_parser() -> Command {
    Command::new("chronokv")
        .no_binary_name(true)
        .subcommand_required(true)
        .disable_help_subcommand(true)
        .disable_version_flag(true)
        .subcommands(store_commands())
}

/// Store commands, shared by the top-level CLI and the line parser.
pub fn store_commands() -> Vec<Command> {
    vec![
        Command::new("set")
            .about("Write a value that never expires")
            .arg(timestamp())
            .arg(text("key"))
            .arg(text("field"))
            .arg(text("value").allow_hyphen_values(true)),
        Command::new("setttl")
            .about("Write a value visible until t + ttl")
            .arg(timestamp())
            .arg(text("key"))
            .arg(text("field"))
            .arg(text("value").allow_hyphen_values(true))
            .arg(integer("ttl")),
        Command::new("get")
            .about("Read the value visible at t")
            .arg(timestamp())
            .arg(text("key"))
            .arg(text("field")),
        Command::new("del")
            .about("Delete a field at t")
            .arg(timestamp())
            .arg(text("key"))
            .arg(text("field")),
        Command::new("cas")
            .about("Re-write the current value if it equals EXPECTED")
            .arg(timestamp())
            .arg(text("key"))
            .arg(text("field"))
            .arg(integer("expected")),
        Command::new("casttl")
            .about("Write NEW with a TTL if the current value equals EXPECTED")
            .arg(timestamp())
            .arg(text("key"))
            .arg(text("field"))
            .arg(integer("expected"))
            .arg(integer("new"))
            .arg(integer("ttl")),
        Command::new("cad")
            .about("Delete a field if its current value equals EXPECTED")
            .arg(timestamp())
            .arg(text("key"))
            .arg(text("field"))
            .arg(integer("expected")),
        Command::new("scan")
            .about("List every visible field of a key at t")
            .arg(timestamp())
            .arg(text("key")),
        Command::new("scanp")
            .about("List visible fields of a key starting with PREFIX")
            .arg(timestamp())
            .arg(text("key"))
            .arg(text("prefix")),
        Command::new("history")
            .about("Show every entry written to a field, newest first")
            .arg(text("key"))
            .arg(text("field")),
        Command::new("info").about("Show store counters and configuration"),
    ]
}

fn text(name: &'static str) -> Arg {
    Arg::new(name).required(true)
}

fn integer(name: &'static str) -> Arg {
    Arg::new(name)
        .required(true)
        .allow_negative_numbers(true)
        .value_parser(value_parser!(i64))
}

fn timestamp() -> Arg {
    integer("t").value_name("T")
}
