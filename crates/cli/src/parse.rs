//! ArgMatches / input line → StoreCommand/MetaCommand conversion.
//!
//! - Store commands → `CliAction::Execute(StoreCommand)`
//! - REPL meta-commands → `CliAction::Meta`

use chronokv::{Timestamp, Ttl};
use clap::ArgMatches;

use crate::commands::build_line_parser;

/// The result of parsing user input.
#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    /// A store command to execute against the session store.
    Execute(StoreCommand),
    /// A REPL-only meta-command.
    Meta(MetaCommand),
}

/// One store operation, fully parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCommand {
    Set {
        t: Timestamp,
        key: String,
        field: String,
        value: String,
    },
    SetTtl {
        t: Timestamp,
        key: String,
        field: String,
        value: String,
        ttl: Ttl,
    },
    Get {
        t: Timestamp,
        key: String,
        field: String,
    },
    Delete {
        t: Timestamp,
        key: String,
        field: String,
    },
    Cas {
        t: Timestamp,
        key: String,
        field: String,
        expected: i64,
    },
    CasTtl {
        t: Timestamp,
        key: String,
        field: String,
        expected: i64,
        new_value: i64,
        ttl: Ttl,
    },
    Cad {
        t: Timestamp,
        key: String,
        field: String,
        expected: i64,
    },
    Scan {
        t: Timestamp,
        key: String,
    },
    ScanPrefix {
        t: Timestamp,
        key: String,
        prefix: String,
    },
    History {
        key: String,
        field: String,
    },
    Info,
}

/// REPL meta-commands.
#[derive(Debug, PartialEq, Eq)]
pub enum MetaCommand {
    Help {
        command: Option<String>,
    },
    Quit,
    Clear,
}

/// Check for REPL meta-commands before delegating to clap.
///
/// Returns `Some(MetaCommand)` if the line is a meta-command, `None` otherwise.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    let mut parts = line.split_whitespace();
    let cmd = parts.next()?;

    match cmd {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "clear" => Some(MetaCommand::Clear),
        "help" => {
            let command = parts.next().map(str::to_string);
            Some(MetaCommand::Help { command })
        }
        _ => None,
    }
}

/// Parse one REPL/pipe line.
///
/// Returns `Ok(None)` for blank lines and `#` comments. Quoting follows
/// shell rules, so `set 1 k f "two words"` stores a value with a space.
pub fn parse_line(line: &str) -> Result<Option<CliAction>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    if let Some(meta) = check_meta_command(trimmed) {
        return Ok(Some(CliAction::Meta(meta)));
    }

    let words = shlex::split(trimmed).ok_or_else(|| "Unbalanced quotes".to_string())?;
    let matches = build_line_parser()
        .try_get_matches_from(words)
        .map_err(|e| e.render().to_string().trim_end().to_string())?;
    matches_to_action(&matches).map(Some)
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    let command = match sub_name {
        "set" => StoreCommand::Set {
            t: int(m, "t")?,
            key: text(m, "key")?,
            field: text(m, "field")?,
            value: text(m, "value")?,
        },
        "setttl" => StoreCommand::SetTtl {
            t: int(m, "t")?,
            key: text(m, "key")?,
            field: text(m, "field")?,
            value: text(m, "value")?,
            ttl: int(m, "ttl")?,
        },
        "get" => StoreCommand::Get {
            t: int(m, "t")?,
            key: text(m, "key")?,
            field: text(m, "field")?,
        },
        "del" => StoreCommand::Delete {
            t: int(m, "t")?,
            key: text(m, "key")?,
            field: text(m, "field")?,
        },
        "cas" => StoreCommand::Cas {
            t: int(m, "t")?,
            key: text(m, "key")?,
            field: text(m, "field")?,
            expected: int(m, "expected")?,
        },
        "casttl" => StoreCommand::CasTtl {
            t: int(m, "t")?,
            key: text(m, "key")?,
            field: text(m, "field")?,
            expected: int(m, "expected")?,
            new_value: int(m, "new")?,
            ttl: int(m, "ttl")?,
        },
        "cad" => StoreCommand::Cad {
            t: int(m, "t")?,
            key: text(m, "key")?,
            field: text(m, "field")?,
            expected: int(m, "expected")?,
        },
        "scan" => StoreCommand::Scan {
            t: int(m, "t")?,
            key: text(m, "key")?,
        },
        "scanp" => StoreCommand::ScanPrefix {
            t: int(m, "t")?,
            key: text(m, "key")?,
            prefix: text(m, "prefix")?,
        },
        "history" => StoreCommand::History {
            key: text(m, "key")?,
            field: text(m, "field")?,
        },
        "info" => StoreCommand::Info,
        other => return Err(format!("Unknown command: {}", other)),
    };
    Ok(CliAction::Execute(command))
}

// =========================================================================
// Argument helpers
// =========================================================================

fn text(m: &ArgMatches, name: &str) -> Result<String, String> {
    m.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| format!("Missing argument: {}", name))
}

fn int(m: &ArgMatches, name: &str) -> Result<i64, String> {
    m.get_one::<i64>(name)
        .copied()
        .ok_or_else(|| format!("Missing argument: {}", name))
}
