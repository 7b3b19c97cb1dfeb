// ABOUTME: Parses interactive CLI lines into workflow commands for the current step
// ABOUTME: Plain text in the input step is a meal description, other steps use short verbs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use food_logger::config::ConfigField;
use food_logger::models::Step;

/// One line of user input, interpreted for the current step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Leave the program
    Quit,
    /// Submit a meal description
    Describe(String),
    /// Confirm the parsed items
    Confirm,
    /// Back to the description
    Back,
    /// Remove a result by zero-based index
    Remove(usize),
    /// Start a new entry
    New,
    /// Show or hide micronutrients
    Micros(bool),
    /// Update a configuration field
    Set(ConfigField, String),
    /// Anything not understood in this step, with a hint
    Unknown(String),
}

/// Interpret a line for the given step
///
/// Settings verbs take a `:` prefix (`:set`, `:micros`, `:quit`). Outside the
/// input step the bare verbs work as well; in the input step a bare first
/// word is part of the meal description, except a lone `quit` or `exit`.
pub fn parse(line: &str, step: Step) -> Command {
    let line = line.trim();
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));
    let verb = verb.to_lowercase();

    if let Some(global) = verb.strip_prefix(':') {
        return parse_global(global, rest)
            .unwrap_or_else(|| Command::Unknown(format!("Unknown command ':{global}'.")));
    }
    if step == Step::Input {
        return match (verb.as_str(), rest) {
            ("quit" | "exit", "") => Command::Quit,
            _ => Command::Describe(line.to_owned()),
        };
    }
    if let Some(command) = parse_global(&verb, rest) {
        return command;
    }

    match (verb.as_str(), step) {
        ("y" | "yes", Step::Verify) => Command::Confirm,
        ("b" | "back", Step::Verify) => Command::Back,
        ("remove" | "rm", Step::Results) => match rest.parse::<usize>() {
            Ok(n) if n >= 1 => Command::Remove(n - 1),
            _ => Command::Unknown("Usage: remove <n> (n starts at 1)".into()),
        },
        ("new", Step::Results) => Command::New,
        (_, Step::Results) => {
            Command::Unknown("Type remove <n>, micros on|off, new, or quit.".into())
        }
        _ => Command::Unknown("Type y to confirm or b to go back.".into()),
    }
}

fn parse_global(verb: &str, rest: &str) -> Option<Command> {
    match verb {
        "quit" | "exit" => Some(Command::Quit),
        "micros" => Some(match rest {
            "on" => Command::Micros(true),
            "off" => Command::Micros(false),
            _ => Command::Unknown("Usage: micros on|off".into()),
        }),
        "set" => Some(parse_set(rest)),
        _ => None,
    }
}

fn parse_set(rest: &str) -> Command {
    let Some((field, value)) = rest.split_once(char::is_whitespace) else {
        return Command::Unknown("Usage: :set <field> <value>".into());
    };
    match field.parse::<ConfigField>() {
        Ok(field) => Command::Set(field, value.trim().to_owned()),
        Err(e) => Command::Unknown(e.message),
    }
}
