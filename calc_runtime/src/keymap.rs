//! Keyboard surface: maps key presses to engine commands.
//!
//! Key names follow browser `KeyboardEvent.key` values, so `Enter`,
//! `Backspace` and `Escape` are spelled the same way a page would see them.

use calc_engine::commands::Command;
use calc_engine::domain::Operation;
use tracing::trace;

/// Map a single key to its command. Unknown keys map to `None`.
pub fn command_for_key(key: &str) -> Option<Command> {
    let command = match key {
        "." => Command::DecimalPoint,
        "+" => Command::Operator(Operation::Add),
        "-" => Command::Operator(Operation::Subtract),
        "*" | "×" => Command::Operator(Operation::Multiply),
        "/" | "÷" => Command::Operator(Operation::Divide),
        "Enter" | "=" => Command::Equals,
        "Backspace" => Command::Delete,
        "Escape" => Command::Clear,
        "±" => Command::ToggleSign,
        _ => {
            let mut chars = key.chars();
            let digit = match (chars.next(), chars.next()) {
                (Some(c), None) => c.to_digit(10)?,
                _ => return None,
            };
            Command::Digit(digit as u8)
        }
    };
    Some(command)
}

/// Split a line of key presses into keys.
///
/// Each character is one key; a named key is written `<Name>`, e.g.
/// `12<Backspace>3<Enter>`. Whitespace separates nothing and is dropped.
pub fn tokenize_keys(line: &str) -> Vec<String> {
    let mut keys = Vec::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        if c == '<' {
            let name: String = chars.clone().take_while(|&n| n != '>').collect();
            let closed = chars.clone().nth(name.chars().count()) == Some('>');
            if closed && !name.is_empty() {
                for _ in 0..=name.chars().count() {
                    chars.next();
                }
                keys.push(name);
                continue;
            }
        }
        keys.push(c.to_string());
    }

    keys
}

/// Tokenize a line and map every key, skipping keys with no command.
pub fn parse_keys(line: &str) -> Vec<Command> {
    tokenize_keys(line)
        .into_iter()
        .filter_map(|key| {
            let command = command_for_key(&key);
            if command.is_none() {
                trace!(key = %key, "ignoring unmapped key");
            }
            command
        })
        .collect()
}
