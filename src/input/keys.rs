//! Key script tokenization.
//!
//! A key script is a line of key presses such as `12 + 3 = = M+ AC`.
//! Digits may be run together; whitespace between tokens is optional.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

use super::Command;
use crate::calculator::OperatorTable;

lazy_static! {
    /// One key press: `M+`, a digit or point, a word (`AC`, `Enter`, ...),
    /// or any other single non-space character (operator glyphs, `=`).
    static ref KEY_TOKEN: Regex = Regex::new(r"(?i:m\+)|[0-9.]|[A-Za-z]+|\S").unwrap();
}

/// Split a key script into commands.
///
/// Words are matched case-insensitively: `AC`, `C`, `Esc` and `Escape`
/// clear, `M+` adds to memory, `Enter` evaluates. Any other token must be a
/// symbol known to `operators`; unknown tokens are skipped.
pub fn tokenize(script: &str, operators: &OperatorTable) -> Vec<Command> {
    KEY_TOKEN
        .find_iter(script)
        .filter_map(|m| {
            let token = m.as_str();
            let command = command_for(token, operators);
            if command.is_none() {
                warn!(token, "skipping unrecognised key");
            }
            command
        })
        .collect()
}

fn command_for(token: &str, operators: &OperatorTable) -> Option<Command> {
    let command = match token.to_ascii_lowercase().as_str() {
        "ac" | "c" | "esc" | "escape" => Command::Clear,
        "m+" => Command::MemoryAdd,
        "enter" | "=" => Command::Equals,
        _ => match Command::from_label(token) {
            Command::Operator(symbol) if operators.resolve(&symbol).is_none() => return None,
            command => command,
        },
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Calculator, Operator};
    use crate::input::apply_all;

    fn run(script: &str) -> String {
        let mut calc = Calculator::new();
        let commands = tokenize(script, calc.operators());
        apply_all(&mut calc, &commands)
    }

    #[test]
    fn test_digits_split_individually() {
        let commands = tokenize("12.5", &OperatorTable::default());
        assert_eq!(
            commands,
            vec![
                Command::Digit('1'),
                Command::Digit('2'),
                Command::Digit('.'),
                Command::Digit('5'),
            ]
        );
    }

    #[test]
    fn test_words_and_symbols() {
        let commands = tokenize("ac 3×4 Enter m+", &OperatorTable::default());
        assert_eq!(
            commands,
            vec![
                Command::Clear,
                Command::Digit('3'),
                Command::Operator("×".to_string()),
                Command::Digit('4'),
                Command::Equals,
                Command::MemoryAdd,
            ]
        );
    }

    #[test]
    fn test_plus_after_word_is_operator() {
        let commands = tokenize("AC+5", &OperatorTable::default());
        assert_eq!(
            commands,
            vec![
                Command::Clear,
                Command::Operator("+".to_string()),
                Command::Digit('5'),
            ]
        );
        assert_eq!(run("3 c+2="), "2");
        assert_eq!(run("4 M+ + 1 ="), "5");
    }

    #[test]
    fn test_unknown_tokens_skipped() {
        let commands = tokenize("2 % 3 hello", &OperatorTable::default());
        assert_eq!(commands, vec![Command::Digit('2'), Command::Digit('3')]);
    }

    #[test]
    fn test_extra_symbol_word() {
        let table = OperatorTable::default().with_symbol("x", Operator::Multiply);
        let commands = tokenize("6x7", &table);
        assert_eq!(
            commands,
            vec![
                Command::Digit('6'),
                Command::Operator("x".to_string()),
                Command::Digit('7'),
            ]
        );
    }

    #[test]
    fn test_scripts() {
        assert_eq!(run("5 ÷ 0 ="), "Error");
        assert_eq!(run("5 ÷ 0 = 3"), "3");
        assert_eq!(run("2 + 3 × 4 ="), "20");
        assert_eq!(run("5 + 2 = = ="), "11");
        assert_eq!(run("5+2=AC"), "0");
        assert_eq!(run("1.5 * 4 = M+"), "6");
    }

    #[test]
    fn test_empty_script() {
        assert!(tokenize("", &OperatorTable::default()).is_empty());
        assert!(tokenize("   ", &OperatorTable::default()).is_empty());
        assert_eq!(run(""), "0");
    }
}
