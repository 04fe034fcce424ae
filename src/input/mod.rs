//! Input adapter for the calculator.
//!
//! Translates keyboard keys, keypad button labels and typed key scripts
//! into engine calls. The engine itself never sees raw key names.

mod keys;

pub use keys::tokenize;

use crate::calculator::Calculator;

/// A single input for the calculator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// A digit `0`-`9` or the decimal point.
    Digit(char),
    /// An operator symbol, resolved by the engine's operator table.
    Operator(String),
    Equals,
    Clear,
    MemoryAdd,
}

impl Command {
    /// Map a keyboard key name.
    ///
    /// Digits, `.`, the ASCII operators, `Enter`/`=` and `Escape` are
    /// recognised; any other key yields `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" => Some(Self::Equals),
            "Escape" => Some(Self::Clear),
            "+" | "-" | "*" | "/" => Some(Self::Operator(key.to_string())),
            _ => single_digit(key).map(Self::Digit),
        }
    }

    /// Map the label printed on a keypad button.
    ///
    /// Every label that is not a digit or a command key is treated as an
    /// operator symbol.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        match label {
            "AC" => Self::Clear,
            "M+" => Self::MemoryAdd,
            "=" => Self::Equals,
            _ => match single_digit(label) {
                Some(digit) => Self::Digit(digit),
                None => Self::Operator(label.to_string()),
            },
        }
    }
}

fn single_digit(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() || c == '.' => Some(c),
        _ => None,
    }
}

/// Dispatch one command to the calculator.
pub fn apply(calc: &mut Calculator, command: &Command) {
    match command {
        Command::Digit(digit) => calc.input_digit(*digit),
        Command::Operator(symbol) => calc.set_operator(symbol),
        Command::Equals => calc.press_equals(),
        Command::Clear => calc.clear(),
        Command::MemoryAdd => calc.add_to_memory(),
    }
}

/// Dispatch a sequence of commands and return the final display text.
pub fn apply_all<'a>(
    calc: &mut Calculator,
    commands: impl IntoIterator<Item = &'a Command>,
) -> String {
    for command in commands {
        apply(calc, command);
    }
    calc.display()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_keys() {
        assert_eq!(Command::from_key("7"), Some(Command::Digit('7')));
        assert_eq!(Command::from_key("."), Some(Command::Digit('.')));
        assert_eq!(Command::from_key("Enter"), Some(Command::Equals));
        assert_eq!(Command::from_key("="), Some(Command::Equals));
        assert_eq!(Command::from_key("Escape"), Some(Command::Clear));
        assert_eq!(
            Command::from_key("*"),
            Some(Command::Operator("*".to_string()))
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(Command::from_key("Shift"), None);
        assert_eq!(Command::from_key("×"), None);
        assert_eq!(Command::from_key("12"), None);
        assert_eq!(Command::from_key(""), None);
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(Command::from_label("AC"), Command::Clear);
        assert_eq!(Command::from_label("M+"), Command::MemoryAdd);
        assert_eq!(Command::from_label(" = "), Command::Equals);
        assert_eq!(Command::from_label("0"), Command::Digit('0'));
        assert_eq!(Command::from_label("÷"), Command::Operator("÷".to_string()));
    }

    #[test]
    fn test_button_sequence() {
        let mut calc = Calculator::new();
        let commands: Vec<Command> = ["9", "−", "4", "=", "M+", "AC"]
            .into_iter()
            .map(Command::from_label)
            .collect();
        assert_eq!(apply_all(&mut calc, &commands[..5]), "5");
        assert_eq!(calc.memory(), 5.0);
        assert_eq!(apply_all(&mut calc, &commands[5..]), "0");
        assert_eq!(calc.memory(), 5.0);
    }

    #[test]
    fn test_keyboard_sequence() {
        let mut calc = Calculator::new();
        let commands: Vec<Command> = ["1", "2", "/", "4", "Enter", "Enter"]
            .into_iter()
            .filter_map(Command::from_key)
            .collect();
        assert_eq!(apply_all(&mut calc, &commands), "0.75");
    }
}
