//! Canonical operators and the symbol table that maps input glyphs onto them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::CalcError;

/// Symbols accepted out of the box, including the Unicode minus, times and
/// division signs used on on-screen keypads.
const DEFAULT_SYMBOLS: &[(&str, Operator)] = &[
    ("+", Operator::Add),
    ("-", Operator::Subtract),
    ("\u{2212}", Operator::Subtract),
    ("*", Operator::Multiply),
    ("\u{00d7}", Operator::Multiply),
    ("/", Operator::Divide),
    ("\u{00f7}", Operator::Divide),
];

/// One of the four supported arithmetic operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Apply the operator to `a` and `b`.
    ///
    /// Division by exactly zero is the only failure; everything else follows
    /// IEEE-754 double arithmetic.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide if b == 0.0 => Err(CalcError::DivisionByZero),
            Self::Divide => Ok(a / b),
        }
    }

    /// The glyph shown for this operator on a keypad.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "\u{2212}",
            Self::Multiply => "\u{00d7}",
            Self::Divide => "\u{00f7}",
        }
    }
}

/// Lookup table from input symbols to canonical operators.
#[derive(Clone, Debug)]
pub struct OperatorTable {
    symbols: HashMap<String, Operator>,
}

impl OperatorTable {
    /// Register an additional symbol, replacing any existing mapping for it.
    pub fn with_symbol(mut self, symbol: impl Into<String>, op: Operator) -> Self {
        self.insert(symbol, op);
        self
    }

    pub fn insert(&mut self, symbol: impl Into<String>, op: Operator) {
        self.symbols.insert(symbol.into(), op);
    }

    /// Resolve a symbol. Surrounding whitespace is ignored.
    pub fn resolve(&self, symbol: &str) -> Option<Operator> {
        self.symbols.get(symbol.trim()).copied()
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        let symbols = DEFAULT_SYMBOLS
            .iter()
            .map(|&(symbol, op)| (symbol.to_string(), op))
            .collect();
        Self { symbols }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_symbols_cover_all_operators() {
        let table = OperatorTable::default();
        assert_eq!(table.resolve("+"), Some(Operator::Add));
        assert_eq!(table.resolve("-"), Some(Operator::Subtract));
        assert_eq!(table.resolve("−"), Some(Operator::Subtract));
        assert_eq!(table.resolve("*"), Some(Operator::Multiply));
        assert_eq!(table.resolve("×"), Some(Operator::Multiply));
        assert_eq!(table.resolve("/"), Some(Operator::Divide));
        assert_eq!(table.resolve("÷"), Some(Operator::Divide));
    }

    #[test]
    fn test_unknown_symbol() {
        let table = OperatorTable::default();
        assert_eq!(table.resolve("%"), None);
        assert_eq!(table.resolve(""), None);
        assert_eq!(table.resolve("x"), None);
    }

    #[test]
    fn test_extra_symbol() {
        let table = OperatorTable::default().with_symbol("x", Operator::Multiply);
        assert_eq!(table.resolve("x"), Some(Operator::Multiply));
        assert_eq!(table.resolve(" x "), Some(Operator::Multiply));
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(Operator::Multiply.apply(2.0, 3.0), Ok(6.0));
        assert_eq!(Operator::Divide.apply(3.0, 2.0), Ok(1.5));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Operator::Divide.apply(5.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            Operator::Divide.apply(5.0, -0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_symbols_resolve_back() {
        let table = OperatorTable::default();
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ] {
            assert_eq!(table.resolve(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_operator_names_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            op: Operator,
        }
        let parsed: Wrapper = toml::from_str("op = \"divide\"").unwrap();
        assert_eq!(parsed.op, Operator::Divide);
    }
}
