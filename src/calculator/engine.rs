//! The calculator state machine.
//!
//! Inputs arrive one at a time (digits, operators, equals, clear, memory add)
//! and each one leaves the engine with a new display value. Besides the entry
//! being typed, the engine tracks the left operand and operator waiting for a
//! right-hand side, and the last completed operation so that pressing `=`
//! again repeats it on the new value.

use serde::Serialize;
use tracing::{debug, trace};

use super::format::{DisplayFormat, ERROR_TEXT};
use super::{CalcError, Operator, OperatorTable};

/// The value currently on the display.
#[derive(Clone, Debug, PartialEq)]
enum Entry {
    /// Digits as the user typed them, at most one decimal point.
    Typing(String),
    /// Result of a completed evaluation.
    Value(f64),
    /// Shown after a division by zero until the next input.
    Error,
}

impl Entry {
    fn zero() -> Self {
        Self::Typing("0".to_string())
    }

    fn number(&self) -> Option<f64> {
        match self {
            Self::Typing(text) => text.parse().ok(),
            Self::Value(value) => Some(*value),
            Self::Error => None,
        }
    }

    fn finite_number(&self) -> Option<f64> {
        self.number().filter(|value| value.is_finite())
    }
}

/// Operator and right-hand operand of the most recent `=` evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LastOperation {
    pub operator: Operator,
    pub operand: f64,
}

/// Serializable view of the engine state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub display: String,
    pub pending_operand: Option<f64>,
    pub pending_operator: Option<Operator>,
    pub last_operation: Option<LastOperation>,
    pub just_evaluated: bool,
    pub memory: f64,
}

/// A four-function calculator with a running total and repeatable equals.
#[derive(Clone, Debug)]
pub struct Calculator {
    entry: Entry,
    /// Left operand and operator, always set together.
    pending: Option<(f64, Operator)>,
    last_operation: Option<LastOperation>,
    just_evaluated: bool,
    memory: f64,
    operators: OperatorTable,
    format: DisplayFormat,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with the default operator symbols and display width.
    pub fn new() -> Self {
        Self::with_options(OperatorTable::default(), DisplayFormat::default())
    }

    pub fn with_options(operators: OperatorTable, format: DisplayFormat) -> Self {
        Self {
            entry: Entry::zero(),
            pending: None,
            last_operation: None,
            just_evaluated: false,
            memory: 0.0,
            operators,
            format,
        }
    }

    /// Reset the display state to `0`. The memory register is kept.
    pub fn clear(&mut self) {
        trace!("clear");
        self.entry = Entry::zero();
        self.pending = None;
        self.last_operation = None;
        self.just_evaluated = false;
    }

    /// Feed one digit (`'0'..='9'`) or the decimal point.
    ///
    /// Anything else is ignored, as is a second decimal point in one entry.
    pub fn input_digit(&mut self, token: char) {
        if !(token.is_ascii_digit() || token == '.') {
            trace!(%token, "ignoring non-digit input");
            return;
        }

        if self.just_evaluated {
            self.entry = Entry::Typing(if token == '.' {
                "0.".to_string()
            } else {
                token.to_string()
            });
            self.just_evaluated = false;
            return;
        }

        if !matches!(self.entry, Entry::Typing(_)) {
            self.entry = Entry::zero();
        }
        let Entry::Typing(text) = &mut self.entry else {
            return;
        };

        if token == '.' {
            if !text.contains('.') {
                text.push('.');
            }
        } else if text.as_str() == "0" {
            *text = token.to_string();
        } else {
            text.push(token);
        }
    }

    /// Choose the operator to apply to the current entry.
    ///
    /// Unknown symbols are ignored. If an operator is already waiting for its
    /// right operand, that expression is evaluated first and its result
    /// becomes the new left operand, so `2 + 3 ×` means `(2 + 3) ×`.
    pub fn set_operator(&mut self, symbol: &str) {
        let Some(op) = self.operators.resolve(symbol) else {
            trace!(symbol, "ignoring unknown operator symbol");
            return;
        };

        if self.pending.is_some() && !self.just_evaluated {
            self.evaluate(false);
        }

        // Nothing to operate on after an error, including a failed chain.
        let Some(left) = self.entry.number() else {
            trace!("no left operand, ignoring operator");
            return;
        };

        debug!(operator = ?op, left, "operator set");
        self.pending = Some((left, op));
        self.just_evaluated = false;
        self.entry = Entry::zero();
    }

    /// The `=` key.
    ///
    /// Evaluates the pending expression if there is one. Otherwise repeats
    /// the last completed operation with the current value as left operand.
    pub fn press_equals(&mut self) {
        if self.pending.is_some() {
            self.evaluate(true);
            return;
        }

        let (Some(last), Some(a)) = (self.last_operation, self.entry.finite_number()) else {
            trace!("equals with nothing to evaluate");
            return;
        };

        match last.operator.apply(a, last.operand) {
            Ok(result) => {
                debug!(a, operator = ?last.operator, b = last.operand, result, "repeated last operation");
                self.entry = Entry::Value(result);
                self.just_evaluated = true;
            }
            Err(err) => self.fail(err),
        }
    }

    /// Add the current value to the memory register.
    ///
    /// Does nothing when the entry is not a finite number. The display is
    /// unaffected.
    pub fn add_to_memory(&mut self) {
        if let Some(value) = self.entry.finite_number() {
            self.memory += value;
            debug!(value, memory = self.memory, "added to memory");
        }
    }

    /// The text to show on the display.
    pub fn display(&self) -> String {
        match &self.entry {
            Entry::Typing(text) => self.format.format(text),
            Entry::Value(value) => self.format.format_value(*value),
            Entry::Error => ERROR_TEXT.to_string(),
        }
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|(_, op)| op)
    }

    pub fn last_operation(&self) -> Option<LastOperation> {
        self.last_operation
    }

    pub fn is_error(&self) -> bool {
        self.entry == Entry::Error
    }

    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display(),
            pending_operand: self.pending.map(|(operand, _)| operand),
            pending_operator: self.pending_operator(),
            last_operation: self.last_operation,
            just_evaluated: self.just_evaluated,
            memory: self.memory,
        }
    }

    /// Apply the pending operator to the pending operand and the current
    /// entry. With `persist`, the operator and right operand are remembered
    /// for repeated `=`.
    fn evaluate(&mut self, persist: bool) {
        let Some((a, op)) = self.pending else {
            return;
        };
        let Some(b) = self.entry.number() else {
            return;
        };

        match op.apply(a, b) {
            Ok(result) => {
                debug!(a, operator = ?op, b, result, persist, "evaluated");
                self.entry = Entry::Value(result);
                if persist {
                    self.last_operation = Some(LastOperation {
                        operator: op,
                        operand: b,
                    });
                }
                self.pending = None;
                self.just_evaluated = true;
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: CalcError) {
        debug!(error = %err, "evaluation failed, resetting");
        self.clear();
        self.entry = Entry::Error;
        self.just_evaluated = true;
    }
}
