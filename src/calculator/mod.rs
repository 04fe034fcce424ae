//! Calculator engine.
//!
//! This module provides:
//! - The `Calculator` state machine driven by digit, operator and command inputs
//! - The operator symbol table, including Unicode keypad glyphs
//! - Display formatting of entries and results

mod engine;
mod error;
mod format;
mod operator;

pub use engine::{Calculator, LastOperation, Snapshot};
pub use error::CalcError;
pub use format::{DisplayFormat, ERROR_TEXT, canonical_string, to_exponential};
pub use operator::{Operator, OperatorTable};
