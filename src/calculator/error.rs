use thiserror::Error;

/// Failures raised while applying an operator.
///
/// These never leave the engine; the calculator recovers by resetting and
/// showing `"Error"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
}
