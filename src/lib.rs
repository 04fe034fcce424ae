//! A four-function calculator engine.
//!
//! The [`calculator::Calculator`] keeps a running total, chains operators
//! left to right and repeats the last operation on repeated `=`. The
//! [`input`] module maps keys and button labels onto it.

pub mod calculator;
pub mod config;
pub mod input;
pub mod logging;

pub use calculator::{Calculator, Operator};
