//! Interactive menu shell.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (Input, Transition)
//! - `update`: pure transitions over a list
//! - `run`: effects (terminal lifecycle, key reading, drawing)

pub mod run;
pub mod state;
pub mod update;
