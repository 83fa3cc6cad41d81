//! Built-in lint rules.
//!
//! This module contains all the built-in rules that come with vue-pug-lint.

pub mod no_pug_control_flow;

pub use no_pug_control_flow::{NoPugControlFlowOptions, NoPugControlFlowRule};
