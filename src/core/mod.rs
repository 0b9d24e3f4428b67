//! Core module tree: solving, display tolerance, and rendering.

#[macro_use]
pub mod debug; // gated debug logging (QUADROOT_DEBUG=1) provides debug_log! macro
pub mod error;
pub mod report;
pub mod solver;
pub mod tolerance;

pub use solver::{solve, Coefficients, Roots};
