//! quadroot: classify and solve `a·x² + b·x + c = 0` for real coefficients.
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
