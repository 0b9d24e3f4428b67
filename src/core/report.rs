//! Human-readable and JSON rendering of a solved equation.

use num_complex::Complex64 as C64;
use serde::Serialize;

use crate::core::solver::{Coefficients, Roots};
use crate::core::tolerance::Tolerance;

/// Floats print in their shortest round-trip form with a trailing `.0`
/// for integral values (`2.0`, `-0.5`, `1e-7`).
pub fn fmt_real(x: f64) -> String {
    format!("{:?}", x)
}

/// `re+imi` / `re-imi`. A signed zero real part prints as `0.0`.
pub fn fmt_complex(z: C64) -> String {
    let re = if z.re == 0.0 { 0.0 } else { z.re };
    if z.im.is_sign_negative() {
        format!("{}-{}i", fmt_real(re), fmt_real(-z.im))
    } else {
        format!("{}+{}i", fmt_real(re), fmt_real(z.im))
    }
}

pub fn render_text(roots: &Roots, tol: &Tolerance) -> String {
    match *roots {
        Roots::NoSolution => "No solution (0x + 0 = nonzero).".to_string(),
        Roots::InfiniteSolutions => "Infinite solutions (0x + 0 = 0).".to_string(),
        Roots::LinearRoot(x) => format!("Linear root: {}", fmt_real(x)),
        Roots::RealRoots(r1, r2) if tol.is_close(r1, r2) => {
            format!("One real repeated root: {}", fmt_real(r1))
        }
        Roots::RealRoots(r1, r2) => format!("Real roots: {} , {}", fmt_real(r1), fmt_real(r2)),
        Roots::ComplexRoots(r1, r2) => {
            format!("Complex roots: {} , {}", fmt_complex(r1), fmt_complex(r2))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RootValue {
    pub re: f64,
    pub im: f64,
}

/// Structured form of one solve, for `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub coefficients: Coefficients,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminant: Option<f64>,
    pub roots: Vec<RootValue>,
    pub repeated: bool,
    pub message: String,
}

impl Report {
    pub fn new(coefficients: Coefficients, roots: &Roots, tol: &Tolerance) -> Self {
        let repeated = matches!(*roots, Roots::RealRoots(r1, r2) if tol.is_close(r1, r2));
        Report {
            coefficients,
            kind: roots.kind(),
            discriminant: coefficients
                .is_quadratic()
                .then(|| coefficients.discriminant()),
            roots: roots
                .as_complex()
                .into_iter()
                .map(|z| RootValue { re: z.re, im: z.im })
                .collect(),
            repeated,
            message: render_text(roots, tol),
        }
    }
}

pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
