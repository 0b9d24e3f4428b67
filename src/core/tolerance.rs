//! Approximate float equality for presentation only.
//!
//! The solver never consults this; it exists so the report can call two
//! nearly identical real roots a single repeated root.

use serde::Deserialize;

pub const DEFAULT_REL_TOL: f64 = 1e-9;
pub const DEFAULT_ABS_TOL: f64 = 1e-12;

/// `rel` scales with the larger magnitude; `abs` is the floor near zero.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    pub rel: f64,
    pub abs: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance { rel: DEFAULT_REL_TOL, abs: DEFAULT_ABS_TOL }
    }
}

impl Tolerance {
    pub fn new(rel: f64, abs: f64) -> Self {
        Tolerance { rel: rel.max(0.0), abs: abs.max(0.0) }
    }

    pub fn is_close(&self, x: f64, y: f64) -> bool {
        if x == y {
            return true;
        }
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        let diff = (x - y).abs();
        diff <= (self.rel * x.abs().max(y.abs())).max(self.abs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_near_values() {
        let t = Tolerance::default();
        assert!(t.is_close(-1.0, -1.0));
        assert!(t.is_close(1.0, 1.0 + 1e-12));
        assert!(t.is_close(1e6, 1e6 + 1e-4));
        assert!(!t.is_close(1.0, 1.0001));
    }

    #[test]
    fn absolute_floor_near_zero() {
        let t = Tolerance::default();
        assert!(t.is_close(1e-20, -1e-20));
        assert!(!Tolerance::new(1e-9, 0.0).is_close(1e-20, -1e-20));
    }

    #[test]
    fn nan_and_infinity() {
        let t = Tolerance::default();
        assert!(!t.is_close(f64::NAN, f64::NAN));
        assert!(t.is_close(f64::INFINITY, f64::INFINITY));
        assert!(!t.is_close(f64::INFINITY, 1e308));
    }

    #[test]
    fn negative_inputs_clamp_to_zero() {
        let t = Tolerance::new(-1.0, -1.0);
        assert_eq!(t, Tolerance::new(0.0, 0.0));
        assert!(!t.is_close(1.0, 1.0 + f64::EPSILON));
    }
}
