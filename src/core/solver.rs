//! Root finding for `a·x² + b·x + c = 0`, including the degenerate
//! linear and constant forms.
//!
//! All comparisons are exact on the coefficients as given. Deciding
//! whether two real roots "look" equal is a display concern and lives in
//! [`crate::core::tolerance`].

use num_complex::Complex64 as C64;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Outcome of solving one equation. One case per shape of answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    /// `0x + 0 = c` with `c != 0`.
    NoSolution,
    /// `0x + 0 = 0`.
    InfiniteSolutions,
    LinearRoot(f64),
    /// Two real roots; equal when the discriminant is exactly zero.
    RealRoots(f64, f64),
    /// Conjugate pair, only produced for a negative discriminant.
    ComplexRoots(C64, C64),
}

impl Coefficients {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Coefficients { a, b, c }
    }

    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    pub fn is_quadratic(&self) -> bool {
        self.a != 0.0
    }

    pub fn solve(&self) -> Roots {
        solve(self.a, self.b, self.c)
    }

    /// Left-hand side evaluated at a real point.
    pub fn eval(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    /// Left-hand side evaluated at a complex point.
    pub fn eval_complex(&self, z: C64) -> C64 {
        z * z * self.a + z * self.b + self.c
    }
}

pub fn solve(a: f64, b: f64, c: f64) -> Roots {
    if a == 0.0 {
        if b == 0.0 {
            return if c == 0.0 {
                Roots::InfiniteSolutions
            } else {
                Roots::NoSolution
            };
        }
        return Roots::LinearRoot(-c / b);
    }

    let disc = b * b - 4.0 * a * c;
    let two_a = 2.0 * a;
    if disc >= 0.0 {
        let sqrt_d = disc.sqrt();
        Roots::RealRoots((-b + sqrt_d) / two_a, (-b - sqrt_d) / two_a)
    } else {
        // sqrt of a negative real with +0 imaginary part lands on the positive imaginary axis
        let sqrt_d = C64::new(disc, 0.0).sqrt();
        let minus_b = C64::new(-b, 0.0);
        Roots::ComplexRoots((minus_b + sqrt_d) / two_a, (minus_b - sqrt_d) / two_a)
    }
}

impl Roots {
    /// Stable label used by structured output and debug logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Roots::NoSolution => "no_solution",
            Roots::InfiniteSolutions => "infinite_solutions",
            Roots::LinearRoot(_) => "linear",
            Roots::RealRoots(..) => "real",
            Roots::ComplexRoots(..) => "complex",
        }
    }

    /// All roots lifted to the complex plane, in the order they were produced.
    pub fn as_complex(&self) -> Vec<C64> {
        match *self {
            Roots::NoSolution | Roots::InfiniteSolutions => Vec::new(),
            Roots::LinearRoot(x) => vec![C64::new(x, 0.0)],
            Roots::RealRoots(r1, r2) => vec![C64::new(r1, 0.0), C64::new(r2, 0.0)],
            Roots::ComplexRoots(r1, r2) => vec![r1, r2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn distinct_real_roots() {
        assert_eq!(solve(1.0, -3.0, 2.0), Roots::RealRoots(2.0, 1.0));
    }

    #[test]
    fn zero_discriminant_gives_identical_roots() {
        match solve(1.0, 2.0, 1.0) {
            Roots::RealRoots(r1, r2) => {
                assert_eq!(r1, -1.0);
                assert_eq!(r1, r2);
            }
            other => panic!("expected real roots, got {other:?}"),
        }
    }

    #[test]
    fn negative_discriminant_gives_conjugates() {
        match solve(1.0, 0.0, 1.0) {
            Roots::ComplexRoots(r1, r2) => {
                assert!(r1.re.abs() < EPS && (r1.im - 1.0).abs() < EPS);
                assert!(r2.re.abs() < EPS && (r2.im + 1.0).abs() < EPS);
                assert_eq!(r1, r2.conj());
            }
            other => panic!("expected complex roots, got {other:?}"),
        }
    }

    #[test]
    fn degenerate_cases() {
        assert_eq!(solve(0.0, 2.0, 4.0), Roots::LinearRoot(-2.0));
        assert_eq!(solve(0.0, 0.0, 0.0), Roots::InfiniteSolutions);
        assert_eq!(solve(0.0, 0.0, 5.0), Roots::NoSolution);
        assert_eq!(solve(-0.0, 0.0, -0.0), Roots::InfiniteSolutions);
    }

    #[test]
    fn discriminant_sign_picks_branch() {
        let cases = [
            (1.0, 5.0, 6.0),
            (2.0, 1.0, 3.0),
            (-1.0, 4.0, -4.0),
            (-3.0, 0.5, 7.0),
            (0.25, -1.0, 1.0),
            (1e-3, 1e3, 1.0),
        ];
        for (a, b, c) in cases {
            let coeffs = Coefficients::new(a, b, c);
            let roots = coeffs.solve();
            if coeffs.discriminant() >= 0.0 {
                assert_eq!(roots.kind(), "real", "{coeffs:?}");
            } else {
                assert_eq!(roots.kind(), "complex", "{coeffs:?}");
            }
        }
    }

    #[test]
    fn roots_satisfy_the_equation() {
        let cases = [
            (1.0, -3.0, 2.0),
            (2.0, 3.0, -5.0),
            (1.0, 1.0, 1.0),
            (-4.0, 2.0, -9.0),
            (3.5, -0.25, 0.0),
            (1.0, 2.0, 1.0),
        ];
        for (a, b, c) in cases {
            let coeffs = Coefficients::new(a, b, c);
            for z in coeffs.solve().as_complex() {
                let lhs = coeffs.eval_complex(z);
                assert!(lhs.norm() < 1e-9, "{coeffs:?} at {z}: {lhs}");
            }
        }
    }

    #[test]
    fn linear_root_satisfies_equation() {
        let coeffs = Coefficients::new(0.0, -7.0, 3.5);
        match coeffs.solve() {
            Roots::LinearRoot(x) => assert!(coeffs.eval(x).abs() < EPS),
            other => panic!("expected linear root, got {other:?}"),
        }
    }

    #[test]
    fn kind_labels() {
        assert_eq!(Roots::NoSolution.kind(), "no_solution");
        assert_eq!(Roots::InfiniteSolutions.kind(), "infinite_solutions");
        assert_eq!(Roots::LinearRoot(0.0).kind(), "linear");
        assert!(Roots::NoSolution.as_complex().is_empty());
    }
}
