//! Derivative-free minimisation.
//!
//! Some colour models only define the forward direction in closed form
//! (OSA UCS is the usual example). Their inverse is found by minimising the
//! distance between the forward transform of a candidate and the target.
//!
//! [`nelder_mead`] is the downhill simplex method with the classic
//! coefficients (reflection 1, expansion 2, contraction 0.5, shrink 0.5) and
//! the initial simplex built by perturbing each non-zero coordinate by 5%.
//!
//! # Usage
//!
//! ```rust
//! use tinct_math::{nelder_mead, NelderMeadOptions};
//!
//! let rosen = |p: &[f64; 2]| (1.0 - p[0]).powi(2) + 100.0 * (p[1] - p[0] * p[0]).powi(2);
//! let min = nelder_mead(rosen, [-1.2, 1.0], &NelderMeadOptions::default());
//! assert!(min.converged);
//! assert!((min.x[0] - 1.0).abs() < 1e-3);
//! ```

use tracing::{debug, trace};

const REFLECT: f64 = 1.0;
const EXPAND: f64 = 2.0;
const CONTRACT: f64 = 0.5;
const SHRINK: f64 = 0.5;

/// Relative perturbation of non-zero coordinates in the initial simplex.
const NONZERO_DELTA: f64 = 0.05;
/// Absolute perturbation of zero coordinates in the initial simplex.
const ZERO_DELTA: f64 = 0.00025;

/// Stopping criteria for [`nelder_mead`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NelderMeadOptions {
    /// Absolute spread of the simplex vertices accepted as converged.
    pub xtol: f64,
    /// Absolute spread of the objective values accepted as converged.
    pub ftol: f64,
    /// Maximum number of iterations. `None` means `200 * N`.
    pub max_iter: Option<usize>,
    /// Maximum number of objective evaluations. `None` means `200 * N`.
    pub max_evals: Option<usize>,
}

impl Default for NelderMeadOptions {
    fn default() -> Self {
        Self {
            xtol: 1e-4,
            ftol: 1e-4,
            max_iter: None,
            max_evals: None,
        }
    }
}

/// Result of a minimisation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimum<const N: usize> {
    /// Best argument found.
    pub x: [f64; N],
    /// Objective value at `x`.
    pub fx: f64,
    /// Iterations performed.
    pub iterations: usize,
    /// Objective evaluations performed.
    pub evaluations: usize,
    /// True if both tolerances were met before a limit was hit.
    pub converged: bool,
}

struct Counted<F> {
    f: F,
    evaluations: usize,
}

impl<F> Counted<F> {
    // Non-finite objective values rank last so the simplex moves away from them.
    fn eval<const N: usize>(&mut self, x: &[f64; N]) -> f64
    where
        F: FnMut(&[f64; N]) -> f64,
    {
        self.evaluations += 1;
        let v = (self.f)(x);
        if v.is_finite() { v } else { f64::INFINITY }
    }
}

/// Affine combination `(1 + a) * p - a * q`.
fn combine<const N: usize>(p: &[f64; N], q: &[f64; N], a: f64) -> [f64; N] {
    std::array::from_fn(|i| (1.0 + a) * p[i] - a * q[i])
}

/// Minimises `f` starting from `x0` with the Nelder-Mead simplex method.
///
/// Never fails: when a limit is hit the best vertex is returned with
/// `converged == false`.
pub fn nelder_mead<const N: usize, F>(f: F, x0: [f64; N], options: &NelderMeadOptions) -> Minimum<N>
where
    F: FnMut(&[f64; N]) -> f64,
{
    let max_iter = options.max_iter.unwrap_or(200 * N);
    let max_evals = options.max_evals.unwrap_or(200 * N);
    let mut f = Counted { f, evaluations: 0 };

    let mut simplex: Vec<([f64; N], f64)> = Vec::with_capacity(N + 1);
    let f0 = f.eval(&x0);
    simplex.push((x0, f0));
    for k in 0..N {
        let mut y = x0;
        y[k] = if y[k] != 0.0 { (1.0 + NONZERO_DELTA) * y[k] } else { ZERO_DELTA };
        let fy = f.eval(&y);
        simplex.push((y, fy));
    }
    simplex.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut iterations = 0;
    let mut converged = false;

    while f.evaluations < max_evals && iterations < max_iter {
        let (best, f_best) = simplex[0];
        let x_spread = simplex[1..]
            .iter()
            .flat_map(|(v, _)| v.iter().zip(best.iter()).map(|(a, b)| (a - b).abs()))
            .fold(0.0_f64, f64::max);
        let f_spread = simplex[1..]
            .iter()
            .map(|(_, fv)| (fv - f_best).abs())
            .fold(0.0_f64, f64::max);
        if x_spread <= options.xtol && f_spread <= options.ftol {
            converged = true;
            break;
        }

        // Centroid of all but the worst vertex
        let mut centroid = [0.0; N];
        for (v, _) in &simplex[..N] {
            for i in 0..N {
                centroid[i] += v[i] / N as f64;
            }
        }

        let (worst, f_worst) = simplex[N];
        let f_second_worst = simplex[N - 1].1;

        let xr = combine(&centroid, &worst, REFLECT);
        let fxr = f.eval(&xr);
        let mut shrink = false;

        if fxr < f_best {
            let xe = combine(&centroid, &worst, REFLECT * EXPAND);
            let fxe = f.eval(&xe);
            simplex[N] = if fxe < fxr { (xe, fxe) } else { (xr, fxr) };
        } else if fxr < f_second_worst {
            simplex[N] = (xr, fxr);
        } else if fxr < f_worst {
            // Outside contraction
            let xc = combine(&centroid, &worst, CONTRACT * REFLECT);
            let fxc = f.eval(&xc);
            if fxc <= fxr {
                simplex[N] = (xc, fxc);
            } else {
                shrink = true;
            }
        } else {
            // Inside contraction
            let xcc = combine(&centroid, &worst, -CONTRACT);
            let fxcc = f.eval(&xcc);
            if fxcc < f_worst {
                simplex[N] = (xcc, fxcc);
            } else {
                shrink = true;
            }
        }

        if shrink {
            for j in 1..=N {
                let v: [f64; N] =
                    std::array::from_fn(|i| best[i] + SHRINK * (simplex[j].0[i] - best[i]));
                let fv = f.eval(&v);
                simplex[j] = (v, fv);
            }
        }

        simplex.sort_by(|a, b| a.1.total_cmp(&b.1));
        iterations += 1;
        trace!(iterations, f_best = simplex[0].1, "nelder_mead step");
    }

    let (x, fx) = simplex[0];
    debug!(iterations, evaluations = f.evaluations, fx, converged, "nelder_mead finished");

    Minimum {
        x,
        fx,
        iterations,
        evaluations: f.evaluations,
        converged,
    }
}
