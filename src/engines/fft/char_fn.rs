use std::f64::consts::PI;

use num_complex::Complex;

/// Characteristic function of a random variable supported on `{0, 1, ..., n}`,
/// sampled on the lattice of frequencies `omega * l` with `omega = 2 pi / (n + 1)`.
pub trait LatticeCharacteristicFunction {
    /// Largest value in the support (`n`).
    fn max_count(&self) -> usize;

    /// Returns `phi(omega * l) = E[exp(i omega l X)]`.
    fn cf(&self, l: usize) -> Complex<f64>;
}

/// Characteristic function of a sum of independent Bernoulli trials.
///
/// Each trial contributes `z_j(l) = (1 - p_j) + p_j exp(i omega l)`. The product over
/// trials is assembled in polar form: magnitudes are summed in log space and phases are
/// summed with `atan2`, so many small factors never underflow.
#[derive(Debug, Clone, Copy)]
pub struct PoissonBinomialCharFn<'a> {
    probabilities: &'a [f64],
    omega: f64,
}

impl<'a> PoissonBinomialCharFn<'a> {
    pub fn new(probabilities: &'a [f64]) -> Self {
        Self {
            probabilities,
            omega: 2.0 * PI / (probabilities.len() + 1) as f64,
        }
    }

    /// Lattice spacing `2 pi / (n + 1)`.
    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// Per-trial factor `z_j(l)`, or `None` past the last trial.
    pub fn z(&self, j: usize, l: usize) -> Option<Complex<f64>> {
        let (sin, cos) = (self.omega * l as f64).sin_cos();
        self.probabilities.get(j).map(|&p| trial_factor(p, sin, cos))
    }

    /// `d(l) = exp(sum_j ln|z_j(l)|)`.
    pub fn magnitude(&self, l: usize) -> f64 {
        self.factors(l).map(|z| z.norm().ln()).sum::<f64>().exp()
    }

    /// Sum of the principal arguments of `z_j(l)` over all trials.
    pub fn argument_sum(&self, l: usize) -> f64 {
        self.factors(l).map(|z| z.im.atan2(z.re)).sum()
    }

    fn factors(&self, l: usize) -> impl Iterator<Item = Complex<f64>> + '_ {
        let (sin, cos) = (self.omega * l as f64).sin_cos();
        self.probabilities.iter().map(move |&p| trial_factor(p, sin, cos))
    }
}

#[inline]
fn trial_factor(p: f64, sin: f64, cos: f64) -> Complex<f64> {
    Complex::new(1.0 - p + p * cos, p * sin)
}

impl LatticeCharacteristicFunction for PoissonBinomialCharFn<'_> {
    fn max_count(&self) -> usize {
        self.probabilities.len()
    }

    fn cf(&self, l: usize) -> Complex<f64> {
        if l == 0 {
            return Complex::new(1.0, 0.0);
        }
        Complex::from_polar(self.magnitude(l), self.argument_sum(l))
    }
}
