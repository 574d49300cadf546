//! Discrete distributions computed by characteristic-function inversion.

pub mod poisson_binomial;
pub mod query;

pub use poisson_binomial::{PoiBinConfig, PoissonBinomial};
pub use query::{SupportPoint, is_integral, support_indices};

/// Running sum `out[k] = values[0] + ... + values[k]`.
pub fn cumulative_sum(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |acc, &x| {
            *acc += x;
            Some(*acc)
        })
        .collect()
}
