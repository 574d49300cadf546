//! Poisson Binomial distribution: the number of successes in `n` independent Bernoulli
//! trials with per-trial success probabilities `p_1, ..., p_n`.
//!
//! The full pmf is computed once at construction by inverting the characteristic function
//! on the lattice `{0, ..., n}` (Hong 2013); the cdf is its prefix sum. Queries are plain
//! lookups into the two vectors.
//!
//! # Examples
//! ```rust
//! use poibin::distributions::PoissonBinomial;
//!
//! let pb = PoissonBinomial::new(&[0.3, 0.8, 0.3]).unwrap();
//! assert!((pb.pmf(1).unwrap() - 0.476).abs() < 1e-10);
//! assert!((pb.cdf(1).unwrap() - 0.574).abs() < 1e-10);
//! assert_eq!(pb.pval(0).unwrap(), 1.0);
//!
//! let tail = pb.pval_many(&[1, 2, 3]).unwrap();
//! assert_eq!(tail.len(), 3);
//! ```

use serde_json::Value;

use super::cumulative_sum;
use super::query::{SupportPoint, support_indices};
use crate::core::{DistributionSnapshot, PoiBinError};
use crate::engines::fft::{DEFAULT_IMAG_TOLERANCE, PoissonBinomialCharFn, invert_lattice_cf};

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PoiBinConfig {
    /// Largest accepted `|Im(pmf_k)|` after the inverse transform.
    pub imag_tolerance: f64,
}

impl Default for PoiBinConfig {
    fn default() -> Self {
        Self {
            imag_tolerance: DEFAULT_IMAG_TOLERANCE,
        }
    }
}

impl PoiBinConfig {
    pub fn validate(self) -> Result<(), PoiBinError> {
        if !self.imag_tolerance.is_finite() || self.imag_tolerance < 0.0 {
            return Err(PoiBinError::InvalidConfig(format!(
                "imag_tolerance must be finite and >= 0, got {}",
                self.imag_tolerance
            )));
        }
        Ok(())
    }
}

/// Poisson Binomial distribution with precomputed pmf and cdf.
#[derive(Debug, Clone, PartialEq)]
pub struct PoissonBinomial {
    probabilities: Vec<f64>,
    omega: f64,
    pmf: Vec<f64>,
    cdf: Vec<f64>,
    config: PoiBinConfig,
}

impl PoissonBinomial {
    /// Builds the distribution with the default configuration.
    pub fn new(probabilities: &[f64]) -> Result<Self, PoiBinError> {
        Self::with_config(probabilities, PoiBinConfig::default())
    }

    pub fn with_config(probabilities: &[f64], config: PoiBinConfig) -> Result<Self, PoiBinError> {
        config.validate()?;
        validate_probabilities(probabilities)?;

        let cf = PoissonBinomialCharFn::new(probabilities);
        let pmf = invert_lattice_cf(&cf, config.imag_tolerance)?;
        let cdf = cumulative_sum(&pmf);

        Ok(Self {
            probabilities: probabilities.to_vec(),
            omega: cf.omega(),
            pmf,
            cdf,
            config,
        })
    }

    /// Builds the distribution from a JSON array of probabilities.
    pub fn from_json(payload: &str) -> Result<Self, PoiBinError> {
        let value: Value = serde_json::from_str(payload)
            .map_err(|err| PoiBinError::InvalidInput(format!("malformed JSON: {err}")))?;
        Self::from_json_value(&value)
    }

    /// Builds the distribution from a JSON value that must be a flat array of numbers.
    pub fn from_json_value(value: &Value) -> Result<Self, PoiBinError> {
        Self::new(&flat_probabilities(value)?)
    }

    /// Number of trials.
    pub fn n(&self) -> usize {
        self.probabilities.len()
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Lattice spacing `2 pi / (n + 1)` used by the inversion.
    pub fn omega(&self) -> f64 {
        self.omega
    }

    pub fn config(&self) -> PoiBinConfig {
        self.config
    }

    /// `Pr(X = k)` for `k = 0..=n`.
    pub fn pmf_values(&self) -> &[f64] {
        &self.pmf
    }

    /// `Pr(X <= k)` for `k = 0..=n`.
    pub fn cdf_values(&self) -> &[f64] {
        &self.cdf
    }

    /// `Pr(X = k)`.
    pub fn pmf<K: SupportPoint>(&self, k: K) -> Result<f64, PoiBinError> {
        Ok(self.pmf[k.to_support_index(self.n())?])
    }

    /// `Pr(X <= k)`.
    pub fn cdf<K: SupportPoint>(&self, k: K) -> Result<f64, PoiBinError> {
        Ok(self.cdf[k.to_support_index(self.n())?])
    }

    /// `Pr(X >= k)`, computed as `1 - cdf(k - 1)` floored at `0`, and exactly `1` at `k = 0`.
    pub fn pval<K: SupportPoint>(&self, k: K) -> Result<f64, PoiBinError> {
        Ok(self.pval_at(k.to_support_index(self.n())?))
    }

    /// Elementwise [`Self::pmf`]; fails if any point is invalid.
    pub fn pmf_many<K: SupportPoint>(&self, ks: &[K]) -> Result<Vec<f64>, PoiBinError> {
        let indices = support_indices(ks, self.n())?;
        Ok(indices.into_iter().map(|i| self.pmf[i]).collect())
    }

    /// Elementwise [`Self::cdf`]; fails if any point is invalid.
    pub fn cdf_many<K: SupportPoint>(&self, ks: &[K]) -> Result<Vec<f64>, PoiBinError> {
        let indices = support_indices(ks, self.n())?;
        Ok(indices.into_iter().map(|i| self.cdf[i]).collect())
    }

    /// Elementwise [`Self::pval`]; fails if any point is invalid.
    pub fn pval_many<K: SupportPoint>(&self, ks: &[K]) -> Result<Vec<f64>, PoiBinError> {
        let indices = support_indices(ks, self.n())?;
        Ok(indices.into_iter().map(|i| self.pval_at(i)).collect())
    }

    pub fn snapshot(&self) -> DistributionSnapshot {
        DistributionSnapshot {
            n: self.n(),
            probabilities: self.probabilities.clone(),
            pmf: self.pmf.clone(),
            cdf: self.cdf.clone(),
            config: self.config,
        }
    }

    #[inline]
    fn pval_at(&self, index: usize) -> f64 {
        if index == 0 {
            1.0
        } else {
            // A cdf that sums past one must not yield a negative tail.
            (1.0 - self.cdf[index - 1]).max(0.0)
        }
    }
}

fn validate_probabilities(probabilities: &[f64]) -> Result<(), PoiBinError> {
    for (index, &p) in probabilities.iter().enumerate() {
        if p.is_nan() {
            return Err(PoiBinError::InvalidInput(format!(
                "probabilities must be numbers, got NaN at index {index}"
            )));
        }
        if p < 0.0 {
            return Err(PoiBinError::InvalidInput(format!(
                "probabilities have to be non-negative, got {p} at index {index}"
            )));
        }
        if p > 1.0 {
            return Err(PoiBinError::InvalidInput(format!(
                "probabilities have to be at most 1, got {p} at index {index}"
            )));
        }
    }
    Ok(())
}

fn flat_probabilities(value: &Value) -> Result<Vec<f64>, PoiBinError> {
    let Value::Array(items) = value else {
        return Err(PoiBinError::InvalidInput(
            "input must be a one-dimensional array".to_string(),
        ));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Number(number) => number.as_f64().ok_or_else(|| {
                PoiBinError::InvalidInput(format!("element at index {index} is not an f64"))
            }),
            Value::Array(_) => Err(PoiBinError::InvalidInput(format!(
                "input must be a one-dimensional array, found a nested array at index {index}"
            ))),
            other => Err(PoiBinError::InvalidInput(format!(
                "element at index {index} is not a number: {other}"
            ))),
        })
        .collect()
}
