//! Serde payloads for persisting and transporting computed distributions.
//!
//! # Examples
//! ```rust
//! use poibin::core::{from_json, to_json_pretty, DistributionSnapshot};
//! use poibin::distributions::PoissonBinomial;
//!
//! let pb = PoissonBinomial::new(&[0.2, 0.5]).expect("valid probabilities");
//! let snapshot = pb.snapshot();
//!
//! let json = to_json_pretty(&snapshot).expect("json serialization");
//! let decoded: DistributionSnapshot = from_json(&json).expect("json deserialization");
//! assert_eq!(decoded, snapshot);
//! ```

use serde::de::DeserializeOwned;

use crate::distributions::PoiBinConfig;

/// Full state of a constructed distribution.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DistributionSnapshot {
    /// Number of trials.
    pub n: usize,
    /// Per-trial success probabilities.
    pub probabilities: Vec<f64>,
    /// `pmf[k] = Pr(X = k)` for `k = 0..=n`.
    pub pmf: Vec<f64>,
    /// `cdf[k] = Pr(X <= k)` for `k = 0..=n`.
    pub cdf: Vec<f64>,
    /// Configuration the distribution was built with.
    pub config: PoiBinConfig,
}

/// Serialize a value to pretty JSON.
pub fn to_json_pretty<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Serialize a value to compact JSON.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Deserialize a value from JSON.
pub fn from_json<T: DeserializeOwned>(payload: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(payload)
}
