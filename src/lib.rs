//! `poibin` computes the Poisson Binomial distribution: the number of successes in `n`
//! independent Bernoulli trials whose success probabilities `p_1, ..., p_n` may all differ.
//!
//! The whole pmf over `{0, 1, ..., n}` is obtained once, at construction, by inverting the
//! characteristic function on the integer lattice with a single FFT of length `n + 1`.
//! The cdf is its running sum, and pmf/cdf/p-value queries are lookups.
//!
//! References:
//! - Hong, Y. (2013). On computing the distribution function for the Poisson binomial
//!   distribution. *Computational Statistics & Data Analysis* 59, 41-51.
//!
//! Numerical considerations:
//! - The product of `n` per-trial factors is assembled as `exp(sum ln|z_j|)` with phases
//!   summed through `atan2`, so large `n` does not underflow.
//! - Only half of the characteristic-function samples are evaluated; the rest follow from
//!   conjugate symmetry.
//! - Construction fails instead of truncating when the transform output is not real to
//!   within [`distributions::PoiBinConfig::imag_tolerance`].
//!
//! # Quick Start
//! ```rust
//! use poibin::distributions::PoissonBinomial;
//!
//! let pb = PoissonBinomial::new(&[0.2, 0.5]).unwrap();
//! assert!((pb.pmf(1).unwrap() - 0.5).abs() < 1e-10);
//! assert!((pb.cdf(1).unwrap() - 0.9).abs() < 1e-10);
//! assert!((pb.pval(2).unwrap() - 0.1).abs() < 1e-10);
//! ```
//!
//! Batch queries return one value per query point, in order:
//! ```rust
//! use poibin::distributions::PoissonBinomial;
//!
//! let pb = PoissonBinomial::new(&[0.3, 0.8, 0.3]).unwrap();
//! let pmf = pb.pmf_many(&[0, 1, 2, 3]).unwrap();
//! assert!((pmf.iter().sum::<f64>() - 1.0).abs() < 1e-12);
//! assert!(pb.pmf(4).is_err());
//! ```

pub mod core;
pub mod distributions;
pub mod engines;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::core::{PoiBinError, QueryViolation};
    pub use crate::distributions::{PoiBinConfig, PoissonBinomial, SupportPoint};
}
