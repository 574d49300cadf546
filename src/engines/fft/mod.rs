//! Module `engines::fft::mod`.
//!
//! Characteristic-function samples on the integer lattice and their exact inversion by a
//! single forward FFT of length `n + 1`.
//!
//! References: Hong (2013), Comput. Stat. Data Anal. 59, 41-51, eq. (2)-(3).
//!
//! Numerical considerations: magnitudes are accumulated as log-sums and phases with
//! `atan2`; the transform output is checked for an imaginary residue before use.

mod fft_core;

pub mod char_fn;
pub mod inversion;

pub use char_fn::{LatticeCharacteristicFunction, PoissonBinomialCharFn};
pub use inversion::{
    DEFAULT_IMAG_TOLERANCE, hermitian_chi, imaginary_residue_within, invert_lattice_cf,
};
