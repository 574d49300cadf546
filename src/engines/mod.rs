//! Numerical engines.

pub mod fft;
