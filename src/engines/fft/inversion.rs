//! Exact pmf recovery from lattice characteristic-function samples.
//!
//! References: Hong (2013), "On computing the distribution function for the Poisson
//! binomial distribution", Comput. Stat. Data Anal. 59, eq. (2)-(3).
//!
//! With `N = n + 1` and `chi_l = phi(2 pi l / N)`, the pmf is
//! `pmf_k = (1/N) sum_l chi_l exp(-2 pi i l k / N)`, i.e. the unnormalized forward DFT of
//! `chi / N`. Only `l = 0..=ceil(n/2)` are evaluated; the upper half is the complex
//! conjugate of the mirrored lower half because `X` is real and integer-valued.

use num_complex::Complex;

use super::char_fn::LatticeCharacteristicFunction;
use super::fft_core::fft_forward;
use crate::core::PoiBinError;

/// Default bound on `|Im(pmf_k)|` after inversion.
pub const DEFAULT_IMAG_TOLERANCE: f64 = 1e-15;

/// Builds the normalized Hermitian sample array `chi_l / (n + 1)` for `l = 0..=n`.
pub fn hermitian_chi<C: LatticeCharacteristicFunction>(cf: &C) -> Vec<Complex<f64>> {
    let n = cf.max_count();
    let len = n + 1;
    let half = n.div_ceil(2);

    let mut chi = vec![Complex::new(0.0, 0.0); len];
    chi[0] = Complex::new(1.0, 0.0);
    for l in 1..=half {
        chi[l] = cf.cf(l);
    }
    for l in (half + 1)..=n {
        chi[l] = chi[len - l].conj();
    }

    let scale = len as f64;
    for value in &mut chi {
        *value /= scale;
    }
    chi
}

/// Checks that every imaginary part is within `tol` of zero.
///
/// On failure returns the first offending index and its imaginary part.
pub fn imaginary_residue_within(values: &[Complex<f64>], tol: f64) -> Result<(), (usize, f64)> {
    match values.iter().position(|z| !(z.im.abs() <= tol)) {
        Some(index) => Err((index, values[index].im)),
        None => Ok(()),
    }
}

/// Inverts a lattice characteristic function into its pmf over `{0, ..., n}`.
///
/// Fails with [`PoiBinError::NumericalInconsistency`] when the transform output carries an
/// imaginary residue above `imag_tolerance` or a non-finite real part.
pub fn invert_lattice_cf<C: LatticeCharacteristicFunction>(
    cf: &C,
    imag_tolerance: f64,
) -> Result<Vec<f64>, PoiBinError> {
    let mut xi = hermitian_chi(cf);
    fft_forward(&mut xi);

    if log::log_enabled!(log::Level::Debug) {
        let max_residue = xi.iter().map(|z| z.im.abs()).fold(0.0, f64::max);
        log::debug!(
            "inverted characteristic function: n={}, max |Im(pmf)|={max_residue:e}",
            cf.max_count()
        );
    }

    imaginary_residue_within(&xi, imag_tolerance).map_err(|(index, residue)| {
        PoiBinError::NumericalInconsistency(format!(
            "pmf values have to be real: imaginary part {residue:e} at k={index} exceeds tolerance {imag_tolerance:e}"
        ))
    })?;

    if let Some(index) = xi.iter().position(|z| !z.re.is_finite()) {
        return Err(PoiBinError::NumericalInconsistency(format!(
            "pmf value at k={index} is not finite: {}",
            xi[index].re
        )));
    }

    // Rounding noise can push exact zeros slightly negative.
    Ok(xi.into_iter().map(|z| z.re.max(0.0)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::fft::char_fn::PoissonBinomialCharFn;

    struct ConstantCf {
        n: usize,
        value: Complex<f64>,
    }

    impl LatticeCharacteristicFunction for ConstantCf {
        fn max_count(&self) -> usize {
            self.n
        }

        fn cf(&self, _l: usize) -> Complex<f64> {
            self.value
        }
    }

    #[test]
    fn upper_half_is_conjugate_mirror_of_lower_half() {
        for p in [vec![0.3, 0.8, 0.3], vec![0.1, 0.2, 0.7, 0.9], vec![0.6]] {
            let cf = PoissonBinomialCharFn::new(&p);
            let chi = hermitian_chi(&cf);
            let n = p.len();
            assert_eq!(chi.len(), n + 1);
            assert!((chi[0].re - 1.0 / (n + 1) as f64).abs() < 1e-16);
            // For odd n the middle sample mirrors onto itself and is evaluated directly.
            for l in (n.div_ceil(2) + 1)..=n {
                assert_eq!(chi[l], chi[n + 1 - l].conj(), "l={l}");
            }
            for l in 1..=n {
                let expected = cf.cf(l) / (n + 1) as f64;
                assert!((chi[l] - expected).norm() < 1e-14, "l={l}");
            }
        }
    }

    #[test]
    fn residue_check_accepts_real_and_rejects_complex() {
        let xi = [Complex::new(1.0, 0.0), Complex::new(1.8, 0.0)];
        assert!(imaginary_residue_within(&xi, 1e-15).is_ok());

        let xi = [Complex::new(1.0, 99.0), Complex::new(1.8, 0.0)];
        assert_eq!(imaginary_residue_within(&xi, 1e-15), Err((0, 99.0)));
    }

    #[test]
    fn residue_check_is_symmetric_and_rejects_nan() {
        let xi = [Complex::new(0.5, 0.0), Complex::new(0.5, -1e-12)];
        assert_eq!(imaginary_residue_within(&xi, 1e-15), Err((1, -1e-12)));

        let xi = [Complex::new(0.5, f64::NAN)];
        assert!(imaginary_residue_within(&xi, 1e-15).is_err());
    }

    #[test]
    fn inversion_recovers_two_trial_pmf() {
        let p = [0.2, 0.5];
        let pmf = invert_lattice_cf(&PoissonBinomialCharFn::new(&p), DEFAULT_IMAG_TOLERANCE)
            .expect("real pmf");
        let expected = [0.4, 0.5, 0.1];
        for (got, want) in pmf.iter().zip(expected) {
            assert!((got - want).abs() < 1e-10, "got={got} want={want}");
        }
    }

    #[test]
    fn residue_above_tolerance_fails_inversion() {
        let cf = ConstantCf {
            n: 4,
            value: Complex::new(0.3, 0.4),
        };
        let pmf = invert_lattice_cf(&cf, 1e-12).expect("hermitian array inverts to reals");
        assert_eq!(pmf.len(), 5);

        // No residue satisfies a negative bound.
        let err = invert_lattice_cf(&cf, -1.0).unwrap_err();
        assert!(matches!(err, PoiBinError::NumericalInconsistency(_)));
    }
}
