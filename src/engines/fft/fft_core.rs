use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};

static FORWARD_FFT_CACHE: OnceLock<Mutex<HashMap<usize, Arc<dyn Fft<f64>>>>> = OnceLock::new();

thread_local! {
    static FORWARD_FFT_SCRATCH: RefCell<HashMap<usize, Vec<Complex<f64>>>> =
        RefCell::new(HashMap::new());
}

fn forward_plan(n: usize) -> Arc<dyn Fft<f64>> {
    let cache = FORWARD_FFT_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    // Plans are immutable once inserted, so a poisoned map is still consistent.
    let mut guard = cache.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(plan) = guard.get(&n) {
        return Arc::clone(plan);
    }

    log::trace!("planning forward FFT of length {n}");
    let mut planner = FftPlanner::<f64>::new();
    let plan = planner.plan_fft_forward(n);
    guard.insert(n, Arc::clone(&plan));
    plan
}

/// Unnormalized forward DFT, `X_k = sum_l x_l exp(-2 pi i l k / N)`, for any length.
pub fn fft_forward(values: &mut [Complex<f64>]) {
    let n = values.len();
    if n <= 1 {
        return;
    }

    let plan = forward_plan(n);
    let scratch_len = plan.get_inplace_scratch_len();

    FORWARD_FFT_SCRATCH.with(|cache| {
        let mut cache = cache.borrow_mut();
        let scratch = cache.entry(n).or_default();
        if scratch.len() < scratch_len {
            scratch.resize(scratch_len, Complex::new(0.0, 0.0));
        }
        plan.process_with_scratch(values, &mut scratch[..scratch_len]);
    });
}
