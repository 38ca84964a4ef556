//! Cross-trial reductions of a trial transform stack
//!
//! Both reductions take a `[trial][freq][time]` stack and collapse the
//! leading trial axis:
//! - `power`: `mean_trial(|W|²)`
//! - `itc`: `|mean_trial(W / |W|)|`, the mean resultant length of the phases
//!
//! Zero-magnitude coefficients have no phase. They are not special-cased: the
//! normalization yields NaN and the NaN reaches the output, where it is
//! counted and reported through `log::warn!`.

use ndarray::{Array2, ArrayView3, Axis};
use num_complex::Complex64;

use crate::error::{Result, TfrError};

/// Trial-averaged power.
///
/// A single-trial stack returns that trial's instantaneous power.
pub fn power(stack: ArrayView3<'_, Complex64>) -> Result<Array2<f64>> {
    let n_trials = trial_count(&stack)?;
    let total = stack.mapv(|c| c.norm().powi(2)).sum_axis(Axis(0));
    Ok(total / n_trials as f64)
}

/// Inter-trial phase coherence in [0, 1].
///
/// 1 means every trial has the same phase at that point, 0 means the phases
/// cancel out. Amplitude does not contribute.
pub fn itc(stack: ArrayView3<'_, Complex64>) -> Result<Array2<f64>> {
    let n_trials = trial_count(&stack)?;
    let phasors = stack.mapv(|c| c / c.norm()).sum_axis(Axis(0));
    let coherence = phasors.mapv(|sum| (sum / n_trials as f64).norm());

    let non_finite = coherence.iter().filter(|v| !v.is_finite()).count();
    if non_finite > 0 {
        log::warn!(
            "ITC has {} non-finite points out of {}: {} zero-magnitude coefficients in stack",
            non_finite,
            coherence.len(),
            degenerate_points(stack)
        );
    }

    Ok(coherence)
}

/// Number of coefficients in the stack whose phase is undefined (zero
/// magnitude) or that are not finite.
pub fn degenerate_points(stack: ArrayView3<'_, Complex64>) -> usize {
    stack
        .iter()
        .filter(|c| !c.is_finite() || c.norm() == 0.0)
        .count()
}

fn trial_count(stack: &ArrayView3<'_, Complex64>) -> Result<usize> {
    match stack.len_of(Axis(0)) {
        0 => Err(TfrError::NoTrials),
        n => Ok(n),
    }
}
