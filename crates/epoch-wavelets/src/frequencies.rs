//! Frequency axis at which transforms are evaluated.

use std::ops::Range;

use crate::error::{Result, TfrError};

/// Upper bound on generated axis lengths
pub const MAX_FREQUENCIES: usize = 1 << 20;

/// Ordered, non-empty list of positive finite frequencies in Hz.
///
/// Order and duplicates are kept exactly as given; row `i` of every surface
/// computed with this axis corresponds to `as_slice()[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyAxis {
    freqs: Vec<f64>,
}

impl FrequencyAxis {
    pub fn new(freqs: impl Into<Vec<f64>>) -> Result<Self> {
        let freqs = freqs.into();
        if freqs.is_empty() {
            return Err(TfrError::InvalidFrequencies("axis is empty".to_string()));
        }
        if let Some(bad) = freqs.iter().find(|f| !f.is_finite() || **f <= 0.0) {
            return Err(TfrError::InvalidFrequencies(format!(
                "{} is not a positive finite frequency",
                bad
            )));
        }
        Ok(Self { freqs })
    }

    /// `start, start + step, ...` strictly below `stop`.
    pub fn arange(start: f64, stop: f64, step: f64) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(TfrError::InvalidFrequencies(format!(
                "step must be positive, got {}",
                step
            )));
        }
        let count = ((stop - start) / step).ceil();
        if !count.is_finite() || count < 1.0 {
            return Err(TfrError::InvalidFrequencies(format!(
                "empty range {}..{}",
                start, stop
            )));
        }
        if count > MAX_FREQUENCIES as f64 {
            return Err(TfrError::InvalidFrequencies(format!(
                "range {}..{} step {} exceeds {} frequencies",
                start, stop, step, MAX_FREQUENCIES
            )));
        }
        Self::new(
            (0..count as usize)
                .map(|i| start + i as f64 * step)
                .collect::<Vec<_>>(),
        )
    }

    /// `num` evenly spaced values from `start` to `stop` inclusive.
    pub fn linspace(start: f64, stop: f64, num: usize) -> Result<Self> {
        match num {
            0 => Err(TfrError::InvalidFrequencies("axis is empty".to_string())),
            n if n > MAX_FREQUENCIES => Err(TfrError::InvalidFrequencies(format!(
                "{} frequencies exceeds {}",
                n, MAX_FREQUENCIES
            ))),
            1 => Self::new(vec![start]),
            _ => {
                let step = (stop - start) / (num - 1) as f64;
                let mut freqs: Vec<f64> = (0..num).map(|i| start + i as f64 * step).collect();
                freqs[num - 1] = stop;
                Self::new(freqs)
            }
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.freqs
    }

    pub fn len(&self) -> usize {
        self.freqs.len()
    }

    /// Always false for a constructed axis.
    pub fn is_empty(&self) -> bool {
        self.freqs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.freqs.iter()
    }
}

impl AsRef<[f64]> for FrequencyAxis {
    fn as_ref(&self) -> &[f64] {
        &self.freqs
    }
}

impl TryFrom<Vec<f64>> for FrequencyAxis {
    type Error = TfrError;

    fn try_from(freqs: Vec<f64>) -> Result<Self> {
        Self::new(freqs)
    }
}

impl TryFrom<&[f64]> for FrequencyAxis {
    type Error = TfrError;

    fn try_from(freqs: &[f64]) -> Result<Self> {
        Self::new(freqs.to_vec())
    }
}

impl TryFrom<Range<u32>> for FrequencyAxis {
    type Error = TfrError;

    fn try_from(range: Range<u32>) -> Result<Self> {
        Self::new(range.map(f64::from).collect::<Vec<_>>())
    }
}
