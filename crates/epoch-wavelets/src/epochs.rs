//! Epoched recordings
//!
//! The engine never owns a recording. It reads one through [`EpochSource`],
//! which exposes the channel registry, the sample rate and the
//! (trial, channel, sample) tensor.

use ndarray::Array3;
use std::borrow::Cow;
use std::collections::HashSet;

use crate::error::{Result, TfrError};

/// Provider of a fixed-shape (trial × channel × sample) tensor.
///
/// Every trial shares the same channel set, sample count and sample rate.
pub trait EpochSource {
    /// Channel names in tensor order (axis 1).
    fn ch_names(&self) -> &[String];

    /// Sample rate in Hz, shared by all trials.
    fn sample_rate(&self) -> f64;

    /// Full (trial, channel, sample) tensor. May be recomputed on every call.
    fn data(&self) -> Cow<'_, Array3<f64>>;
}

/// In-memory epochs
#[derive(Debug, Clone)]
pub struct Epochs {
    data: Array3<f64>,
    ch_names: Vec<String>,
    sample_rate: f64,
}

impl Epochs {
    /// Wrap a (trial, channel, sample) tensor.
    ///
    /// Fails if the channel names do not match axis 1, contain duplicates, or
    /// the sample rate is not a positive finite number.
    pub fn new<S: Into<String>>(
        data: Array3<f64>,
        ch_names: impl IntoIterator<Item = S>,
        sample_rate: f64,
    ) -> Result<Self> {
        let ch_names: Vec<String> = ch_names.into_iter().map(Into::into).collect();

        if ch_names.len() != data.dim().1 {
            return Err(TfrError::InvalidEpochs(format!(
                "{} channel names for {} channels",
                ch_names.len(),
                data.dim().1
            )));
        }
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(TfrError::InvalidEpochs(format!(
                "sample rate must be positive, got {}",
                sample_rate
            )));
        }
        let mut seen = HashSet::with_capacity(ch_names.len());
        if let Some(dup) = ch_names.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(TfrError::InvalidEpochs(format!(
                "duplicate channel name '{}'",
                dup
            )));
        }

        Ok(Self {
            data,
            ch_names,
            sample_rate,
        })
    }

    pub fn n_trials(&self) -> usize {
        self.data.dim().0
    }

    pub fn n_channels(&self) -> usize {
        self.data.dim().1
    }

    pub fn n_samples(&self) -> usize {
        self.data.dim().2
    }

    pub fn into_data(self) -> Array3<f64> {
        self.data
    }
}

impl EpochSource for Epochs {
    fn ch_names(&self) -> &[String] {
        &self.ch_names
    }

    fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    fn data(&self) -> Cow<'_, Array3<f64>> {
        Cow::Borrowed(&self.data)
    }
}
