//! Trial-wise wavelet transform of epoched data
//!
//! [`EpochsWavelet`] ties an [`EpochSource`] to a [`Wavelet`] bound to the
//! same sample rate and exposes three operations on one channel:
//! - `cwt`: one complex `[freq][time]` surface per trial, stacked as `[trial][freq][time]`
//! - `power`: trial-averaged power
//! - `itc`: inter-trial phase coherence
//!
//! Every call recomputes the transform from the current epoch data. Nothing
//! is cached between calls.

use ndarray::{Array2, Array3, ArrayView1, ArrayView2, Axis};
use num_complex::Complex64;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::aggregate;
use crate::channel::select_channel;
use crate::config::EngineConfig;
use crate::epochs::EpochSource;
use crate::error::{Result, TfrError};
use crate::frequencies::FrequencyAxis;
use crate::wavelet::{Wavelet, WaveletError};

/// Relative tolerance when comparing the wavelet and epoch sample rates
const SAMPLE_RATE_RTOL: f64 = 1e-9;

/// Wavelet analysis of an epoched recording
pub struct EpochsWavelet<'a, E: EpochSource + ?Sized, W: Wavelet> {
    epochs: &'a E,
    wavelet: W,
    config: EngineConfig,
}

impl<E: EpochSource + ?Sized, W: Wavelet> std::fmt::Debug for EpochsWavelet<'_, E, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EpochsWavelet")
            .field("ch_names", &self.epochs.ch_names())
            .field("sample_rate", &self.wavelet.sample_rate())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a, E: EpochSource + ?Sized, W: Wavelet> EpochsWavelet<'a, E, W> {
    /// Attach a wavelet to epochs. The wavelet must already be built for the
    /// epochs' sample rate.
    pub fn new(epochs: &'a E, wavelet: W) -> Result<Self> {
        Self::with_config(epochs, wavelet, EngineConfig::default())
    }

    pub fn with_config(epochs: &'a E, wavelet: W, config: EngineConfig) -> Result<Self> {
        let expected = epochs.sample_rate();
        let bound = wavelet.sample_rate();
        let valid = |rate: f64| rate.is_finite() && rate > 0.0;
        if !valid(expected)
            || !valid(bound)
            || (bound - expected).abs() > SAMPLE_RATE_RTOL * bound.max(expected)
        {
            return Err(TfrError::SampleRateMismatch {
                wavelet: bound,
                epochs: expected,
            });
        }

        if config.parallel && !cfg!(feature = "parallel") {
            log::warn!("Parallel trial transform requested but the `parallel` feature is disabled");
        }

        Ok(Self {
            epochs,
            wavelet,
            config,
        })
    }

    /// Build the wavelet for the epochs' sample rate and attach it.
    pub fn bind<F>(epochs: &'a E, build: F) -> Result<Self>
    where
        F: FnOnce(f64) -> std::result::Result<W, WaveletError>,
    {
        let wavelet = build(epochs.sample_rate()).map_err(TfrError::Binding)?;
        Self::new(epochs, wavelet)
    }

    pub fn epochs(&self) -> &E {
        self.epochs
    }

    pub fn wavelet(&self) -> &W {
        &self.wavelet
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Transform every trial of `ch_name`.
    ///
    /// Returns `[trial][freq][time]` in source trial order. Fails as a whole
    /// if any single trial fails.
    pub fn cwt(&self, ch_name: &str, freqs: &FrequencyAxis) -> Result<Array3<Complex64>> {
        let waves = select_channel(self.epochs, ch_name)?;
        if waves.nrows() == 0 {
            return Err(TfrError::NoTrials);
        }

        log::debug!(
            "CWT of channel '{}': {} trials x {} samples at {} frequencies",
            ch_name,
            waves.nrows(),
            waves.ncols(),
            freqs.len()
        );

        let surfaces = self.transform_trials(waves.view(), freqs.as_slice())?;
        stack_trials(&surfaces)
    }

    /// Trial-averaged power `mean_trial(|W|²)` as `[freq][time]`.
    pub fn power(&self, ch_name: &str, freqs: &FrequencyAxis) -> Result<Array2<f64>> {
        let stack = self.cwt(ch_name, freqs)?;
        aggregate::power(stack.view())
    }

    /// Inter-trial coherence `|mean_trial(W / |W|)|` as `[freq][time]`.
    pub fn itc(&self, ch_name: &str, freqs: &FrequencyAxis) -> Result<Array2<f64>> {
        let stack = self.cwt(ch_name, freqs)?;
        aggregate::itc(stack.view())
    }

    fn transform_trials(
        &self,
        waves: ArrayView2<'_, f64>,
        freqs: &[f64],
    ) -> Result<Vec<Array2<Complex64>>> {
        let wavelet = &self.wavelet;

        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                // Indexed collect keeps source trial order
                let trials: Vec<ArrayView1<'_, f64>> = waves.outer_iter().collect();
                return trials
                    .into_par_iter()
                    .enumerate()
                    .map(|(trial, wave)| transform_trial(wavelet, trial, wave, freqs))
                    .collect();
            }
        }

        waves
            .outer_iter()
            .enumerate()
            .map(|(trial, wave)| transform_trial(wavelet, trial, wave, freqs))
            .collect()
    }
}

fn transform_trial<W: Wavelet>(
    wavelet: &W,
    trial: usize,
    wave: ArrayView1<'_, f64>,
    freqs: &[f64],
) -> Result<Array2<Complex64>> {
    wavelet
        .transform(wave, freqs)
        .map_err(|source| TfrError::TransformFailure { trial, source })
}

/// Stack per-trial surfaces along a new leading trial axis.
fn stack_trials(surfaces: &[Array2<Complex64>]) -> Result<Array3<Complex64>> {
    let first = surfaces.first().ok_or(TfrError::NoTrials)?;
    let expected = first.shape();

    if let Some((trial, surface)) = surfaces
        .iter()
        .enumerate()
        .find(|(_, s)| s.shape() != expected)
    {
        return Err(TfrError::ShapeMismatch {
            trial,
            expected: expected.to_vec(),
            got: surface.shape().to_vec(),
        });
    }

    let views: Vec<_> = surfaces.iter().map(|s| s.view()).collect();
    Ok(ndarray::stack(Axis(0), &views)?)
}
