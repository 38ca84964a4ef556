//! Wavelet transform capability
//!
//! The engine only needs one thing from a wavelet family: turn a 1-D real
//! signal and a list of frequencies into a complex (frequency × time)
//! surface. Any family (Morlet, Morse, Haar, ...) plugs in by implementing
//! [`Wavelet`].
//!
//! - `Morlet` - FFT-based analytic Morlet transform

mod morlet;

pub use morlet::Morlet;

use ndarray::{Array2, ArrayView1};
use num_complex::Complex64;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WaveletError {
    #[error("Cannot transform an empty signal")]
    EmptySignal,
    #[error("Invalid frequency: {0} Hz")]
    InvalidFrequency(f64),
    #[error("Invalid wavelet configuration: {0}")]
    InvalidConfig(String),
    #[error("{0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A wavelet bound to one sample rate.
///
/// The sample rate is fixed when the wavelet is built and never changes
/// afterwards. `Sync` lets trials be transformed concurrently.
pub trait Wavelet: Sync {
    /// Sample rate in Hz this wavelet was built for.
    fn sample_rate(&self) -> f64;

    /// Continuous wavelet transform of `samples` at `freqs`.
    ///
    /// Returns a `[freq_index][time_index]` array. Implementations must
    /// return the same shape for every signal of the same length.
    fn transform(
        &self,
        samples: ArrayView1<'_, f64>,
        freqs: &[f64],
    ) -> Result<Array2<Complex64>, WaveletError>;

    /// Instantaneous power `|W|²` of a single signal.
    fn power(&self, samples: ArrayView1<'_, f64>, freqs: &[f64]) -> Result<Array2<f64>, WaveletError> {
        Ok(self.transform(samples, freqs)?.mapv(|c| c.norm().powi(2)))
    }

    /// Amplitude `|W|` of a single signal.
    fn magnitude(
        &self,
        samples: ArrayView1<'_, f64>,
        freqs: &[f64],
    ) -> Result<Array2<f64>, WaveletError> {
        Ok(self.transform(samples, freqs)?.mapv(|c| c.norm()))
    }
}

impl<W: Wavelet + ?Sized> Wavelet for &W {
    fn sample_rate(&self) -> f64 {
        (**self).sample_rate()
    }

    fn transform(
        &self,
        samples: ArrayView1<'_, f64>,
        freqs: &[f64],
    ) -> Result<Array2<Complex64>, WaveletError> {
        (**self).transform(samples, freqs)
    }
}

impl<W: Wavelet + Send + ?Sized> Wavelet for Arc<W> {
    fn sample_rate(&self) -> f64 {
        (**self).sample_rate()
    }

    fn transform(
        &self,
        samples: ArrayView1<'_, f64>,
        freqs: &[f64],
    ) -> Result<Array2<Complex64>, WaveletError> {
        (**self).transform(samples, freqs)
    }
}
