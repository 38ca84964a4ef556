//! Error types for trial-wise time-frequency computations.

use thiserror::Error;

use crate::wavelet::WaveletError;

pub type Result<T> = std::result::Result<T, TfrError>;

#[derive(Error, Debug)]
pub enum TfrError {
    #[error("Channel '{name}' not found")]
    ChannelNotFound { name: String },

    #[error("Wavelet transform failed on trial {trial}: {source}")]
    TransformFailure {
        trial: usize,
        #[source]
        source: WaveletError,
    },

    #[error("Trial {trial} produced shape {got:?}, expected {expected:?}")]
    ShapeMismatch {
        trial: usize,
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    #[error("No trials to transform")]
    NoTrials,

    #[error("Invalid frequencies: {0}")]
    InvalidFrequencies(String),

    #[error("Invalid epochs: {0}")]
    InvalidEpochs(String),

    #[error("Wavelet bound to {wavelet} Hz but epochs are sampled at {epochs} Hz")]
    SampleRateMismatch { wavelet: f64, epochs: f64 },

    #[error("Wavelet construction failed: {0}")]
    Binding(#[source] WaveletError),

    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
