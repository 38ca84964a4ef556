//! # epoch-wavelets
//!
//! Time-frequency analysis of epoched (trial-structured) recordings.
//!
//! This crate provides:
//! - **Trial-wise CWT**: applies a wavelet transform to every trial of one channel
//! - **Power**: trial-averaged squared magnitude of the transform
//! - **ITC**: inter-trial phase coherence, the magnitude of the mean unit phasor
//!
//! Loading and epoching recordings is left to an [`EpochSource`]; the wavelet
//! kernel is anything implementing [`Wavelet`]. A Morlet transform is bundled.
//!
//! ## Example
//!
//! ```ignore
//! use epoch_wavelets::{Epochs, EpochsWavelet, FrequencyAxis, Morlet, MorletConfig};
//!
//! let epochs = Epochs::new(data, ch_names, 250.0)?;
//! let tfr = EpochsWavelet::bind(&epochs, |sfreq| Morlet::new(MorletConfig::default(), sfreq))?;
//!
//! let freqs = FrequencyAxis::arange(4.0, 40.0, 1.0)?;
//! let power = tfr.power("Cz", &freqs)?; // [freq, time]
//! let itc = tfr.itc("Cz", &freqs)?;     // values in [0, 1]
//! ```

pub mod aggregate;
pub mod channel;
pub mod config;
pub mod engine;
pub mod epochs;
pub mod error;
pub mod frequencies;
pub mod wavelet;

pub use aggregate::{degenerate_points, itc, power};
pub use channel::{channel_index, select_channel};
pub use config::{ConfigError, EngineConfig, MorletConfig, TfrConfig};
pub use engine::EpochsWavelet;
pub use epochs::{EpochSource, Epochs};
pub use error::{Result, TfrError};
pub use frequencies::FrequencyAxis;
pub use wavelet::{Morlet, Wavelet, WaveletError};
