//! Channel selection
//!
//! Maps a channel name onto the (trial × sample) slice of the epoch tensor.

use ndarray::{Array2, Axis};

use crate::epochs::EpochSource;
use crate::error::{Result, TfrError};

/// Position of `name` in the channel registry (exact match, first hit).
pub fn channel_index(ch_names: &[String], name: &str) -> Result<usize> {
    ch_names
        .iter()
        .position(|candidate| candidate == name)
        .ok_or_else(|| TfrError::ChannelNotFound {
            name: name.to_string(),
        })
}

/// Extract the (trial, sample) data of one channel.
///
/// The name is resolved before the tensor is requested, so an unknown
/// channel never touches the data.
pub fn select_channel<E: EpochSource + ?Sized>(epochs: &E, name: &str) -> Result<Array2<f64>> {
    let index = channel_index(epochs.ch_names(), name)?;
    let data = epochs.data();
    Ok(data.index_axis(Axis(1), index).to_owned())
}
