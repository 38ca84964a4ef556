//! Continuous Wavelet Transform using Morlet Wavelets
//!
//! The Morlet wavelet is a complex sinusoid modulated by a Gaussian:
//! ```text
//! ψ(t) = π^(-1/4) * exp(iω₀t) * exp(-t²/2)
//! ```
//!
//! The transform is computed by convolution in the frequency domain. The
//! signal spectrum is computed once and multiplied by the analytic Morlet
//! spectrum of every requested frequency:
//! ```text
//! Ψ̂(sω) = π^(-1/4) * exp(-0.5 * (s*ω - ω₀)²) * √s,   s = ω₀·fs / (2π·f)
//! ```
//!
//! # References
//! - Morlet et al. (1982): Original wavelet formulation
//! - Torrence & Compo (1998): A Practical Guide to Wavelet Analysis

use ndarray::{Array2, ArrayView1};
use num_complex::Complex64;
use rustfft::FftPlanner;
use std::f64::consts::PI;

use super::{Wavelet, WaveletError};
use crate::config::MorletConfig;

/// Morlet wavelet bound to a sample rate
#[derive(Debug, Clone)]
pub struct Morlet {
    config: MorletConfig,
    sample_rate: f64,
}

impl Morlet {
    /// Build a Morlet wavelet for signals sampled at `sample_rate` Hz.
    pub fn new(config: MorletConfig, sample_rate: f64) -> Result<Self, WaveletError> {
        config
            .validate()
            .map_err(|e| WaveletError::InvalidConfig(e.to_string()))?;
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(WaveletError::InvalidConfig(format!(
                "sample rate must be positive, got {}",
                sample_rate
            )));
        }
        Ok(Self {
            config,
            sample_rate,
        })
    }

    pub fn config(&self) -> &MorletConfig {
        &self.config
    }

    /// Convert scale (in samples) to frequency
    pub fn scale_to_frequency(&self, scale: f64) -> f64 {
        self.config.omega0 * self.sample_rate / (2.0 * PI * scale)
    }

    /// Convert frequency to scale (in samples)
    pub fn frequency_to_scale(&self, freq: f64) -> f64 {
        self.config.omega0 * self.sample_rate / (2.0 * PI * freq)
    }

    /// Morlet wavelet in frequency domain for a given scale.
    /// Positive frequencies only (analytic wavelet).
    fn morlet_fft(&self, n: usize, scale: f64) -> Vec<Complex64> {
        let omega0 = self.config.omega0;
        let mut wavelet = vec![Complex64::new(0.0, 0.0); n];

        for (k, bin) in wavelet.iter_mut().enumerate().take(n / 2 + 1).skip(1) {
            // Angular frequency of bin k in radians per sample
            let omega = 2.0 * PI * k as f64 / n as f64;
            let exponent = -0.5 * (scale * omega - omega0).powi(2);
            let amplitude = PI.powf(-0.25) * exponent.exp();

            *bin = Complex64::new(amplitude * scale.sqrt(), 0.0);
        }

        wavelet
    }
}

impl Wavelet for Morlet {
    fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    fn transform(
        &self,
        samples: ArrayView1<'_, f64>,
        freqs: &[f64],
    ) -> Result<Array2<Complex64>, WaveletError> {
        let n = samples.len();
        if n == 0 {
            return Err(WaveletError::EmptySignal);
        }
        if let Some(&bad) = freqs.iter().find(|f| !f.is_finite() || **f <= 0.0) {
            return Err(WaveletError::InvalidFrequency(bad));
        }

        let nyquist = self.sample_rate / 2.0;
        if let Some(&above) = freqs.iter().find(|&&f| f > nyquist) {
            log::warn!(
                "Morlet frequency {} Hz exceeds Nyquist ({} Hz); coefficients will be ~0",
                above,
                nyquist
            );
        }

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(n);
        let ifft = planner.plan_fft_inverse(n);

        // Signal spectrum, shared by every frequency
        let mut signal_fft: Vec<Complex64> =
            samples.iter().map(|&x| Complex64::new(x, 0.0)).collect();
        fft.process(&mut signal_fft);

        let norm = 1.0 / n as f64;
        let mut result = Array2::zeros((freqs.len(), n));

        for (mut row, &freq) in result.outer_iter_mut().zip(freqs) {
            let wavelet_fft = self.morlet_fft(n, self.frequency_to_scale(freq));

            let mut coeffs: Vec<Complex64> = signal_fft
                .iter()
                .zip(wavelet_fft.iter())
                .map(|(s, w)| s * w)
                .collect();
            ifft.process(&mut coeffs);

            for (dst, c) in row.iter_mut().zip(coeffs) {
                *dst = c * norm;
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    fn sine(freq: f64, fs: f64, n: usize, phase: f64) -> Array1<f64> {
        Array1::from_shape_fn(n, |i| (2.0 * PI * freq * i as f64 / fs + phase).sin())
    }

    fn mean_power(row: ndarray::ArrayView1<'_, Complex64>) -> f64 {
        row.iter().map(|c| c.norm_sqr()).sum::<f64>() / row.len() as f64
    }

    #[test]
    fn test_new_validates() {
        assert!(Morlet::new(MorletConfig::default(), 250.0).is_ok());
        assert!(Morlet::new(MorletConfig::default(), 0.0).is_err());
        assert!(Morlet::new(MorletConfig::default(), f64::NAN).is_err());
        assert!(Morlet::new(MorletConfig { omega0: 0.0 }, 250.0).is_err());
    }

    #[test]
    fn test_scale_frequency_conversion() {
        let morlet = Morlet::new(MorletConfig::default(), 100.0).unwrap();

        let freq = 12.5;
        let scale = morlet.frequency_to_scale(freq);
        let freq_back = morlet.scale_to_frequency(scale);

        assert!(
            (freq - freq_back).abs() < 1e-9,
            "Expected {}, got {}",
            freq,
            freq_back
        );
    }

    #[test]
    fn test_output_shape() {
        let morlet = Morlet::new(MorletConfig::default(), 100.0).unwrap();
        let signal = sine(5.0, 100.0, 150, 0.0);

        let result = morlet.transform(signal.view(), &[2.0, 5.0, 9.0, 13.0]).unwrap();
        assert_eq!(result.dim(), (4, 150));
    }

    #[test]
    fn test_detects_frequency() {
        let fs = 100.0;
        let morlet = Morlet::new(MorletConfig::default(), fs).unwrap();

        // 2 seconds of 10 Hz: an integer number of cycles
        let signal = sine(10.0, fs, 200, 0.0);
        let frequencies = [5.0, 10.0, 20.0];
        let result = morlet.transform(signal.view(), &frequencies).unwrap();

        let powers: Vec<f64> = result.outer_iter().map(mean_power).collect();
        assert!(
            powers[1] > powers[0] && powers[1] > powers[2],
            "10 Hz should dominate: {:?}",
            powers
        );
        assert!(result.row(1).iter().all(|c| c.norm() > 0.1));
    }

    #[test]
    fn test_phase_follows_signal() {
        let fs = 100.0;
        let morlet = Morlet::new(MorletConfig::default(), fs).unwrap();

        let a = morlet.transform(sine(10.0, fs, 200, 0.0).view(), &[10.0]).unwrap();
        let b = morlet
            .transform(sine(10.0, fs, 200, PI / 2.0).view(), &[10.0])
            .unwrap();

        let mid = 100;
        let mut dphi = b[[0, mid]].arg() - a[[0, mid]].arg();
        if dphi < -PI {
            dphi += 2.0 * PI;
        }
        assert!((dphi - PI / 2.0).abs() < 1e-3, "phase shift {}", dphi);
    }

    #[test]
    fn test_single_signal_power_and_magnitude() {
        let morlet = Morlet::new(MorletConfig::default(), 100.0).unwrap();
        let signal = sine(8.0, 100.0, 100, 0.3);
        let freqs = [4.0, 8.0];

        let coeffs = morlet.transform(signal.view(), &freqs).unwrap();
        let power = morlet.power(signal.view(), &freqs).unwrap();
        let magnitude = morlet.magnitude(signal.view(), &freqs).unwrap();

        for ((c, p), m) in coeffs.iter().zip(power.iter()).zip(magnitude.iter()) {
            assert_eq!(*p, c.norm().powi(2));
            assert_eq!(*m, c.norm());
        }
    }

    #[test]
    fn test_rejects_bad_input() {
        let morlet = Morlet::new(MorletConfig::default(), 100.0).unwrap();
        let empty = Array1::<f64>::zeros(0);
        assert!(matches!(
            morlet.transform(empty.view(), &[1.0]),
            Err(WaveletError::EmptySignal)
        ));

        let signal = sine(5.0, 100.0, 64, 0.0);
        assert!(matches!(
            morlet.transform(signal.view(), &[5.0, -1.0]),
            Err(WaveletError::InvalidFrequency(f)) if f == -1.0
        ));
    }
}
