//! Error type shared by filter design and filter application.
use thiserror::Error;

use crate::filter::FilterBandType;

pub type Result<T> = std::result::Result<T, FilterError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("invalid filter order {order}: order must be at least 1")]
    InvalidOrder { order: usize },

    #[error("invalid {band_type:?} band: low cutoff {low} Hz, high cutoff {high} Hz")]
    InvalidBand {
        band_type: FilterBandType,
        low: f64,
        high: f64,
    },

    #[error("invalid sample rate {sample_rate} Hz: {reason}")]
    InvalidSampleRate {
        sample_rate: f64,
        reason: &'static str,
    },

    #[error("filter has not been designed")]
    UndesignedFilter,

    #[error("index increment must be non-zero")]
    InvalidStride,

    #[error("{len} samples at offset {offset} with increment {increment} do not fit in a buffer of {buffer_len}")]
    InvalidRange {
        offset: usize,
        len: usize,
        increment: usize,
        buffer_len: usize,
    },

    #[error("invalid second-order-section coefficients: {0}")]
    InvalidCoefficients(String),
}
