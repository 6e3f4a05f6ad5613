//! Butterworth IIR filter design and second-order-section filtering.
//!
//! Filters are described by a [`LinearFilterDescription`](filter::LinearFilterDescription)
//! (band type, cutoffs, sample rate, order), designed into a cascade of
//! second-order sections, and applied in place to strided `f64` buffers.
//! Several descriptions can be chained in a [`FilterDefinition`](filter::FilterDefinition)
//! and applied as one cascade.
//!
//! ```
//! use iir_cascade::filter::{apply_description, design_single_filter, FilterBandType, LinearFilterDescription};
//!
//! let desc = LinearFilterDescription::butterworth(FilterBandType::Lowpass, 0.0, 5.0, 100.0, 4);
//! let desc = design_single_filter(desc).unwrap();
//! assert_eq!(desc.parameters().num_sos(), 2);
//!
//! let mut data = vec![1.0; 100];
//! apply_description(&desc, &mut data, 100, 0, 1).unwrap();
//! assert!(data.iter().all(|x| x.is_finite()));
//! ```
pub mod error;
pub mod filter;
pub mod view;

pub use error::{FilterError, Result};
