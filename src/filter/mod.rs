//! IIR filter design and second-order-section filtering
use itertools::izip;

use crate::view::{Direction, StridedView};

pub mod apply;
pub mod bilinear;
pub mod design;
pub mod iir;
pub mod prototype;
pub mod sos;
pub mod transform;
pub mod types;
pub mod warp;

pub use apply::{
    apply_cascade_to_buffer, apply_description, apply_to_buffer, apply_with_options, cosine_taper,
    ApplyOptions, TAPER_FRACTION,
};
pub use design::{design_cascade, design_single_filter};
pub use sos::SosParameters;
pub use types::{FilterBandType, FilterDefinition, FilterDesignModel, LinearFilterDescription};

/// Defines shared behavior for all filter implementations.
pub trait Filter {
    /// Process a single real sample.
    fn process_one(&mut self, in_samp: f64) -> f64;

    /// Processes a slice of samples.
    /// The default implementation simply calls process_one for each input sample,
    /// which is sufficient for most implementations.
    fn process(&mut self, input: &[f64], output: &mut [f64]) {
        assert_eq!(input.len(), output.len());
        for (in_samp, out_samp) in izip!(input.iter(), output.iter_mut()) {
            *out_samp = self.process_one(*in_samp);
        }
    }

    /// Filters the samples addressed by `view` in place, visiting them in
    /// `direction` order.
    fn process_strided(&mut self, view: &mut StridedView<'_>, direction: Direction) {
        for i in view.indices(direction) {
            let out = self.process_one(view[i]);
            view[i] = out;
        }
    }
}
