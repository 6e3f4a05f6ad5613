//! Running designed second-order-section cascades over sample buffers.
//!
//! Every entry point validates its inputs (designed coefficients, stride,
//! addressed range) before the first sample is written. Section registers
//! start at zero for each directional pass and never outlive the call.
use std::f64::consts::PI;

use log::debug;

use super::iir::Biquad;
use super::sos::SosParameters;
use super::types::{FilterDefinition, LinearFilterDescription};
use super::Filter;
use crate::error::{FilterError, Result};
use crate::view::{Direction, StridedView};

/// Share of the addressed samples tapered at each end of the buffer.
pub const TAPER_FRACTION: f64 = 0.05;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Forward pass followed by a reverse pass.
    pub zero_phase: bool,
    /// Cosine taper both ends before filtering.
    pub taper: bool,
}

/// Applies `sos` to `num_data` samples of `data` starting at `index_offset`
/// and stepping by `index_inc`.
pub fn apply_to_buffer(
    sos: &SosParameters,
    data: &mut [f64],
    num_data: usize,
    index_offset: usize,
    index_inc: usize,
    zero_phase: bool,
) -> Result<()> {
    if !sos.is_designed() {
        return Err(FilterError::UndesignedFilter);
    }
    let mut view = StridedView::new(data, num_data, index_offset, index_inc)?;
    apply_with_options(
        sos,
        &mut view,
        ApplyOptions {
            zero_phase,
            taper: false,
        },
    )
}

/// Applies a designed description using its own zero-phase and taper flags.
pub fn apply_description(
    description: &LinearFilterDescription,
    data: &mut [f64],
    num_data: usize,
    index_offset: usize,
    index_inc: usize,
) -> Result<()> {
    if !description.is_designed() {
        return Err(FilterError::UndesignedFilter);
    }
    let mut view = StridedView::new(data, num_data, index_offset, index_inc)?;
    apply_with_options(
        description.parameters(),
        &mut view,
        ApplyOptions {
            zero_phase: description.zero_phase(),
            taper: description.taper(),
        },
    )
}

/// Applies the composite sections of a designed definition in one pass.
/// Zero-phase and taper apply to the whole cascade if any member asks for them.
pub fn apply_cascade_to_buffer(
    definition: &FilterDefinition,
    data: &mut [f64],
    num_data: usize,
    index_offset: usize,
    index_inc: usize,
) -> Result<()> {
    if !definition.is_designed() {
        return Err(FilterError::UndesignedFilter);
    }
    let mut view = StridedView::new(data, num_data, index_offset, index_inc)?;
    apply_with_options(
        definition.cascaded_parameters(),
        &mut view,
        ApplyOptions {
            zero_phase: definition.zero_phase(),
            taper: definition.taper(),
        },
    )
}

/// Filters the samples addressed by `view` in place.
pub fn apply_with_options(
    sos: &SosParameters,
    view: &mut StridedView<'_>,
    options: ApplyOptions,
) -> Result<()> {
    if !sos.is_designed() {
        return Err(FilterError::UndesignedFilter);
    }
    let mut stages = sos
        .sections()
        .map(|(b, a)| Biquad::new(b, a))
        .collect::<Result<Vec<_>>>()?;

    if options.taper {
        cosine_taper(view, TAPER_FRACTION);
    }

    run_stages(&mut stages, view, Direction::Forward);
    if options.zero_phase {
        stages.iter_mut().for_each(Biquad::reset);
        run_stages(&mut stages, view, Direction::Reverse);
    }

    debug!(
        "applied {} sections to {} samples (zero phase: {}, taper: {})",
        stages.len(),
        view.len(),
        options.zero_phase,
        options.taper
    );
    Ok(())
}

fn run_stages(stages: &mut [Biquad], view: &mut StridedView<'_>, direction: Direction) {
    for stage in stages.iter_mut() {
        stage.process_strided(view, direction);
    }
}

/// Multiplies `fraction` of the samples at each end by a rising/falling
/// half-cosine, from zero at the outermost sample.
pub fn cosine_taper(view: &mut StridedView<'_>, fraction: f64) {
    let n = view.len();
    let width = ((n as f64 * fraction) as usize).min(n / 2);
    if width == 0 {
        return;
    }
    for i in 0..width {
        let weight = 0.5 * (1.0 - (PI * i as f64 / width as f64).cos());
        view[i] *= weight;
        view[n - 1 - i] *= weight;
    }
}
