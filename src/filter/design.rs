//! Single filter and cascade design.
//!
//! A description is designed by building its analog lowpass prototype,
//! pre-warping its cutoffs, moving the prototype to the requested band and
//! mapping the analog sections to digital ones with the bilinear transform.
use log::{debug, trace, warn};

use super::bilinear::{bilinear, group_delay};
use super::sos::SosParameters;
use super::transform::{check_band, transform};
use super::types::{FilterBandType, FilterDefinition, LinearFilterDescription};
use super::warp::{check_sample_rate, tangent_warp};
use crate::error::Result;

/// Designs `description` and returns it carrying its sections.
pub fn design_single_filter(mut description: LinearFilterDescription) -> Result<LinearFilterDescription> {
    description.design()?;
    Ok(description)
}

/// Designs every member of `definition` and returns it carrying the
/// composite sections.
pub fn design_cascade(mut definition: FilterDefinition) -> Result<FilterDefinition> {
    definition.design()?;
    Ok(definition)
}

impl LinearFilterDescription {
    /// Designs the filter in place. On failure the description is left as it
    /// was.
    pub fn design(&mut self) -> Result<&SosParameters> {
        self.parameters = design_parameters(self)?;
        Ok(&self.parameters)
    }
}

impl FilterDefinition {
    /// Designs each member in order and concatenates their sections.
    ///
    /// Members are designed one at a time: if one fails, the members before it
    /// stay designed, the rest are untouched and the composite is left
    /// undesigned.
    pub fn design(&mut self) -> Result<&SosParameters> {
        self.cascaded_parameters = SosParameters::undesigned();

        let mut composite = SosParameters::undesigned();
        for (i, description) in self.filter_descriptions.iter_mut().enumerate() {
            if let Err(err) = description.design() {
                warn!("filter definition '{}': member {} failed to design: {}", self.name, i, err);
                return Err(err);
            }
            composite.append(description.parameters());
        }

        if self.remove_group_delay() {
            composite.set_group_delay(0.0);
        }
        composite.mark_designed();
        debug!(
            "designed filter definition '{}': {} members, {} sections, group delay {:.6} s",
            self.name,
            self.filter_descriptions.len(),
            composite.num_sos(),
            composite.group_delay()
        );

        self.cascaded_parameters = composite;
        Ok(&self.cascaded_parameters)
    }
}

fn design_parameters(description: &LinearFilterDescription) -> Result<SosParameters> {
    let band_type = description.band_type();
    let low = description.cutoff_low();
    let high = description.cutoff_high();
    let sample_rate = description.sample_rate();

    let prototype = description.design_model().prototype(description.order())?;
    check_band(band_type, low, high)?;
    check_sample_rate(sample_rate)?;

    let (warped_low, warped_high) = match band_type {
        FilterBandType::Lowpass => (0.0, tangent_warp(high, sample_rate)?),
        FilterBandType::Highpass => (tangent_warp(low, sample_rate)?, 0.0),
        FilterBandType::Bandpass | FilterBandType::Bandreject => (
            tangent_warp(low, sample_rate)?,
            tangent_warp(high, sample_rate)?,
        ),
    };

    let analog = transform(&prototype, band_type, warped_low, warped_high)?;
    let sections = bilinear(&analog, sample_rate);

    // delay is measured where the pass band gain is highest
    let reference = match band_type {
        FilterBandType::Lowpass | FilterBandType::Bandreject => 0.0,
        FilterBandType::Highpass => sample_rate / 2.0,
        FilterBandType::Bandpass => (low * high).sqrt(),
    };
    let delay = group_delay(&sections, reference, sample_rate);

    for (i, section) in sections.iter().enumerate() {
        trace!("section {}: b = {:?}, a = {:?}", i, section.b, section.a);
    }
    debug!(
        "designed {:?} {:?} filter: order {}, {} sections, group delay {:.6} s",
        description.design_model(),
        band_type,
        description.order(),
        sections.len(),
        delay
    );

    Ok(SosParameters::designed(&sections, delay))
}
