//! Filter descriptions and cascade definitions.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::sos::SosParameters;

/// Pass band shape of a designed filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum FilterBandType {
    Lowpass,
    Highpass,
    Bandpass,
    Bandreject,
}

/// Analog prototype family a filter is designed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum FilterDesignModel {
    Butterworth,
}

/// Design inputs of a single IIR filter together with its designed sections.
///
/// Lowpass filters use `cutoff_high`, highpass filters use `cutoff_low`, band
/// filters use both. All frequencies are in Hz.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LinearFilterDescription {
    design_model: FilterDesignModel,
    band_type: FilterBandType,
    cutoff_low: f64,
    cutoff_high: f64,
    sample_rate: f64,
    order: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    zero_phase: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    taper: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) parameters: SosParameters,
}

impl LinearFilterDescription {
    pub fn new(
        design_model: FilterDesignModel,
        band_type: FilterBandType,
        cutoff_low: f64,
        cutoff_high: f64,
        sample_rate: f64,
        order: usize,
    ) -> LinearFilterDescription {
        LinearFilterDescription {
            design_model,
            band_type,
            cutoff_low,
            cutoff_high,
            sample_rate,
            order,
            zero_phase: false,
            taper: false,
            parameters: SosParameters::undesigned(),
        }
    }

    pub fn butterworth(
        band_type: FilterBandType,
        cutoff_low: f64,
        cutoff_high: f64,
        sample_rate: f64,
        order: usize,
    ) -> LinearFilterDescription {
        LinearFilterDescription::new(
            FilterDesignModel::Butterworth,
            band_type,
            cutoff_low,
            cutoff_high,
            sample_rate,
            order,
        )
    }

    /// Run forward then backward when applied.
    pub fn with_zero_phase(mut self, zero_phase: bool) -> Self {
        self.zero_phase = zero_phase;
        self
    }

    /// Cosine taper the buffer ends before filtering.
    pub fn with_taper(mut self, taper: bool) -> Self {
        self.taper = taper;
        self
    }

    /// Attaches previously designed (or placeholder) coefficients.
    pub fn with_parameters(mut self, parameters: SosParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn design_model(&self) -> FilterDesignModel {
        self.design_model
    }

    pub fn band_type(&self) -> FilterBandType {
        self.band_type
    }

    pub fn cutoff_low(&self) -> f64 {
        self.cutoff_low
    }

    pub fn cutoff_high(&self) -> f64 {
        self.cutoff_high
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn zero_phase(&self) -> bool {
        self.zero_phase
    }

    pub fn taper(&self) -> bool {
        self.taper
    }

    pub fn parameters(&self) -> &SosParameters {
        &self.parameters
    }

    pub fn is_designed(&self) -> bool {
        self.parameters.is_designed()
    }
}

/// An ordered cascade of filter descriptions applied one after another.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FilterDefinition {
    pub(crate) name: String,
    pub(crate) filter_descriptions: Vec<LinearFilterDescription>,
    #[cfg_attr(feature = "serde", serde(default))]
    remove_group_delay: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) cascaded_parameters: SosParameters,
}

impl FilterDefinition {
    pub fn new<S: Into<String>>(name: S, filter_descriptions: Vec<LinearFilterDescription>) -> FilterDefinition {
        FilterDefinition {
            name: name.into(),
            filter_descriptions,
            remove_group_delay: false,
            cascaded_parameters: SosParameters::undesigned(),
        }
    }

    /// Report (and compensate) a zero composite group delay.
    pub fn with_remove_group_delay(mut self, remove_group_delay: bool) -> Self {
        self.remove_group_delay = remove_group_delay;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn filter_descriptions(&self) -> &[LinearFilterDescription] {
        &self.filter_descriptions
    }

    pub fn remove_group_delay(&self) -> bool {
        self.remove_group_delay
    }

    /// Composite parameters of the whole cascade.
    pub fn cascaded_parameters(&self) -> &SosParameters {
        &self.cascaded_parameters
    }

    /// True once the composite has been built from fully designed members.
    pub fn is_designed(&self) -> bool {
        self.cascaded_parameters.is_designed()
            && self.filter_descriptions.iter().all(|d| d.is_designed())
    }

    /// Zero-phase applies to the whole cascade if any member asks for it.
    pub fn zero_phase(&self) -> bool {
        self.filter_descriptions.iter().any(|d| d.zero_phase())
    }

    pub fn taper(&self) -> bool {
        self.filter_descriptions.iter().any(|d| d.taper())
    }
}
