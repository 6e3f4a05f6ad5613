//! Second-order-section coefficient storage.
use itertools::izip;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};

/// Coefficients of a cascade of second-order sections.
///
/// Section `i` occupies `numerator[3i..3i+3]` (`b0, b1, b2`) and
/// `denominator[3i..3i+3]` (`a0, a1, a2`). Both vectors always hold exactly
/// `3 * num_sos()` values. `group_delay` is in seconds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSosParameters", into = "RawSosParameters"))]
pub struct SosParameters {
    numerator: Vec<f64>,
    denominator: Vec<f64>,
    is_designed: bool,
    group_delay: f64,
}

impl Default for SosParameters {
    fn default() -> Self {
        SosParameters::undesigned()
    }
}

impl SosParameters {
    /// Parameters of a filter that has not been designed yet.
    pub fn undesigned() -> SosParameters {
        SosParameters {
            numerator: Vec::new(),
            denominator: Vec::new(),
            is_designed: false,
            group_delay: 0.0,
        }
    }

    /// Builds parameters from flat coefficient arrays, e.g. coefficients
    /// designed elsewhere. The arrays must hold `3 * num_sos` values each and a
    /// designed section must have a non-zero `a0`.
    pub fn from_parts(
        numerator: Vec<f64>,
        denominator: Vec<f64>,
        num_sos: usize,
        is_designed: bool,
        group_delay: f64,
    ) -> Result<SosParameters> {
        let size = num_sos.checked_mul(3).ok_or_else(|| {
            FilterError::InvalidCoefficients(format!("section count {} is too large", num_sos))
        })?;
        if numerator.len() != size || denominator.len() != size {
            return Err(FilterError::InvalidCoefficients(format!(
                "expected {} numerator and denominator values for {} sections, got {} and {}",
                size,
                num_sos,
                numerator.len(),
                denominator.len()
            )));
        }
        if is_designed {
            if let Some(i) = denominator.chunks(3).position(|a| a[0] == 0.0 || !a[0].is_finite()) {
                return Err(FilterError::InvalidCoefficients(format!(
                    "section {} has a zero or non-finite leading denominator coefficient",
                    i
                )));
            }
        }
        Ok(SosParameters {
            numerator,
            denominator,
            is_designed,
            group_delay,
        })
    }

    pub(crate) fn designed(sections: &[Section], group_delay: f64) -> SosParameters {
        let mut numerator = Vec::with_capacity(sections.len() * 3);
        let mut denominator = Vec::with_capacity(sections.len() * 3);
        for section in sections {
            numerator.extend_from_slice(&section.b);
            denominator.extend_from_slice(&section.a);
        }
        SosParameters {
            numerator,
            denominator,
            is_designed: true,
            group_delay,
        }
    }

    pub fn is_designed(&self) -> bool {
        self.is_designed
    }

    pub fn num_sos(&self) -> usize {
        self.numerator.len() / 3
    }

    pub fn numerator(&self) -> &[f64] {
        &self.numerator
    }

    pub fn denominator(&self) -> &[f64] {
        &self.denominator
    }

    /// Group delay in seconds.
    pub fn group_delay(&self) -> f64 {
        self.group_delay
    }

    /// Iterates over `(b, a)` coefficient triples, one per section.
    pub fn sections(&self) -> impl Iterator<Item = (&[f64], &[f64])> {
        izip!(self.numerator.chunks(3), self.denominator.chunks(3))
    }

    /// Appends another cascade's sections after this one's and adds its delay.
    pub(crate) fn append(&mut self, other: &SosParameters) {
        self.numerator.extend_from_slice(&other.numerator);
        self.denominator.extend_from_slice(&other.denominator);
        self.group_delay += other.group_delay;
    }

    pub(crate) fn set_group_delay(&mut self, group_delay: f64) {
        self.group_delay = group_delay;
    }

    pub(crate) fn mark_designed(&mut self) {
        self.is_designed = true;
    }
}

/// One digital second-order section, `a[0]` normalized to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Section {
    pub b: [f64; 3],
    pub a: [f64; 3],
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSosParameters {
    sos_numerator: Vec<f64>,
    sos_denominator: Vec<f64>,
    number_of_sos: usize,
    is_designed: bool,
    group_delay: f64,
}

#[cfg(feature = "serde")]
impl std::convert::TryFrom<RawSosParameters> for SosParameters {
    type Error = FilterError;

    fn try_from(raw: RawSosParameters) -> Result<SosParameters> {
        SosParameters::from_parts(
            raw.sos_numerator,
            raw.sos_denominator,
            raw.number_of_sos,
            raw.is_designed,
            raw.group_delay,
        )
    }
}

#[cfg(feature = "serde")]
impl From<SosParameters> for RawSosParameters {
    fn from(sos: SosParameters) -> RawSosParameters {
        RawSosParameters {
            number_of_sos: sos.num_sos(),
            sos_numerator: sos.numerator,
            sos_denominator: sos.denominator,
            is_designed: sos.is_designed,
            group_delay: sos.group_delay,
        }
    }
}

/// ------------------------------------------------------------------------------------------------
/// Module unit tests
/// ------------------------------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_must_match_section_count() {
        let err = SosParameters::from_parts(vec![1.0, 0.0, 0.0], vec![1.0, 0.0], 1, true, 0.0);
        assert!(matches!(err, Err(FilterError::InvalidCoefficients(_))));

        let err = SosParameters::from_parts(vec![1.0; 3], vec![1.0; 3], 2, false, 0.0);
        assert!(matches!(err, Err(FilterError::InvalidCoefficients(_))));
    }

    #[test]
    fn test_oversized_section_count_rejected() {
        let err = SosParameters::from_parts(Vec::new(), Vec::new(), usize::max_value() / 2, false, 0.0);
        assert!(matches!(err, Err(FilterError::InvalidCoefficients(_))));
    }

    #[test]
    fn test_designed_sections_need_leading_denominator() {
        let err = SosParameters::from_parts(
            vec![1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
            vec![1.0, 0.5, 0.0, 0.0, 0.5, 0.0],
            2,
            true,
            0.0,
        );
        assert!(matches!(err, Err(FilterError::InvalidCoefficients(_))));

        // undesigned placeholders may carry zeroed coefficients
        let zeroed = SosParameters::from_parts(vec![0.0; 6], vec![0.0; 6], 2, false, 0.0).unwrap();
        assert!(!zeroed.is_designed());
        assert_eq!(zeroed.num_sos(), 2);
    }

    #[test]
    fn test_append_concatenates_in_order() {
        let mut first =
            SosParameters::from_parts(vec![1.0, 2.0, 3.0], vec![1.0, 0.1, 0.2], 1, true, 0.5).unwrap();
        let second =
            SosParameters::from_parts(vec![4.0, 5.0, 6.0], vec![1.0, 0.3, 0.4], 1, true, 0.25).unwrap();
        first.append(&second);

        assert_eq!(first.num_sos(), 2);
        assert_eq!(first.numerator(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(first.denominator(), &[1.0, 0.1, 0.2, 1.0, 0.3, 0.4]);
        assert_eq!(first.group_delay(), 0.75);
        let sections: Vec<_> = first.sections().collect();
        assert_eq!(sections[1], (&[4.0, 5.0, 6.0][..], &[1.0, 0.3, 0.4][..]));
    }

    #[test]
    fn test_default_is_undesigned() {
        let sos = SosParameters::default();
        assert!(!sos.is_designed());
        assert_eq!(sos.num_sos(), 0);
        assert!(sos.numerator().is_empty());
    }
}
