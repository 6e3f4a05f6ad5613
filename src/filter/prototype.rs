//! Normalized lowpass analog prototypes (unit cutoff, 1 rad/s).
use std::f64::consts::PI;

use num_complex::Complex64;

use super::types::FilterDesignModel;
use crate::error::{FilterError, Result};

/// Whether a pole stands alone on the real axis or for a conjugate pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoleKind {
    Real,
    /// Stored once as the member with positive imaginary part.
    ComplexPair,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnalogPole {
    pub value: Complex64,
    pub kind: PoleKind,
}

impl AnalogPole {
    /// Number of s-plane poles this entry stands for.
    pub fn multiplicity(&self) -> usize {
        match self.kind {
            PoleKind::Real => 1,
            PoleKind::ComplexPair => 2,
        }
    }
}

/// Pole set of a normalized lowpass prototype.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalogPrototype {
    pub poles: Vec<AnalogPole>,
}

impl AnalogPrototype {
    /// Filter order, counting both members of each conjugate pair.
    pub fn order(&self) -> usize {
        self.poles.iter().map(AnalogPole::multiplicity).sum()
    }
}

impl FilterDesignModel {
    /// Designs the normalized lowpass prototype of this family.
    pub fn prototype(self, order: usize) -> Result<AnalogPrototype> {
        match self {
            FilterDesignModel::Butterworth => butterworth_prototype(order),
        }
    }
}

/// Butterworth poles sit evenly on the left half of the unit circle at
/// angles `π(2k + n + 1) / 2n`, `k = 0..n`.
pub fn butterworth_prototype(order: usize) -> Result<AnalogPrototype> {
    if order < 1 {
        return Err(FilterError::InvalidOrder { order });
    }

    let n = order as f64;
    let mut poles = Vec::with_capacity(order / 2 + 1);
    for k in 0..order / 2 {
        let angle = PI * (2.0 * k as f64 + n + 1.0) / (2.0 * n);
        poles.push(AnalogPole {
            value: Complex64::new(angle.cos(), angle.sin()),
            kind: PoleKind::ComplexPair,
        });
    }
    if order % 2 == 1 {
        poles.push(AnalogPole {
            value: Complex64::new(-1.0, 0.0),
            kind: PoleKind::Real,
        });
    }

    Ok(AnalogPrototype { poles })
}
