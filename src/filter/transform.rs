//! Lowpass prototype to lowpass / highpass / bandpass / bandreject transforms.
//!
//! Sections are analog transfer functions stored in ascending powers of `s`:
//!
//! ```text
//!         num[0] + num[1]·s + num[2]·s²
//! H(s) = -------------------------------
//!         den[0] + den[1]·s + den[2]·s²
//! ```
//!
//! Cutoffs are given in Hz and converted to rad/s here.
use std::f64::consts::PI;

use num_complex::Complex64;

use super::prototype::{AnalogPrototype, PoleKind};
use super::types::FilterBandType;
use crate::error::{FilterError, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnalogSection {
    pub num: [f64; 3],
    pub den: [f64; 3],
}

impl AnalogSection {
    /// True for sections produced from a single real pole.
    pub fn is_first_order(&self) -> bool {
        self.num[2] == 0.0 && self.den[2] == 0.0
    }

    /// Evaluates the section at complex frequency `s`.
    pub fn response(&self, s: Complex64) -> Complex64 {
        poly(&self.num, s) / poly(&self.den, s)
    }

    /// Substitutes `s -> s / w`, moving a unit cutoff to `w` rad/s.
    fn scale_cutoff(&mut self, w: f64) {
        self.num[1] /= w;
        self.num[2] /= w * w;
        self.den[1] /= w;
        self.den[2] /= w * w;
    }
}

fn poly(c: &[f64; 3], s: Complex64) -> Complex64 {
    (s * c[2] + c[1]) * s + c[0]
}

/// Validates the cutoffs a band type needs (Hz).
pub fn check_band(band_type: FilterBandType, low: f64, high: f64) -> Result<()> {
    let positive = |f: f64| f.is_finite() && f > 0.0;
    let valid = match band_type {
        FilterBandType::Lowpass => positive(high),
        FilterBandType::Highpass => positive(low),
        FilterBandType::Bandpass | FilterBandType::Bandreject => {
            positive(low) && positive(high) && low < high
        }
    };
    if valid {
        Ok(())
    } else {
        Err(FilterError::InvalidBand {
            band_type,
            low,
            high,
        })
    }
}

/// Moves the prototype to the requested band. `low`/`high` are analog
/// (already pre-warped) cutoffs in Hz.
pub fn transform(
    prototype: &AnalogPrototype,
    band_type: FilterBandType,
    low: f64,
    high: f64,
) -> Result<Vec<AnalogSection>> {
    check_band(band_type, low, high)?;
    let sections = match band_type {
        FilterBandType::Lowpass => lowpass(prototype, 2.0 * PI * high),
        FilterBandType::Highpass => highpass(prototype, 2.0 * PI * low),
        FilterBandType::Bandpass => bandpass(prototype, 2.0 * PI * low, 2.0 * PI * high),
        FilterBandType::Bandreject => bandreject(prototype, 2.0 * PI * low, 2.0 * PI * high),
    };
    Ok(sections)
}

/// Unit DC gain lowpass sections with cutoff `w` rad/s.
pub fn lowpass(prototype: &AnalogPrototype, w: f64) -> Vec<AnalogSection> {
    prototype
        .poles
        .iter()
        .map(|pole| {
            let p = pole.value;
            let mut section = match pole.kind {
                PoleKind::ComplexPair => AnalogSection {
                    num: [p.norm_sqr(), 0.0, 0.0],
                    den: [p.norm_sqr(), -2.0 * p.re, 1.0],
                },
                PoleKind::Real => AnalogSection {
                    num: [-p.re, 0.0, 0.0],
                    den: [-p.re, 1.0, 0.0],
                },
            };
            section.scale_cutoff(w);
            section
        })
        .collect()
}

/// Highpass sections from `s -> w / s`.
pub fn highpass(prototype: &AnalogPrototype, w: f64) -> Vec<AnalogSection> {
    prototype
        .poles
        .iter()
        .map(|pole| {
            let p = pole.value;
            let mut section = match pole.kind {
                PoleKind::ComplexPair => AnalogSection {
                    num: [0.0, 0.0, p.norm_sqr()],
                    den: [1.0, -2.0 * p.re, p.norm_sqr()],
                },
                PoleKind::Real => AnalogSection {
                    num: [0.0, -p.re, 0.0],
                    den: [1.0, -p.re, 0.0],
                },
            };
            section.scale_cutoff(w);
            section
        })
        .collect()
}

/// Bandpass sections from `s -> (s² + wl·wh) / ((wh - wl)·s)`. Each conjugate
/// pair splits into two sections straddling the centre `√(wl·wh)`.
pub fn bandpass(prototype: &AnalogPrototype, wl: f64, wh: f64) -> Vec<AnalogSection> {
    let a = wl * wh;
    let b = wh - wl;
    let mut sections = Vec::with_capacity(prototype.order());
    for pole in &prototype.poles {
        let p = pole.value;
        match pole.kind {
            PoleKind::ComplexPair => {
                let bp = p * b;
                let root = (bp * bp - 4.0 * a).sqrt();
                let p1 = (bp + root) * 0.5;
                let p2 = (bp - root) * 0.5;
                sections.push(AnalogSection {
                    num: [0.0, b * p.norm_sqr(), 0.0],
                    den: [p1.norm_sqr(), -2.0 * p1.re, 1.0],
                });
                sections.push(AnalogSection {
                    num: [0.0, b, 0.0],
                    den: [p2.norm_sqr(), -2.0 * p2.re, 1.0],
                });
            }
            PoleKind::Real => sections.push(AnalogSection {
                num: [0.0, -p.re * b, 0.0],
                den: [a, -p.re * b, 1.0],
            }),
        }
    }
    sections
}

/// Bandreject sections from `s -> (wh - wl)·s / (s² + wl·wh)`.
pub fn bandreject(prototype: &AnalogPrototype, wl: f64, wh: f64) -> Vec<AnalogSection> {
    let a = wl * wh;
    let b = wh - wl;
    let mut sections = Vec::with_capacity(prototype.order());
    for pole in &prototype.poles {
        let p = pole.value;
        match pole.kind {
            PoleKind::ComplexPair => {
                let bp = p.inv() * b;
                let root = (bp * bp - 4.0 * a).sqrt();
                for q in [(bp + root) * 0.5, (bp - root) * 0.5].iter() {
                    sections.push(AnalogSection {
                        num: [a, 0.0, 1.0],
                        den: [q.norm_sqr(), -2.0 * q.re, 1.0],
                    });
                }
            }
            PoleKind::Real => sections.push(AnalogSection {
                num: [-p.re * a, 0.0, -p.re],
                den: [-p.re * a, b, -p.re],
            }),
        }
    }
    sections
}
