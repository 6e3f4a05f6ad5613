//! Analog to digital section mapping and group delay estimation.
use num_complex::Complex64;

use super::sos::Section;
use super::transform::AnalogSection;

/// Maps analog sections to digital ones with `s = 2·fs·(1 - z⁻¹) / (1 + z⁻¹)`.
///
/// First-order analog sections stay first order (`b2 = a2 = 0`). Every
/// digital section is normalized to `a0 = 1`.
pub fn bilinear(sections: &[AnalogSection], sample_rate: f64) -> Vec<Section> {
    let k = 2.0 * sample_rate;
    sections
        .iter()
        .map(|section| {
            let map = |c: &[f64; 3]| {
                if section.is_first_order() {
                    [c[0] + c[1] * k, c[0] - c[1] * k, 0.0]
                } else {
                    let k2 = k * k;
                    [
                        c[0] + c[1] * k + c[2] * k2,
                        2.0 * (c[0] - c[2] * k2),
                        c[0] - c[1] * k + c[2] * k2,
                    ]
                }
            };
            normalize(map(&section.num), map(&section.den))
        })
        .collect()
}

fn normalize(b: [f64; 3], a: [f64; 3]) -> Section {
    let a0 = a[0];
    Section {
        b: [b[0] / a0, b[1] / a0, b[2] / a0],
        a: [1.0, a[1] / a0, a[2] / a0],
    }
}

/// Group delay of a section in samples at `w` rad/sample.
pub(crate) fn section_group_delay(section: &Section, w: f64) -> f64 {
    polynomial_delay(&section.b, w) - polynomial_delay(&section.a, w)
}

/// `Re[Σ k·c_k·e^(-jwk) / Σ c_k·e^(-jwk)]`, zero where the polynomial vanishes.
fn polynomial_delay(c: &[f64; 3], w: f64) -> f64 {
    let mut value = Complex64::new(0.0, 0.0);
    let mut ramp = Complex64::new(0.0, 0.0);
    for (k, &ck) in c.iter().enumerate() {
        let e = Complex64::new(0.0, -w * k as f64).exp();
        value = value + e * ck;
        ramp = ramp + e * (ck * k as f64);
    }
    let scale: f64 = c.iter().map(|x| x.abs()).sum();
    if value.norm() <= std::f64::EPSILON * scale {
        0.0
    } else {
        (ramp / value).re
    }
}

/// Group delay of a cascade in seconds at frequency `f` (Hz).
pub(crate) fn group_delay(sections: &[Section], f: f64, sample_rate: f64) -> f64 {
    let w = 2.0 * std::f64::consts::PI * f / sample_rate;
    let samples: f64 = sections.iter().map(|s| section_group_delay(s, w)).sum();
    samples / sample_rate
}

/// ------------------------------------------------------------------------------------------------
/// Module unit tests
/// ------------------------------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::iir::Biquad;
    use crate::filter::Filter;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_bilinear_rc_step_response() {
        // Digital version of an analog RC lowpass (T=0.1s, RC=1) should track
        // the analog step response over 5 seconds. The initial state differs,
        // so use a 5% threshold.
        let rc = 1.0;
        let t_samp = 0.1;

        let analog_response: Vec<f64> = (0..50)
            .map(|i| 1.0 - f64::exp(-(i as f64) * t_samp / rc))
            .collect();

        let rc_section = AnalogSection {
            num: [1.0, 0.0, 0.0],
            den: [1.0, rc, 0.0],
        };
        let digital = bilinear(&[rc_section], 1.0 / t_samp);
        assert_approx_eq!(digital[0].a[1], (1.0 - 2.0 * rc / t_samp) / (1.0 + 2.0 * rc / t_samp));
        assert_eq!(digital[0].a[2], 0.0);
        assert_eq!(digital[0].b[2], 0.0);

        let mut biquad = Biquad::new(&digital[0].b, &digital[0].a).unwrap();
        let unit_step = vec![1.0; 50];
        let mut digital_response = vec![0.0; 50];
        biquad.process(&unit_step, &mut digital_response);

        for i in 0..50 {
            assert_approx_eq!(analog_response[i], digital_response[i], 0.05);
        }
    }

    #[test]
    fn test_dc_gain_preserved() {
        // s = 0 maps to z = 1, so a unit DC gain section keeps it
        let section = AnalogSection {
            num: [4.0, 0.0, 0.0],
            den: [4.0, 1.5, 1.0],
        };
        let digital = bilinear(&[section], 50.0);
        let b: f64 = digital[0].b.iter().sum();
        let a: f64 = digital[0].a.iter().sum();
        assert_approx_eq!(b / a, 1.0, 1e-12);
        assert_eq!(digital[0].a[0], 1.0);
    }

    #[test]
    fn test_pure_delay_group_delay() {
        // H(z) = z^-2 delays every frequency by two samples
        let delay = Section {
            b: [0.0, 0.0, 1.0],
            a: [1.0, 0.0, 0.0],
        };
        assert_approx_eq!(section_group_delay(&delay, 0.0), 2.0, 1e-12);
        assert_approx_eq!(section_group_delay(&delay, 1.3), 2.0, 1e-12);
        assert_approx_eq!(group_delay(&[delay, delay], 10.0, 100.0), 0.04, 1e-12);
    }

    #[test]
    fn test_zero_on_unit_circle_contributes_nothing() {
        // numerator (1 + z^-1) vanishes at Nyquist
        let section = Section {
            b: [1.0, 1.0, 0.0],
            a: [1.0, 0.0, 0.0],
        };
        assert_eq!(section_group_delay(&section, std::f64::consts::PI), 0.0);
    }
}
