//! Direct form recursive filter sections
use arraydeque::{ArrayDeque, Wrapping};
use generic_array::typenum::{Unsigned, U3};
use generic_array::{ArrayLength, GenericArray};
use itertools::izip;

use crate::error::{FilterError, Result};
use crate::filter::Filter;


/// A generic IIR filter with matching a/b tap lengths
#[derive(Clone, Debug)]
pub struct IIRFilter<N: ArrayLength<f64>> {
    x: ArrayDeque<GenericArray<f64, N>, Wrapping>,
    y: ArrayDeque<GenericArray<f64, N>, Wrapping>,
    b: GenericArray<f64, N>,
    a: GenericArray<f64, N>,
}

/// A biquad IIR filter, one second-order section of a cascade
pub type Biquad = IIRFilter<U3>;


impl<N: ArrayLength<f64>> IIRFilter<N> {
    /// Returns a new IIR filter. Fails if a/b are not N taps long or a0 is 0.
    pub fn new(b: &[f64], a: &[f64]) -> Result<IIRFilter<N>> {
        let taps = N::to_usize();
        if b.len() != taps || a.len() != taps {
            return Err(FilterError::InvalidCoefficients(format!(
                "expected {} taps, got {} numerator and {} denominator",
                taps,
                b.len(),
                a.len()
            )));
        }
        // a0 of 0 results in divide by 0
        if a[0] == 0.0 {
            return Err(FilterError::InvalidCoefficients(
                "leading denominator coefficient is zero".to_string(),
            ));
        }

        let b_arr = GenericArray::clone_from_slice(b);

        // Negate a[1..] so the recursion is a plain sum
        let mut a_arr = GenericArray::clone_from_slice(a);
        for i in 1..a_arr.len() {
            a_arr[i] = -a_arr[i];
        }

        let mut filter = IIRFilter {
            x: ArrayDeque::new(),
            y: ArrayDeque::new(),
            b: b_arr,
            a: a_arr,
        };
        filter.reset();
        Ok(filter)
    }

    /// Clears the sample histories back to zero.
    pub fn reset(&mut self) {
        for _ in 0..self.x.capacity() {
            self.x.push_front(0.0);
        }
        for _ in 0..self.y.capacity() {
            self.y.push_front(0.0);
        }
    }
}

impl<N: ArrayLength<f64>> Filter for IIRFilter<N> {
    /// Process one sample of the input signal and returns one sample of the
    /// output signal.
    fn process_one(&mut self, in_samp: f64) -> f64 {
        // Shift in old values
        self.x.pop_back();
        self.x.push_front(in_samp);
        self.y.pop_back();

        let mut sum = 0.0;
        for (xi, bi) in izip!(self.x.iter(), self.b.iter()) {
            sum += *xi * *bi;
        }
        for (yi, ai) in izip!(self.y.iter(), self.a[1..].iter()) {
            sum += *yi * *ai;
        }
        sum /= self.a[0];

        self.y.push_front(sum);
        sum
    }
}

/// ------------------------------------------------------------------------------------------------
/// Module unit tests
/// ------------------------------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Direction, StridedView};
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_one_pole_impulse_response() {
        // y[n] = x[n] + 0.5 y[n-1]
        let mut biquad = Biquad::new(&[1.0, 0.0, 0.0], &[1.0, -0.5, 0.0]).unwrap();
        let mut impulse = vec![0.0; 6];
        impulse[0] = 1.0;
        let mut out = vec![0.0; 6];
        biquad.process(&impulse, &mut out);
        for (i, y) in out.iter().enumerate() {
            assert_approx_eq!(*y, 0.5f64.powi(i as i32), 1e-15);
        }
    }

    #[test]
    fn test_leading_coefficient_normalized() {
        let mut scaled = Biquad::new(&[2.0, 2.0, 0.0], &[2.0, -1.0, 0.0]).unwrap();
        let mut unit = Biquad::new(&[1.0, 1.0, 0.0], &[1.0, -0.5, 0.0]).unwrap();
        for x in &[1.0, -0.25, 3.0, 0.0, 0.5] {
            assert_approx_eq!(scaled.process_one(*x), unit.process_one(*x), 1e-15);
        }
    }

    #[test]
    fn test_invalid_taps() {
        assert!(Biquad::new(&[1.0, 0.0], &[1.0, 0.0, 0.0]).is_err());
        assert!(Biquad::new(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]).is_err());
    }

    #[test]
    fn test_reset_clears_history() {
        let mut biquad = Biquad::new(&[1.0, 0.0, 0.0], &[1.0, -0.9, 0.0]).unwrap();
        let first = biquad.process_one(1.0);
        biquad.process_one(1.0);
        biquad.reset();
        assert_eq!(biquad.process_one(1.0), first);
    }

    #[test]
    fn test_reverse_strided_pass() {
        // two-sample moving sum run backwards over the odd column
        let mut biquad = Biquad::new(&[1.0, 1.0, 0.0], &[1.0, 0.0, 0.0]).unwrap();
        let mut data = vec![9.0, 1.0, 9.0, 2.0, 9.0, 3.0];
        let mut view = StridedView::new(&mut data, 3, 1, 2).unwrap();
        biquad.process_strided(&mut view, Direction::Reverse);
        assert_eq!(data, vec![9.0, 3.0, 9.0, 5.0, 9.0, 3.0]);
    }
}
