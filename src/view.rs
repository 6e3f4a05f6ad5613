//! Bounded strided access into caller-owned sample buffers.
//!
//! A view addresses `len` samples starting at `offset` and stepping by
//! `increment`, so the same filter code runs over a flat signal, one column of
//! an interleaved `[time, value, time, value, ...]` buffer, or a sub-range.
use std::iter::Rev;
use std::ops::{Index, IndexMut, Range};

use itertools::Either;

use crate::error::{FilterError, Result};

/// Traversal order over the addressed samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

#[derive(Debug)]
pub struct StridedView<'a> {
    data: &'a mut [f64],
    offset: usize,
    len: usize,
    increment: usize,
}

impl<'a> StridedView<'a> {
    /// Returns a view over `len` samples of `data`. Fails if the increment is
    /// zero or the last addressed sample lies outside `data`.
    pub fn new(data: &'a mut [f64], len: usize, offset: usize, increment: usize) -> Result<Self> {
        if increment == 0 {
            return Err(FilterError::InvalidStride);
        }
        if len > 0 {
            let last = (len - 1)
                .checked_mul(increment)
                .and_then(|span| span.checked_add(offset));
            match last {
                Some(last) if last < data.len() => {}
                _ => {
                    return Err(FilterError::InvalidRange {
                        offset,
                        len,
                        increment,
                        buffer_len: data.len(),
                    })
                }
            }
        }
        Ok(StridedView {
            data,
            offset,
            len,
            increment,
        })
    }

    /// View over every sample of `data`.
    pub fn contiguous(data: &'a mut [f64]) -> Self {
        let len = data.len();
        StridedView {
            data,
            offset: 0,
            len,
            increment: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Logical sample indices in traversal order.
    pub fn indices(&self, direction: Direction) -> Either<Range<usize>, Rev<Range<usize>>> {
        match direction {
            Direction::Forward => Either::Left(0..self.len),
            Direction::Reverse => Either::Right((0..self.len).rev()),
        }
    }

    /// Copies the addressed samples out in forward order.
    pub fn to_vec(&self) -> Vec<f64> {
        (0..self.len).map(|i| self[i]).collect()
    }

    #[inline]
    fn position(&self, i: usize) -> usize {
        assert!(i < self.len, "index {} out of range for view of {}", i, self.len);
        self.offset + i * self.increment
    }
}

impl<'a> Index<usize> for StridedView<'a> {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.data[self.position(i)]
    }
}

impl<'a> IndexMut<usize> for StridedView<'a> {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        let pos = self.position(i);
        &mut self.data[pos]
    }
}

/// ------------------------------------------------------------------------------------------------
/// Module unit tests
/// ------------------------------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interleaved_column() {
        let mut data = vec![0.0, 10.0, 1.0, 11.0, 2.0, 12.0];
        let mut view = StridedView::new(&mut data, 3, 1, 2).unwrap();
        assert_eq!(view.to_vec(), vec![10.0, 11.0, 12.0]);
        view[2] = -1.0;
        assert_eq!(data, vec![0.0, 10.0, 1.0, 11.0, 2.0, -1.0]);
    }

    #[test]
    fn test_zero_increment_rejected() {
        let mut data = vec![0.0; 4];
        let err = StridedView::new(&mut data, 4, 0, 0).unwrap_err();
        assert_eq!(err, FilterError::InvalidStride);
    }

    #[test]
    fn test_range_checked_at_construction() {
        let mut data = vec![0.0; 6];
        assert!(StridedView::new(&mut data, 3, 1, 2).is_ok());
        let err = StridedView::new(&mut data, 4, 1, 2).unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidRange {
                offset: 1,
                len: 4,
                increment: 2,
                buffer_len: 6
            }
        );
        assert!(StridedView::new(&mut data, 1, usize::max_value(), usize::max_value()).is_err());
        // an empty view never touches the buffer
        assert!(StridedView::new(&mut data, 0, 100, 3).is_ok());
    }

    #[test]
    fn test_reverse_indices() {
        let mut data = vec![0.0; 3];
        let view = StridedView::contiguous(&mut data);
        let order: Vec<usize> = view.indices(Direction::Reverse).collect();
        assert_eq!(order, vec![2, 1, 0]);
        let order: Vec<usize> = view.indices(Direction::Forward).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }
}
