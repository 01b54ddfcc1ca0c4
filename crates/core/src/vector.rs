use std::fmt;

use thiserror::Error;

use crate::ErrorKind;

/// Errors that can occur when building or accessing a [`Vector`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    #[error("coordinate index {index} is out of range for dimension {dim}")]
    IndexOutOfRange { index: usize, dim: usize },

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("cannot allocate a vector of dimension {dim}")]
    Allocation { dim: usize },
}

impl VectorError {
    /// Returns the broad category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            Self::Allocation { .. } => ErrorKind::AllocationFailure,
        }
    }
}

/// A point in `R^n` whose dimension is fixed at construction.
///
/// Coordinates can be changed in place but the dimension cannot. Each vector
/// owns its coordinates; [`Clone`] is a full independent copy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vector {
    coords: Box<[f64]>,
}

impl Vector {
    /// Creates a zero vector of dimension `dim`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Allocation`] if the coordinates cannot be allocated.
    pub fn zeros(dim: usize) -> Result<Self, VectorError> {
        let mut coords = Vec::new();
        coords
            .try_reserve_exact(dim)
            .map_err(|_| VectorError::Allocation { dim })?;
        coords.resize(dim, 0.0);
        Ok(Self {
            coords: coords.into_boxed_slice(),
        })
    }

    /// Creates a vector by copying `coords`.
    #[must_use]
    pub fn from_slice(coords: &[f64]) -> Self {
        Self {
            coords: coords.into(),
        }
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    /// Returns the coordinate at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfRange`] if `index >= dim`.
    pub fn coord(&self, index: usize) -> Result<f64, VectorError> {
        self.coords
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfRange {
                index,
                dim: self.dim(),
            })
    }

    /// Sets the coordinate at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfRange`] if `index >= dim`.
    pub fn set_coord(&mut self, index: usize, value: f64) -> Result<(), VectorError> {
        let dim = self.dim();
        let slot = self
            .coords
            .get_mut(index)
            .ok_or(VectorError::IndexOutOfRange { index, dim })?;
        *slot = value;
        Ok(())
    }

    /// Overwrites every coordinate with those of `other`, keeping this buffer.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn copy_from(&mut self, other: &Vector) -> Result<(), VectorError> {
        if self.dim() != other.dim() {
            return Err(VectorError::DimensionMismatch {
                expected: self.dim(),
                found: other.dim(),
            });
        }
        self.coords.copy_from_slice(&other.coords);
        Ok(())
    }

    /// Returns true if both vectors have the same dimension and every pair of
    /// coordinates differs by at most `tol`.
    #[must_use]
    pub fn approx_eq(&self, other: &Vector, tol: f64) -> bool {
        self.dim() == other.dim()
            && self
                .coords
                .iter()
                .zip(other.coords.iter())
                .all(|(a, b)| (a - b).abs() <= tol)
    }

    /// Returns the coordinates as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.coords
    }

    /// Returns the coordinates as a mutable slice.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.coords
    }

    /// Returns an iterator over the coordinates.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.coords.iter()
    }
}

impl From<Vec<f64>> for Vector {
    fn from(coords: Vec<f64>) -> Self {
        Self {
            coords: coords.into_boxed_slice(),
        }
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(coords: [f64; N]) -> Self {
        Self::from_slice(&coords)
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, x) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn zeros_has_requested_dimension() {
        let v = Vector::zeros(3).expect("small allocation");
        assert_eq!(v.dim(), 3);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn set_and_get_coordinates() {
        let mut v = Vector::zeros(2).expect("small allocation");
        v.set_coord(1, 4.5).expect("index in range");

        assert_relative_eq!(v.coord(0).unwrap(), 0.0);
        assert_relative_eq!(v.coord(1).unwrap(), 4.5);
    }

    #[test]
    fn out_of_range_access_fails() {
        let mut v = Vector::from([1.0, 2.0]);

        let err = v.coord(2).unwrap_err();
        assert_eq!(err, VectorError::IndexOutOfRange { index: 2, dim: 2 });
        assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);

        assert!(matches!(
            v.set_coord(5, 0.0),
            Err(VectorError::IndexOutOfRange { index: 5, dim: 2 })
        ));
        assert_eq!(v, Vector::from([1.0, 2.0]));
    }

    #[test]
    fn clone_is_independent() {
        let original = Vector::from([1.0, 2.0, 3.0]);
        let mut copy = original.clone();
        copy.set_coord(0, -1.0).unwrap();

        assert_relative_eq!(original.coord(0).unwrap(), 1.0);
        assert_relative_eq!(copy.coord(0).unwrap(), -1.0);
    }

    #[test]
    fn copy_from_requires_matching_dimension() {
        let mut target = Vector::zeros(2).unwrap();
        target.copy_from(&Vector::from([3.0, 4.0])).unwrap();
        assert_eq!(target, Vector::from([3.0, 4.0]));

        let err = target.copy_from(&Vector::from([1.0])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
        assert_eq!(target, Vector::from([3.0, 4.0]));
    }

    #[test]
    fn approx_eq_uses_absolute_tolerance() {
        let a = Vector::from([1.0, 2.0]);
        let b = Vector::from([1.0 + 1e-10, 2.0 - 1e-10]);

        assert!(a.approx_eq(&b, 1e-9));
        assert!(!a.approx_eq(&b, 1e-11));
        assert!(!a.approx_eq(&Vector::from([1.0]), 1.0));
    }

    #[test]
    fn displays_as_tuple() {
        assert_eq!(Vector::from([0.0, 1.5]).to_string(), "(0, 1.5)");
        assert_eq!(Vector::from(Vec::<f64>::new()).to_string(), "()");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_plain_array() {
        let v = Vector::from([1.0, -2.0]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,-2.0]");

        let back: Vector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
