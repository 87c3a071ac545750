// src/types/matrix.rs
// Row-major 4x4 transform matrix over a flat 16-element buffer.

use core::ops::Mul;

use super::traits::FloatingPoint;
use super::vector::Vector3;

/// Matrix4x4 is a row-major 4x4 transform matrix stored as a flat
/// buffer of 16 scalars; the element at (row, col) lives at index
/// `row * 4 + col`.
///
/// Indices 12, 13 and 14 form the translation column of a row-major
/// affine transform.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix4x4<T: FloatingPoint = f32> {
    pub data: [T; 16],
}

impl<T: FloatingPoint> Matrix4x4<T> {
    /// Construct a new matrix from a flat row-major buffer.
    pub fn new(data: [T; 16]) -> Self {
        Self { data }
    }

    /// Construct a new matrix from 4 rows
    pub fn from_rows(r0: [T; 4], r1: [T; 4], r2: [T; 4], r3: [T; 4]) -> Self {
        let mut data = [T::zero(); 16];
        for (idx, row) in [r0, r1, r2, r3].iter().enumerate() {
            data[idx * 4..idx * 4 + 4].copy_from_slice(row);
        }
        Self { data }
    }

    /// Zero matrix
    pub fn zero() -> Self {
        Self { data: [T::zero(); 16] }
    }

    /// Identity matrix
    pub fn identity() -> Self {
        let mut m = Self::zero();
        for i in 0..4 {
            m.data[i * 4 + i] = T::one();
        }
        m
    }

    /// Reset the receiver to the identity matrix in place.
    pub fn set_identity(&mut self) {
        *self = Self::identity();
    }

    /// Get the element at (row, col)
    pub fn at(&self, row: usize, col: usize) -> T {
        self.data[row * 4 + col]
    }

    /// Set the element at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * 4 + col] = value;
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> [T; 4] {
        [
            self.data[idx * 4],
            self.data[idx * 4 + 1],
            self.data[idx * 4 + 2],
            self.data[idx * 4 + 3],
        ]
    }

    /// Get a column by index
    pub fn column(&self, idx: usize) -> [T; 4] {
        [
            self.data[idx],
            self.data[idx + 4],
            self.data[idx + 8],
            self.data[idx + 12],
        ]
    }

    /// In-place matrix product `self = self * other`.
    ///
    /// The product is accumulated into a temporary buffer and only then
    /// copied over the receiver, so callers never observe a partially
    /// updated matrix and `other` may alias the receiver's values.
    pub fn multiply(&mut self, other: &Self) {
        let mut result = [T::zero(); 16];
        for r in 0..4 {
            for c in 0..4 {
                let mut sum = T::zero();
                for k in 0..4 {
                    sum = sum + self.data[r * 4 + k] * other.data[k * 4 + c];
                }
                result[r * 4 + c] = sum;
            }
        }
        self.data = result;
    }

    /// Overwrite the translation column (indices 12, 13, 14), leaving
    /// every other element untouched.
    pub fn set_translation(&mut self, x: T, y: T, z: T) {
        self.data[12] = x;
        self.data[13] = y;
        self.data[14] = z;
    }

    /// Overwrite the translation column from a vector.
    pub fn set_translation_vector(&mut self, translation: Vector3<T>) {
        self.set_translation(translation.x, translation.y, translation.z);
    }

    /// The translation column as a vector.
    pub fn translation(&self) -> Vector3<T> {
        Vector3::new(self.data[12], self.data[13], self.data[14])
    }

    /// Determinant of the upper-left 3x3 block via cofactor expansion.
    ///
    /// The fourth row and column are ignored on purpose: the result is
    /// the determinant of the rotation/scale part of an affine
    /// transform, independent of its translation.
    pub fn determinant(&self) -> T {
        let m = &self.data;
        m[0] * (m[5] * m[10] - m[6] * m[9])
            - m[1] * (m[4] * m[10] - m[6] * m[8])
            + m[2] * (m[4] * m[9] - m[5] * m[8])
    }
}

impl<T: FloatingPoint> Default for Matrix4x4<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: FloatingPoint> Mul for Matrix4x4<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = self;
        out.multiply(&rhs);
        out
    }
}
