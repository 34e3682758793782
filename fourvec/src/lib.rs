use num::Float;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Display;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A contravariant four-vector in the (+,-,-,-) metric.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LorentzVector<T: Float> {
    pub t: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Float + Display> Display for LorentzVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "(t:{}, x:{}, y:{}, z:{})",
            self.t, self.x, self.y, self.z
        )
    }
}

impl<T: Float> LorentzVector<T> {
    #[inline]
    pub fn new() -> LorentzVector<T> {
        LorentzVector {
            t: T::zero(),
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    #[inline]
    pub fn from_args(t: T, x: T, y: T, z: T) -> LorentzVector<T> {
        LorentzVector { t, x, y, z }
    }

    #[inline]
    pub fn from_slice(v: &[T]) -> LorentzVector<T> {
        LorentzVector {
            t: v[0],
            x: v[1],
            y: v[2],
            z: v[3],
        }
    }

    /// Minkowski square `t^2 - |p|^2`.
    #[inline]
    pub fn square(&self) -> T {
        self.t * self.t - self.spatial_squared()
    }

    #[inline]
    pub fn dot(&self, other: &LorentzVector<T>) -> T {
        self.t * other.t - self.spatial_dot(other)
    }

    #[inline]
    pub fn spatial_squared(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn spatial_dot(&self, other: &LorentzVector<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn spatial_distance(&self) -> T {
        self.spatial_squared().sqrt()
    }

    /// Cross product of the spatial components; the time component of the
    /// result is zero.
    #[inline]
    pub fn spatial_cross(&self, other: &LorentzVector<T>) -> LorentzVector<T> {
        LorentzVector {
            t: T::zero(),
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    #[inline]
    pub fn pt(&self) -> T {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Boost by the velocity given by the spatial components of
    /// `boost_vector` (its time component is ignored). `p.boost(&(q / q.t))`
    /// takes a vector from the rest frame of `q` to the frame where `q` is
    /// measured; negate the argument for the inverse.
    pub fn boost(&self, boost_vector: &LorentzVector<T>) -> LorentzVector<T> {
        let b2 = boost_vector.spatial_squared();
        let gamma = (T::one() - b2).sqrt().recip();

        let bp = self.spatial_dot(boost_vector);
        let gamma2 = if b2 > T::zero() {
            (gamma - T::one()) / b2
        } else {
            T::zero()
        };
        let factor = gamma2 * bp + gamma * self.t;
        LorentzVector {
            t: gamma * (self.t + bp),
            x: boost_vector.x * factor + self.x,
            y: boost_vector.y * factor + self.y,
            z: boost_vector.z * factor + self.z,
        }
    }
}

impl<T: Float> Neg for LorentzVector<T> {
    type Output = LorentzVector<T>;

    #[inline]
    fn neg(self) -> LorentzVector<T> {
        LorentzVector {
            t: -self.t,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<'a, T: Float> Neg for &'a LorentzVector<T> {
    type Output = LorentzVector<T>;

    #[inline]
    fn neg(self) -> LorentzVector<T> {
        -*self
    }
}

impl<T: Float> Add<LorentzVector<T>> for LorentzVector<T> {
    type Output = LorentzVector<T>;

    #[inline]
    fn add(self, other: LorentzVector<T>) -> LorentzVector<T> {
        LorentzVector {
            t: self.t + other.t,
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<'a, T: Float> Add<&'a LorentzVector<T>> for LorentzVector<T> {
    type Output = LorentzVector<T>;

    #[inline]
    fn add(self, other: &'a LorentzVector<T>) -> LorentzVector<T> {
        self + *other
    }
}

impl<'a, T: Float> Add<LorentzVector<T>> for &'a LorentzVector<T> {
    type Output = LorentzVector<T>;

    #[inline]
    fn add(self, other: LorentzVector<T>) -> LorentzVector<T> {
        *self + other
    }
}

impl<'a, T: Float> Add<&'a LorentzVector<T>> for &'a LorentzVector<T> {
    type Output = LorentzVector<T>;

    #[inline]
    fn add(self, other: &'a LorentzVector<T>) -> LorentzVector<T> {
        *self + *other
    }
}

impl<T: Float> Sub<LorentzVector<T>> for LorentzVector<T> {
    type Output = LorentzVector<T>;

    #[inline]
    fn sub(self, other: LorentzVector<T>) -> LorentzVector<T> {
        LorentzVector {
            t: self.t - other.t,
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<'a, T: Float> Sub<&'a LorentzVector<T>> for LorentzVector<T> {
    type Output = LorentzVector<T>;

    #[inline]
    fn sub(self, other: &'a LorentzVector<T>) -> LorentzVector<T> {
        self - *other
    }
}

impl<'a, T: Float> Sub<LorentzVector<T>> for &'a LorentzVector<T> {
    type Output = LorentzVector<T>;

    #[inline]
    fn sub(self, other: LorentzVector<T>) -> LorentzVector<T> {
        *self - other
    }
}

impl<'a, T: Float> Sub<&'a LorentzVector<T>> for &'a LorentzVector<T> {
    type Output = LorentzVector<T>;

    #[inline]
    fn sub(self, other: &'a LorentzVector<T>) -> LorentzVector<T> {
        *self - *other
    }
}

impl<T: Float> Mul<T> for LorentzVector<T> {
    type Output = LorentzVector<T>;

    #[inline]
    fn mul(self, other: T) -> LorentzVector<T> {
        LorentzVector {
            t: self.t * other,
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}

impl<'a, T: Float> Mul<T> for &'a LorentzVector<T> {
    type Output = LorentzVector<T>;

    #[inline]
    fn mul(self, other: T) -> LorentzVector<T> {
        *self * other
    }
}

impl<T: Float> Div<T> for LorentzVector<T> {
    type Output = LorentzVector<T>;

    #[inline]
    fn div(self, other: T) -> LorentzVector<T> {
        self * other.recip()
    }
}

impl<'a, T: Float> Div<T> for &'a LorentzVector<T> {
    type Output = LorentzVector<T>;

    #[inline]
    fn div(self, other: T) -> LorentzVector<T> {
        *self * other.recip()
    }
}

impl<T: Float> AddAssign<LorentzVector<T>> for LorentzVector<T> {
    #[inline]
    fn add_assign(&mut self, other: LorentzVector<T>) {
        self.t = self.t + other.t;
        self.x = self.x + other.x;
        self.y = self.y + other.y;
        self.z = self.z + other.z;
    }
}

impl<T: Float> SubAssign<LorentzVector<T>> for LorentzVector<T> {
    #[inline]
    fn sub_assign(&mut self, other: LorentzVector<T>) {
        self.t = self.t - other.t;
        self.x = self.x - other.x;
        self.y = self.y - other.y;
        self.z = self.z - other.z;
    }
}

impl<T: Float> MulAssign<T> for LorentzVector<T> {
    #[inline]
    fn mul_assign(&mut self, other: T) {
        self.t = self.t * other;
        self.x = self.x * other;
        self.y = self.y * other;
        self.z = self.z * other;
    }
}

impl<T: Float> Sum for LorentzVector<T> {
    fn sum<I: Iterator<Item = LorentzVector<T>>>(iter: I) -> LorentzVector<T> {
        iter.fold(LorentzVector::new(), |a, b| a + b)
    }
}

impl<T: Float> Index<usize> for LorentzVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.t,
            1 => &self.x,
            2 => &self.y,
            3 => &self.z,
            _ => panic!("Index is not between 0 and 3"),
        }
    }
}

impl<T: Float> IndexMut<usize> for LorentzVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.t,
            1 => &mut self.x,
            2 => &mut self.y,
            3 => &mut self.z,
            _ => panic!("Index is not between 0 and 3"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_of_massless_vector_vanishes() {
        let p = LorentzVector::from_args(5., 3., 0., 4.);
        assert!(p.square().abs() < 1e-12);
    }

    #[test]
    fn dot_matches_square() {
        let p = LorentzVector::from_args(45.6, 12.2, -31.0, 7.7);
        assert!((p.dot(&p) - p.square()).abs() < 1e-9);
    }

    #[test]
    fn cross_is_orthogonal() {
        let a = LorentzVector::from_args(0., 1.3, -0.2, 4.1);
        let b = LorentzVector::from_args(0., -2.0, 0.7, 1.9);
        let c = a.spatial_cross(&b);
        assert!(c.spatial_dot(&a).abs() < 1e-12);
        assert!(c.spatial_dot(&b).abs() < 1e-12);
    }

    #[test]
    fn boost_to_rest_frame_and_back() {
        let q = LorentzVector::from_args(50., 3., -7., 21.);
        let p = LorentzVector::from_args(13., 1., 2., -5.);
        let beta = q / q.t;
        let p_rest = p.boost(&-beta);
        // the invariant is unchanged
        assert!((p_rest.square() - p.square()).abs() < 1e-8);
        // q itself is at rest in its own frame
        let q_rest = q.boost(&-beta);
        assert!(q_rest.spatial_distance() < 1e-9);
        // round trip
        let p_back = p_rest.boost(&beta);
        for i in 0..4 {
            assert!((p_back[i] - p[i]).abs() < 1e-9);
        }
    }
}
