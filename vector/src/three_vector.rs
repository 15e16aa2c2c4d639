use crate::{Field, RealNumberLike};
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A spatial vector.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ThreeVector<T: Field> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Field> Default for ThreeVector<T> {
    fn default() -> ThreeVector<T> {
        ThreeVector {
            x: T::default(),
            y: T::default(),
            z: T::default(),
        }
    }
}

impl<T: Field> Display for ThreeVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(x:{}, y:{}, z:{})", self.x, self.y, self.z)
    }
}

impl<T: Field> ThreeVector<T> {
    #[inline]
    pub fn from_args(x: T, y: T, z: T) -> ThreeVector<T> {
        ThreeVector { x, y, z }
    }

    #[inline]
    pub fn mag2(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn perp2(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn dot(&self, other: &ThreeVector<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(&self, other: &ThreeVector<T>) -> ThreeVector<T> {
        ThreeVector {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

impl<T: RealNumberLike> ThreeVector<T> {
    #[inline]
    pub fn mag(&self) -> T {
        self.mag2().sqrt()
    }

    #[inline]
    pub fn perp(&self) -> T {
        self.perp2().sqrt()
    }

    /// Azimuthal angle in `(-pi, pi]`, zero on the z axis.
    #[inline]
    pub fn phi(&self) -> T {
        if self.x == T::zero() && self.y == T::zero() {
            T::zero()
        } else {
            self.y.atan2(self.x)
        }
    }

    /// Polar angle in `[0, pi]`, zero for the null vector.
    #[inline]
    pub fn theta(&self) -> T {
        let p = self.perp();
        if p == T::zero() && self.z == T::zero() {
            T::zero()
        } else {
            p.atan2(self.z)
        }
    }

    /// Cosine of the angle between two vectors; 1 if either has zero length.
    pub fn cos_angle(&self, other: &ThreeVector<T>) -> T {
        let ptot2 = self.mag2() * other.mag2();
        if ptot2 <= T::zero() {
            T::one()
        } else {
            self.dot(other) / ptot2.sqrt()
        }
    }

    /// Angle between two vectors; 0 if either has zero length.
    pub fn angle(&self, other: &ThreeVector<T>) -> T {
        let ptot2 = self.mag2() * other.mag2();
        if ptot2 <= T::zero() {
            T::zero()
        } else {
            (self.dot(other) / ptot2.sqrt()).acos()
        }
    }

    pub fn rotate_x(&mut self, angle: T) {
        let (s, c) = angle.sin_cos();
        let (y, z) = (self.y, self.z);
        self.y = c * y - s * z;
        self.z = s * y + c * z;
    }

    pub fn rotate_y(&mut self, angle: T) {
        let (s, c) = angle.sin_cos();
        let (x, z) = (self.x, self.z);
        self.x = c * x + s * z;
        self.z = -s * x + c * z;
    }

    pub fn rotate_z(&mut self, angle: T) {
        let (s, c) = angle.sin_cos();
        let (x, y) = (self.x, self.y);
        self.x = c * x - s * y;
        self.y = s * x + c * y;
    }
}

impl<T: Field> Neg for ThreeVector<T> {
    type Output = ThreeVector<T>;

    #[inline]
    fn neg(self) -> ThreeVector<T> {
        ThreeVector {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T: Field> Add<ThreeVector<T>> for ThreeVector<T> {
    type Output = ThreeVector<T>;

    #[inline]
    fn add(self, other: ThreeVector<T>) -> ThreeVector<T> {
        ThreeVector {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T: Field> AddAssign<ThreeVector<T>> for ThreeVector<T> {
    #[inline]
    fn add_assign(&mut self, other: ThreeVector<T>) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl<T: Field> Sub<ThreeVector<T>> for ThreeVector<T> {
    type Output = ThreeVector<T>;

    #[inline]
    fn sub(self, other: ThreeVector<T>) -> ThreeVector<T> {
        ThreeVector {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<T: Field> SubAssign<ThreeVector<T>> for ThreeVector<T> {
    #[inline]
    fn sub_assign(&mut self, other: ThreeVector<T>) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl<T: Field> Mul<T> for ThreeVector<T> {
    type Output = ThreeVector<T>;

    #[inline]
    fn mul(self, other: T) -> ThreeVector<T> {
        ThreeVector {
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}

impl Mul<ThreeVector<f64>> for f64 {
    type Output = ThreeVector<f64>;

    #[inline]
    fn mul(self, other: ThreeVector<f64>) -> ThreeVector<f64> {
        other * self
    }
}

impl<T: Field> MulAssign<T> for ThreeVector<T> {
    #[inline]
    fn mul_assign(&mut self, other: T) {
        self.x *= other;
        self.y *= other;
        self.z *= other;
    }
}

impl<T: Field> Div<T> for ThreeVector<T> {
    type Output = ThreeVector<T>;

    #[inline]
    fn div(self, other: T) -> ThreeVector<T> {
        ThreeVector {
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}

impl<T: Field> DivAssign<T> for ThreeVector<T> {
    #[inline]
    fn div_assign(&mut self, other: T) {
        self.x /= other;
        self.y /= other;
        self.z /= other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn angles_at_origin_are_zero() {
        let v = ThreeVector::<f64>::default();
        assert_eq!(v.phi(), 0.0);
        assert_eq!(v.theta(), 0.0);

        let on_axis = ThreeVector::from_args(0.0, 0.0, -2.0);
        assert_eq!(on_axis.phi(), 0.0);
        assert_relative_eq!(on_axis.theta(), PI);
    }

    #[test]
    fn magnitudes_and_angles() {
        let v = ThreeVector::from_args(3.0, 4.0, 12.0);
        assert_eq!(v.mag2(), 169.0);
        assert_eq!(v.mag(), 13.0);
        assert_eq!(v.perp(), 5.0);
        assert_relative_eq!(v.phi(), 4.0f64.atan2(3.0));
        assert_relative_eq!(v.theta(), 5.0f64.atan2(12.0));
    }

    #[test]
    fn cross_and_angle() {
        let x = ThreeVector::from_args(1.0, 0.0, 0.0);
        let y = ThreeVector::from_args(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), ThreeVector::from_args(0.0, 0.0, 1.0));
        assert_eq!(x.dot(&y), 0.0);
        assert_relative_eq!(x.angle(&y), FRAC_PI_2);
        assert_relative_eq!(x.cos_angle(&(x * 3.0)), 1.0);

        let zero = ThreeVector::default();
        assert_eq!(x.cos_angle(&zero), 1.0);
        assert_eq!(x.angle(&zero), 0.0);
    }

    #[test]
    fn rotations() {
        let mut v = ThreeVector::from_args(1.0, 0.0, 0.0);
        v.rotate_z(FRAC_PI_2);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-15);
        assert_relative_eq!(v.y, 1.0);

        v.rotate_x(FRAC_PI_2);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-15);
        assert_relative_eq!(v.z, 1.0);

        v.rotate_y(FRAC_PI_2);
        assert_relative_eq!(v.x, 1.0);
        assert_relative_eq!(v.z, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        let v = ThreeVector::from_args(1.0, -1.0, 0.0) / 0.0;
        assert_eq!(v.x, f64::INFINITY);
        assert_eq!(v.y, f64::NEG_INFINITY);
        assert!(v.z.is_nan());
    }
}
