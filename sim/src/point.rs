use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A position or displacement on the canvas, in pixels. `y` grows downwards.
#[derive(PartialEq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64);

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.1 += rhs.1;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Self::Output {
        Point(self.0 * rhs, self.1 * rhs)
    }
}

impl Point {
    /// Unit vector pointing at `angle` radians, measured from the positive x axis.
    pub fn from_angle(angle: f64) -> Point {
        Point(angle.cos(), angle.sin())
    }

    /// Euclidean length of the [`Point`] as a vector.
    pub fn length(&self) -> f64 {
        self.0.hypot(self.1)
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (*other - *self).length()
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_and_distance() {
        assert_eq!(Point(3.0, 4.0).length(), 5.0);
        assert_eq!(Point(1.0, 1.0).distance(&Point(4.0, 5.0)), 5.0);
        assert_eq!(Point(2.0, 2.0).distance(&Point(2.0, 2.0)), 0.0);
    }

    #[test]
    fn test_arithmetic() {
        let mut point = Point(1.0, 2.0) + Point(0.5, -1.0);
        assert_eq!(point, Point(1.5, 1.0));

        point += Point(1.0, 1.0) * 2.0;
        assert_eq!(point, Point(3.5, 3.0));
        assert_eq!(point - Point(0.5, 1.0), Point(3.0, 2.0));
    }

    #[test]
    fn test_from_angle_is_unit() {
        for i in 0..16 {
            let angle = i as f64 * std::f64::consts::TAU / 16.0;
            assert!((Point::from_angle(angle).length() - 1.0).abs() < 1e-12);
        }
    }
}
