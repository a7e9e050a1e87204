// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::ops::{Add, Sub};

use num_traits::ToPrimitive;

/// A point in the plane.
///
/// Equality is exact float equality; two points are duplicates only when
/// both coordinates compare equal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a point from any numeric type, or `None` if a coordinate has
    /// no `f64` representation.
    pub fn from_primitive<T: ToPrimitive>(x: T, y: T) -> Option<Self> {
        Some(Self {
            x: x.to_f64()?,
            y: y.to_f64()?,
        })
    }

    #[inline]
    pub fn squared_distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Component-wise `self - other`.
    #[inline]
    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        self.subtract(&rhs)
    }
}

impl<'a, 'b> Sub<&'b Point> for &'a Point {
    type Output = Point;
    fn sub(self, rhs: &'b Point) -> Point {
        self.subtract(rhs)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn metrics() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert_eq!(a.squared_distance(&b), 25.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b - a, Point::new(3.0, 4.0));
        assert_eq!(&b - &a, b.subtract(&a));
        assert_eq!(a + (b - a), b);
    }

    #[test]
    fn from_integers() {
        let p = Point::from_primitive(3_i32, -7_i32).unwrap();
        assert_eq!(p, Point::new(3.0, -7.0));
        assert_eq!(Point::from((0.5, 2.0)), Point::from([0.5, 2.0]));
    }

    #[test]
    fn negative_zero_is_a_duplicate() {
        assert_eq!(Point::new(0.0, 1.0), Point::new(-0.0, 1.0));
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
    }
}
