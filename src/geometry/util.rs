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

use crate::geometry::point::Point;

/// Signed area term used throughout the engine:
/// `(b.y - a.y) * (c.x - b.x) - (b.x - a.x) * (c.y - b.y)`.
///
/// Twice the triangle area, positive for the winding every emitted triangle
/// has (counter-clockwise with the y axis pointing down), negative for the
/// opposite winding, zero when collinear.
#[inline]
pub fn area(a: &Point, b: &Point, c: &Point) -> f64 {
    (b.y - a.y) * (c.x - b.x) - (b.x - a.x) * (c.y - b.y)
}

/// Offset of the circumcenter of `abc` from `a`, with the raw terms the
/// degeneracy checks need.
#[inline]
fn circumdelta(a: &Point, b: &Point, c: &Point) -> (f64, f64, f64, f64, f64) {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let ex = c.x - a.x;
    let ey = c.y - a.y;

    let bl = dx * dx + dy * dy;
    let cl = ex * ex + ey * ey;
    let d = dx * ey - dy * ex;

    let x = (ey * bl - dy * cl) * 0.5 / d;
    let y = (dx * cl - ex * bl) * 0.5 / d;
    (x, y, bl, cl, d)
}

/// Squared circumradius of `abc`.
///
/// Coincident or collinear triples report `f64::INFINITY` instead of
/// dividing by zero, so they never win a minimum search.
pub fn circumradius_squared(a: &Point, b: &Point, c: &Point) -> f64 {
    let (x, y, bl, cl, d) = circumdelta(a, b, c);
    let r = x * x + y * y;
    if bl == 0.0 || cl == 0.0 || d == 0.0 || r == 0.0 || !r.is_finite() {
        return f64::INFINITY;
    }
    r
}

pub fn circumradius(a: &Point, b: &Point, c: &Point) -> f64 {
    circumradius_squared(a, b, c).sqrt()
}

/// Circumcenter of `abc`. Not finite for collinear input.
pub fn circumcenter(a: &Point, b: &Point, c: &Point) -> Point {
    let (x, y, _, _, _) = circumdelta(a, b, c);
    *a + Point::new(x, y)
}

/// Axis-aligned bounds as `(min, max)`, or `None` for an empty slice.
pub fn bounds(points: &[Point]) -> Option<(Point, Point)> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}

/// `x * 2^e`, applied in steps so that no intermediate power of two
/// overflows. Exact unless the result leaves the normal range.
pub fn scale_by_pow2(mut x: f64, mut e: i32) -> f64 {
    const STEP: i32 = 1000;
    while e > STEP {
        x *= 2.0_f64.powi(STEP);
        e -= STEP;
    }
    while e < -STEP {
        x *= 2.0_f64.powi(-STEP);
        e += STEP;
    }
    x * 2.0_f64.powi(e)
}

/// Copy of `points` scaled by a power of two so the largest coordinate
/// magnitude lands near 1.
///
/// The rescale is exact, so every homogeneous predicate keeps its sign, and
/// closed-form terms such as [`circumradius_squared`] stay clear of overflow
/// and underflow. Only coordinates more than about `2^1022` times smaller than
/// the largest one lose precision.
pub fn normalize(points: &[Point]) -> Vec<Point> {
    let max = points
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(0.0, f64::max);
    if max == 0.0 || !max.is_finite() {
        return points.to_vec();
    }
    let e = -(max.log2().floor() as i32);
    points
        .iter()
        .map(|p| Point::new(scale_by_pow2(p.x, e), scale_by_pow2(p.y, e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_sign_convention() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(0.0, 1.0);
        assert_eq!(area(&a, &b, &c), -1.0);
        assert_eq!(area(&a, &c, &b), 1.0);
        assert_eq!(area(&a, &b, &Point::new(2.0, 0.0)), 0.0);
    }

    #[test]
    fn circumcircle_of_right_triangle() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(2.0, 0.0);
        let c = Point::new(0.0, 2.0);
        assert_eq!(circumcenter(&a, &b, &c), Point::new(1.0, 1.0));
        assert_eq!(circumradius_squared(&a, &b, &c), 2.0);
        assert_eq!(circumradius(&a, &b, &c), 2.0_f64.sqrt());
    }

    #[test]
    fn degenerate_circumradius_is_infinite() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 1.0);
        assert_eq!(circumradius_squared(&a, &b, &Point::new(2.0, 2.0)), f64::INFINITY);
        assert_eq!(circumradius_squared(&a, &a, &b), f64::INFINITY);
        assert_eq!(circumradius_squared(&a, &b, &a), f64::INFINITY);
        assert_eq!(circumradius(&b, &b, &b), f64::INFINITY);
    }

    #[test]
    fn bounds_of_points() {
        assert_eq!(bounds(&[]), None);
        let pts = [Point::new(1.0, -2.0), Point::new(-3.0, 4.0), Point::new(0.0, 0.0)];
        assert_eq!(bounds(&pts), Some((Point::new(-3.0, -2.0), Point::new(1.0, 4.0))));
    }

    #[test]
    fn power_of_two_scaling_is_exact() {
        assert_eq!(scale_by_pow2(3.0, -2), 0.75);
        assert_eq!(scale_by_pow2(scale_by_pow2(f64::MAX, -1500), 1500), f64::MAX);
        let tiny = f64::MIN_POSITIVE * 1.5;
        assert_eq!(scale_by_pow2(scale_by_pow2(tiny, 1500), -1500), tiny);
    }

    #[test]
    fn normalize_keeps_ratios() {
        let pts = [Point::new(0.0, 3.0e200), Point::new(-1.0e199, 7.0)];
        let scaled = normalize(&pts);
        let max = scaled[0].y;
        assert!((1.0..2.0).contains(&max));
        assert_eq!(scaled[1].x / max, pts[1].x / pts[0].y);

        let small = [Point::new(1.0e-250, 0.0), Point::new(0.0, 3.0e-251)];
        let scaled = normalize(&small);
        assert!((1.0..2.0).contains(&scaled[0].x));
        assert_eq!(normalize(&[Point::new(0.0, 0.0)]), vec![Point::new(0.0, 0.0)]);
    }
}
