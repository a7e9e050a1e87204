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

//! Float evaluation of the predicate polynomials.
//!
//! Each function returns the value of the expression together with its
//! permanent (the same expression with every product term replaced by its
//! absolute value), which scales the rounding error bound.

use crate::geometry::point::Point;

/// `area(a, b, c)` and its permanent.
#[inline]
pub fn orient_det(a: &Point, b: &Point, c: &Point) -> (f64, f64) {
    let left = (b.y - a.y) * (c.x - b.x);
    let right = (b.x - a.x) * (c.y - b.y);
    (left - right, left.abs() + right.abs())
}

/// In-circle determinant of `p` against `a, b, c` and its permanent.
/// Negative when `p` is inside.
#[inline]
pub fn in_circle_det(a: &Point, b: &Point, c: &Point, p: &Point) -> (f64, f64) {
    let dx = a.x - p.x;
    let dy = a.y - p.y;
    let ex = b.x - p.x;
    let ey = b.y - p.y;
    let fx = c.x - p.x;
    let fy = c.y - p.y;

    let ap = dx * dx + dy * dy;
    let bp = ex * ex + ey * ey;
    let cp = fx * fx + fy * fy;

    let det = dx * (ey * cp - bp * fy) - dy * (ex * cp - bp * fx) + ap * (ex * fy - ey * fx);
    let permanent = dx.abs() * ((ey * cp).abs() + (bp * fy).abs())
        + dy.abs() * ((ex * cp).abs() + (bp * fx).abs())
        + ap * ((ex * fy).abs() + (ey * fx).abs());
    (det, permanent)
}

/// `|p - a|^2 - |p - b|^2` and its permanent.
#[inline]
pub fn distance_det(p: &Point, a: &Point, b: &Point) -> (f64, f64) {
    let da = p.squared_distance(a);
    let db = p.squared_distance(b);
    (da - db, da + db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permanents_bound_values() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, 1.0);
        let c = Point::new(1.0, 0.0);
        let p = Point::new(0.5, 0.5);

        let (det, perm) = orient_det(&a, &b, &c);
        assert_eq!(det, 1.0);
        assert!(perm >= det.abs());

        let (det, perm) = in_circle_det(&a, &b, &c, &p);
        assert_eq!(det, -0.5);
        assert!(perm >= det.abs());

        let (det, perm) = distance_det(&p, &a, &Point::new(2.0, 0.5));
        assert_eq!(det, 0.5 - 2.25);
        assert_eq!(perm, 2.75);
    }
}
