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

//! Exact sign evaluation of the predicate polynomials.
//!
//! Every finite `f64` is `m * 2^e` for an integer mantissa `m`. Scaling all
//! operands of one predicate by the same power of two `2^-e_min` turns them
//! into integers without changing the sign of any homogeneous expression, so
//! the predicates below can be evaluated exactly with `rug::Integer`.

use std::cmp::Ordering;

use rug::Integer;

use crate::geometry::point::Point;

const MANTISSA_BITS: u32 = 52;
const MANTISSA_MASK: u64 = (1 << MANTISSA_BITS) - 1;
const EXPONENT_BIAS: i32 = 1075;
const SUBNORMAL_EXPONENT: i32 = -1074;

/// Splits `x` into `(m, e)` with `x == m * 2^e`. Zero maps to `(0, 0)`.
///
/// Only meaningful for finite input.
pub fn decompose(x: f64) -> (i64, i32) {
    if x == 0.0 {
        return (0, 0);
    }
    let bits = x.to_bits();
    let biased = ((bits >> MANTISSA_BITS) & 0x7ff) as i32;
    let fraction = (bits & MANTISSA_MASK) as i64;
    let (m, e) = if biased == 0 {
        (fraction, SUBNORMAL_EXPONENT)
    } else {
        (fraction | (1 << MANTISSA_BITS), biased - EXPONENT_BIAS)
    };
    if x.is_sign_negative() { (-m, e) } else { (m, e) }
}

/// Rescales `values` by a common power of two so that each becomes an exact
/// integer.
pub fn to_integers<const N: usize>(values: [f64; N]) -> [Integer; N] {
    let parts = values.map(decompose);
    let e_min = parts
        .iter()
        .filter(|(m, _)| *m != 0)
        .map(|&(_, e)| e)
        .min()
        .unwrap_or(0);
    parts.map(|(m, e)| {
        if m == 0 {
            Integer::new()
        } else {
            Integer::from(m) << ((e - e_min) as u32)
        }
    })
}

#[inline]
fn sub(a: &Integer, b: &Integer) -> Integer {
    Integer::from(a - b)
}

#[inline]
fn mul(a: &Integer, b: &Integer) -> Integer {
    Integer::from(a * b)
}

#[inline]
fn dot(x: &Integer, y: &Integer) -> Integer {
    mul(x, x) + mul(y, y)
}

/// Exact sign of [`area`](crate::geometry::util::area).
pub fn area_sign(a: &Point, b: &Point, c: &Point) -> Ordering {
    let [ax, ay, bx, by, cx, cy] = to_integers([a.x, a.y, b.x, b.y, c.x, c.y]);
    let bay = sub(&by, &ay);
    let cbx = sub(&cx, &bx);
    let bax = sub(&bx, &ax);
    let cby = sub(&cy, &by);
    let det = mul(&bay, &cbx) - mul(&bax, &cby);
    det.cmp0()
}

/// Exact sign of the in-circle determinant; `Less` means `p` is strictly
/// inside the circle through `a`, `b`, `c`.
pub fn in_circle_sign(a: &Point, b: &Point, c: &Point, p: &Point) -> Ordering {
    let [ax, ay, bx, by, cx, cy, px, py] =
        to_integers([a.x, a.y, b.x, b.y, c.x, c.y, p.x, p.y]);
    let dx = sub(&ax, &px);
    let dy = sub(&ay, &py);
    let ex = sub(&bx, &px);
    let ey = sub(&by, &py);
    let fx = sub(&cx, &px);
    let fy = sub(&cy, &py);

    let ap = dot(&dx, &dy);
    let bp = dot(&ex, &ey);
    let cp = dot(&fx, &fy);

    let t1 = mul(&dx, &(mul(&ey, &cp) - mul(&bp, &fy)));
    let t2 = mul(&dy, &(mul(&ex, &cp) - mul(&bp, &fx)));
    let t3 = mul(&ap, &(mul(&ex, &fy) - mul(&ey, &fx)));
    let det = t1 - t2 + t3;
    det.cmp0()
}

/// Exact ordering of `|p - a|^2` against `|p - b|^2`.
pub fn distance_compare(p: &Point, a: &Point, b: &Point) -> Ordering {
    let [px, py, ax, ay, bx, by] = to_integers([p.x, p.y, a.x, a.y, b.x, b.y]);
    let da = dot(&sub(&ax, &px), &sub(&ay, &py));
    let db = dot(&sub(&bx, &px), &sub(&by, &py));
    da.cmp(&db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompose_round_trips() {
        for x in [1.0, -1.5, 0.1, 3.0e300, 12345.678, -7.25e-12] {
            let (m, e) = decompose(x);
            let back = m as f64 * 2f64.powi(e);
            assert_eq!(back, x, "{x}");
        }
        assert_eq!(decompose(0.0), (0, 0));
        assert_eq!(decompose(-0.0), (0, 0));
        assert_eq!(decompose(1.0), (1 << 52, -52));
        assert_eq!(decompose(f64::from_bits(1)), (1, -1074));
        assert_eq!(decompose(-f64::MIN_POSITIVE), (-(1 << 52), -1074));
    }

    #[test]
    fn common_scale_is_exact() {
        let [a, b, c] = to_integers([0.5, 3.0, 0.0]);
        assert_eq!(a, Integer::from(1_u64 << 52));
        assert_eq!(b, a.clone() * 6);
        assert_eq!(c, 0);
    }

    #[test]
    fn exact_signs() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(0.0, 1.0);
        assert_eq!(area_sign(&a, &b, &c), Ordering::Less);
        assert_eq!(area_sign(&a, &c, &b), Ordering::Greater);
        assert_eq!(area_sign(&a, &b, &Point::new(3.0, 0.0)), Ordering::Equal);

        // `a, c, b` has the engine winding; the unit square corner is on the circle
        assert_eq!(in_circle_sign(&a, &c, &b, &Point::new(1.0, 1.0)), Ordering::Equal);
        assert_eq!(in_circle_sign(&a, &c, &b, &Point::new(0.5, 0.5)), Ordering::Less);
        assert_eq!(in_circle_sign(&a, &c, &b, &Point::new(2.0, 2.0)), Ordering::Greater);

        assert_eq!(distance_compare(&a, &b, &c), Ordering::Equal);
        assert_eq!(distance_compare(&a, &b, &Point::new(2.0, 0.0)), Ordering::Less);
    }
}
