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

use std::cmp::Ordering;

use crate::geometry::point::Point;
use crate::kernel::predicates::{distance_det, in_circle_det, orient_det};
use crate::kernel::{DISTANCE_ERR_BOUND, INCIRCLE_ERR_BOUND, Kernel, ORIENT_ERR_BOUND};
use crate::numeric::exact;

/// Filtered predicates with an exact fallback.
///
/// The float value decides whenever it clears `bound * permanent`; anything
/// closer to zero (including overflow to infinity or NaN) is re-evaluated
/// exactly in `rug::Integer`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RobustKernel;

/// Sign of `det` if it is certain, `None` if the exact path must decide.
///
/// Values below `f64::MIN_POSITIVE` always defer: products that underflow
/// carry an absolute error the relative bound does not cover.
#[inline]
fn filtered_sign(det: f64, permanent: f64, bound: f64) -> Option<Ordering> {
    let err = bound * permanent + f64::MIN_POSITIVE;
    if det > err {
        Some(Ordering::Greater)
    } else if det < -err {
        Some(Ordering::Less)
    } else {
        None
    }
}

impl Kernel for RobustKernel {
    fn area_sign(a: &Point, b: &Point, c: &Point) -> Ordering {
        let (det, permanent) = orient_det(a, b, c);
        filtered_sign(det, permanent, ORIENT_ERR_BOUND)
            .unwrap_or_else(|| exact::area_sign(a, b, c))
    }

    fn in_circle(a: &Point, b: &Point, c: &Point, p: &Point) -> bool {
        let (det, permanent) = in_circle_det(a, b, c, p);
        let sign = filtered_sign(det, permanent, INCIRCLE_ERR_BOUND)
            .unwrap_or_else(|| exact::in_circle_sign(a, b, c, p));
        sign == Ordering::Less
    }

    fn distance_compare(p: &Point, a: &Point, b: &Point) -> Ordering {
        let (det, permanent) = distance_det(p, a, b);
        filtered_sign(det, permanent, DISTANCE_ERR_BOUND)
            .unwrap_or_else(|| exact::distance_compare(p, a, b))
    }
}
