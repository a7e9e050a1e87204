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
use crate::kernel::Kernel;
use crate::kernel::predicates::{in_circle_det, orient_det};

/// Plain `f64` predicates with no error filter.
///
/// Fast, but near-degenerate input (cocircular or almost collinear points)
/// can make it decide inconsistently.
#[derive(Clone, Copy, Debug, Default)]
pub struct F64Kernel;

impl Kernel for F64Kernel {
    fn area_sign(a: &Point, b: &Point, c: &Point) -> Ordering {
        let (det, _) = orient_det(a, b, c);
        det.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
    }

    fn in_circle(a: &Point, b: &Point, c: &Point, p: &Point) -> bool {
        let (det, _) = in_circle_det(a, b, c, p);
        det < 0.0
    }

    fn distance_compare(p: &Point, a: &Point, b: &Point) -> Ordering {
        let da = p.squared_distance(a);
        let db = p.squared_distance(b);
        da.partial_cmp(&db).unwrap_or(Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_decisions() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(0.0, 1.0);
        assert!(F64Kernel::orient(&a, &b, &c));
        assert!(!F64Kernel::orient(&a, &c, &b));
        assert!(F64Kernel::in_circle(&a, &c, &b, &Point::new(0.4, 0.4)));
        assert!(!F64Kernel::in_circle(&a, &c, &b, &Point::new(1.0, 1.0)));
        assert_eq!(F64Kernel::distance_compare(&a, &b, &c), Ordering::Equal);
    }
}
