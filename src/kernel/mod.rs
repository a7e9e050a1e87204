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

pub mod f64_kernel;
pub mod predicates;
pub mod robust_kernel;

use std::cmp::Ordering;

use crate::geometry::point::Point;

pub use f64_kernel::F64Kernel;
pub use robust_kernel::RobustKernel;

/// Unit roundoff step of `f64` (`nextafter(1, 2) - 1`).
pub const EPSILON: f64 = f64::EPSILON;

/// Relative error bounds of the float filters, as multiples of the
/// permanent of each expression. Tuned against the stress tests.
pub const ORIENT_ERR_BOUND: f64 = 12.0 * EPSILON;
pub const INCIRCLE_ERR_BOUND: f64 = 12.0 * EPSILON;
pub const DISTANCE_ERR_BOUND: f64 = 12.0 * EPSILON;

/// Geometric decisions the triangulator relies on.
///
/// All orientations follow [`area`](crate::geometry::util::area): `Greater`
/// is the winding of emitted triangles, `Less` the opposite one.
pub trait Kernel {
    /// Sign of `area(a, b, c)`.
    fn area_sign(a: &Point, b: &Point, c: &Point) -> Ordering;

    /// `true` when `a, b, c` wind against the triangle orientation, i.e. the
    /// signed area is negative. For the advancing front this means the edge
    /// `b -> c` is visible from `a`.
    #[inline]
    fn orient(a: &Point, b: &Point, c: &Point) -> bool {
        Self::area_sign(a, b, c) == Ordering::Less
    }

    /// `true` when `p` lies strictly inside the circle through `a, b, c`,
    /// which must have the triangle winding.
    fn in_circle(a: &Point, b: &Point, c: &Point, p: &Point) -> bool;

    /// Ordering of `|p - a|^2` against `|p - b|^2`.
    fn distance_compare(p: &Point, a: &Point, b: &Point) -> Ordering;
}
