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

//! Planar Delaunay triangulation by radial sweep.
//!
//! Points are sorted by their distance to the circumcenter of a small seed
//! triangle and inserted one by one against an advancing convex front. Each
//! new triangle is legalized with edge flips, so the finished mesh satisfies
//! the empty-circumcircle property. Orientation and in-circle decisions go
//! through a [`Kernel`](kernel::Kernel); the default [`RobustKernel`]
//! falls back to exact big-integer arithmetic whenever the float answer is
//! within its error bound.
//!
//! ```
//! use sweepline_delaunay::{EMPTY, Point, triangulate};
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ];
//! let tri = triangulate(&points).unwrap();
//! assert_eq!(tri.triangles, vec![0, 2, 1, 0, 3, 2]);
//! assert_eq!(tri.halfedges, vec![5, EMPTY, EMPTY, EMPTY, EMPTY, 0]);
//! ```

pub mod error;
pub mod geometry;
pub mod kernel;
pub mod mesh;
pub mod numeric;
pub mod operations;

pub use error::{DelaunayError, ValidationError};
pub use geometry::point::Point;
pub use kernel::{F64Kernel, Kernel, RobustKernel};
pub use mesh::half_edge::{EMPTY, next_halfedge, prev_halfedge, triangle_of_edge};
pub use operations::triangulation::voronoi::{VoronoiCell, VoronoiEdge};
pub use operations::triangulation::{Triangulation, triangulate, triangulate_with_kernel};
