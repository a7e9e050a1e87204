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

use crate::error::DelaunayError;
use crate::geometry::point::Point;
use crate::geometry::util::area;
use crate::kernel::{Kernel, RobustKernel};
use crate::mesh::half_edge::{EMPTY, edges_of_triangle, next_halfedge};

mod delaunay;
pub mod validation;
pub mod voronoi;

use delaunay::Triangulator;

/// Delaunay triangulation of a point set, stored as flat half-edge arrays.
///
/// Triangle `t` has vertices `triangles[3t..3t + 3]`, all with positive
/// [`area`]. Half-edge `e` runs from `triangles[e]` to
/// `triangles[next_halfedge(e)]`, and `halfedges[e]` is its twin in the
/// neighbouring triangle or [`EMPTY`] on the hull.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Triangulation {
    /// Copy of the input, indexed like the input.
    pub points: Vec<Point>,
    pub triangles: Vec<usize>,
    pub halfedges: Vec<usize>,
    /// Convex hull as point indices, in the same winding as the triangles.
    pub hull: Vec<usize>,
}

/// Triangulates `points` with [`RobustKernel`].
///
/// An empty slice gives an empty triangulation. Fewer than three distinct
/// points, or all points on one line, give [`DelaunayError::DegenerateInput`].
/// Duplicate points are left out of the mesh.
pub fn triangulate(points: &[Point]) -> Result<Triangulation, DelaunayError> {
    triangulate_with_kernel::<RobustKernel>(points)
}

/// Triangulates `points`, taking every geometric decision with `K`.
pub fn triangulate_with_kernel<K: Kernel>(points: &[Point]) -> Result<Triangulation, DelaunayError> {
    Triangulator::<K>::new(points).run()
}

impl Triangulation {
    pub fn new(points: &[Point]) -> Result<Self, DelaunayError> {
        triangulate(points)
    }

    pub(crate) fn empty() -> Self {
        Self::default()
    }

    pub fn num_triangles(&self) -> usize {
        self.triangles.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Vertices of triangle `t`.
    pub fn triangle_points(&self, t: usize) -> [Point; 3] {
        edges_of_triangle(t).map(|e| self.points[self.triangles[e]])
    }

    pub fn convex_hull(&self) -> Vec<Point> {
        self.hull.iter().map(|&i| self.points[i]).collect()
    }

    /// Every undirected edge once, as point index pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.halfedges
            .iter()
            .enumerate()
            .filter(|&(e, &twin)| twin == EMPTY || e < twin)
            .map(|(e, _)| (self.triangles[e], self.triangles[next_halfedge(e)]))
    }

    /// Incoming half-edges around the point that `start` ends at, in
    /// winding order. Stops early at the hull.
    pub fn edges_around_point(&self, start: usize) -> Vec<usize> {
        let mut result = Vec::new();
        let mut incoming = start;
        loop {
            result.push(incoming);
            incoming = self.halfedges[next_halfedge(incoming)];
            if incoming == EMPTY || incoming == start {
                break;
            }
        }
        result
    }

    /// Total triangle area.
    pub fn area(&self) -> f64 {
        let doubled: f64 = self
            .triangles
            .chunks_exact(3)
            .map(|t| area(&self.points[t[0]], &self.points[t[1]], &self.points[t[2]]))
            .sum();
        doubled / 2.0
    }

    /// Area of the hull polygon, in the same sign convention as
    /// [`area`](Self::area).
    pub fn hull_area(&self) -> f64 {
        let Some(&first) = self.hull.first() else {
            return 0.0;
        };
        let p0 = &self.points[first];
        let doubled: f64 = self
            .hull
            .windows(2)
            .skip(1)
            .map(|w| area(p0, &self.points[w[0]], &self.points[w[1]]))
            .sum();
        doubled / 2.0
    }
}
