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

//! Circumcenters and the Voronoi diagram dual to the triangulation.

use crate::geometry::point::Point;
use crate::geometry::util::circumcenter;
use crate::mesh::half_edge::{EMPTY, next_halfedge, triangle_of_edge};
use crate::operations::triangulation::Triangulation;

/// Voronoi edge dual to the interior edge `edge`: the segment joining the
/// circumcenters of the two triangles sharing it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoronoiEdge {
    pub edge: usize,
    pub a: Point,
    pub b: Point,
}

/// Voronoi cell of point `index`. Hull points get an open cell: the region
/// is unbounded and `vertices` only lists its finite corners.
#[derive(Clone, Debug, PartialEq)]
pub struct VoronoiCell {
    pub index: usize,
    pub vertices: Vec<Point>,
    pub closed: bool,
}

impl Triangulation {
    /// Circumcenter of triangle `t`.
    pub fn triangle_center(&self, t: usize) -> Point {
        let [a, b, c] = self.triangle_points(t);
        circumcenter(&a, &b, &c)
    }

    /// One circumcenter per triangle, in triangle order.
    pub fn circumcenters(&self) -> Vec<Point> {
        (0..self.num_triangles()).map(|t| self.triangle_center(t)).collect()
    }

    pub fn voronoi_edges(&self) -> Vec<VoronoiEdge> {
        self.halfedges
            .iter()
            .enumerate()
            .filter(|&(e, &twin)| twin != EMPTY && e < twin)
            .map(|(e, &twin)| VoronoiEdge {
                edge: e,
                a: self.triangle_center(triangle_of_edge(e)),
                b: self.triangle_center(triangle_of_edge(twin)),
            })
            .collect()
    }

    /// Cells of every point that belongs to at least one triangle, ordered by
    /// point index. A duplicate left out of the mesh has no cell; only the
    /// lowest-indexed copy of a repeated point gets one.
    pub fn voronoi_cells(&self) -> Vec<VoronoiCell> {
        // incoming half-edge per point, a hull one where it exists so the
        // walk around the point sees every triangle
        let mut index = vec![EMPTY; self.points.len()];
        for e in 0..self.triangles.len() {
            let endpoint = self.triangles[next_halfedge(e)];
            if index[endpoint] == EMPTY || self.halfedges[e] == EMPTY {
                index[endpoint] = e;
            }
        }

        let centers = self.circumcenters();
        index
            .iter()
            .enumerate()
            .filter(|&(_, &start)| start != EMPTY)
            .map(|(p, &start)| VoronoiCell {
                index: p,
                vertices: self
                    .edges_around_point(start)
                    .into_iter()
                    .map(|e| centers[triangle_of_edge(e)])
                    .collect(),
                closed: self.halfedges[start] != EMPTY,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::point::Point;
    use crate::operations::triangulation::triangulate;

    #[test]
    fn square_cells_share_the_center() {
        let tri = triangulate(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
        .unwrap();
        let center = Point::new(0.5, 0.5);
        assert_eq!(tri.circumcenters(), vec![center, center]);

        let edges = tri.voronoi_edges();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].edge, 0);

        let cells = tri.voronoi_cells();
        assert_eq!(cells.len(), 4);
        assert!(cells.iter().all(|c| !c.closed));
        assert_eq!(cells[0].vertices, vec![center, center]);
        assert_eq!(cells[1].vertices, vec![center]);
    }

    #[test]
    fn duplicates_share_one_cell() {
        let tri = triangulate(&[
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(0.0, 2.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
        ])
        .unwrap();
        let cells = tri.voronoi_cells();
        let indices: Vec<usize> = cells.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 4]);
    }
}
