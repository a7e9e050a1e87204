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

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sweepline_delaunay::geometry::util::circumradius;
use sweepline_delaunay::{EMPTY, Point, triangulate};

fn random_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(rng.random::<f64>() * 100.0, rng.random::<f64>() * 100.0))
        .collect()
}

#[test]
fn test_voronoi_edges_cross_interior_edges() {
    let tri = triangulate(&random_points(400, 1)).unwrap();
    let interior = tri.halfedges.iter().filter(|&&h| h != EMPTY).count();
    let edges = tri.voronoi_edges();
    assert_eq!(edges.len(), interior / 2);

    let centers = tri.circumcenters();
    for edge in &edges {
        let twin = tri.halfedges[edge.edge];
        assert!(edge.edge < twin);
        assert_eq!(edge.a, centers[edge.edge / 3]);
        assert_eq!(edge.b, centers[twin / 3]);
    }
}

#[test]
fn test_circumcenters_are_equidistant() {
    let tri = triangulate(&random_points(300, 2)).unwrap();
    for (t, center) in tri.circumcenters().iter().enumerate() {
        let [a, b, c] = tri.triangle_points(t);
        let r = circumradius(&a, &b, &c);
        assert_relative_eq!(center.distance(&a), r, max_relative = 1e-6);
        assert_relative_eq!(center.distance(&b), r, max_relative = 1e-6);
        assert_relative_eq!(center.distance(&c), r, max_relative = 1e-6);
    }
}

#[test]
fn test_cell_vertices_are_nearest_to_their_site() {
    let points = random_points(200, 3);
    let tri = triangulate(&points).unwrap();
    let cells = tri.voronoi_cells();
    assert_eq!(cells.len(), points.len());

    for cell in &cells {
        let site = points[cell.index];
        assert!(!cell.vertices.is_empty());
        for v in &cell.vertices {
            let nearest = points
                .iter()
                .map(|p| p.distance(v))
                .fold(f64::INFINITY, f64::min);
            assert_relative_eq!(site.distance(v), nearest, max_relative = 1e-6);
        }
    }
}

#[test]
fn test_hull_cells_are_open() {
    let points = random_points(200, 4);
    let tri = triangulate(&points).unwrap();
    for cell in tri.voronoi_cells() {
        assert_eq!(cell.closed, !tri.hull.contains(&cell.index), "cell {}", cell.index);
    }
}
