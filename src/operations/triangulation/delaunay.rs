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

//! Sweep construction of the Delaunay triangulation.
//!
//! 1. Pick a seed triangle with a small circumcircle near the middle of the
//!    point cloud.
//! 2. Sort all points by distance from the seed circumcenter. Every point is
//!    then strictly outside the hull of the points before it.
//! 3. Insert points in that order, connecting each to the front edges it can
//!    see and legalizing every new edge with flips.

use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::error::DelaunayError;
use crate::geometry::point::Point;
use crate::geometry::util::{bounds, circumcenter, circumradius_squared, normalize};
use crate::kernel::Kernel;
use crate::mesh::front::Front;
use crate::mesh::half_edge::{EMPTY, next_halfedge, prev_halfedge};
use crate::operations::triangulation::Triangulation;

/// Working state of one triangulation call. Nothing outlives [`run`](Self::run).
///
/// The sweep runs on `points`, a copy of the input rescaled by a power of
/// two, so every predicate decides exactly as it would on the input.
pub(crate) struct Triangulator<'a, K: Kernel> {
    input: &'a [Point],
    points: Vec<Point>,
    triangles: Vec<usize>,
    halfedges: Vec<usize>,
    front: Front,
    stack: Vec<usize>,
    _kernel: PhantomData<K>,
}

/// Indices of the seed triangle, already in triangle winding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Seed {
    pub(crate) i0: usize,
    pub(crate) i1: usize,
    pub(crate) i2: usize,
}

impl Seed {
    #[inline]
    fn contains(&self, i: usize) -> bool {
        i == self.i0 || i == self.i1 || i == self.i2
    }
}

/// Index of the first point nearest to `target`, skipping `skip` and, when
/// `distinct` is set, points that coincide with `target`.
fn nearest(points: &[Point], target: &Point, skip: Option<usize>, distinct: bool) -> Option<usize> {
    let mut best = None;
    let mut min_dist = f64::INFINITY;
    for (i, p) in points.iter().enumerate() {
        if Some(i) == skip {
            continue;
        }
        let d = p.distance(target);
        if distinct && d <= 0.0 {
            continue;
        }
        if d < min_dist {
            best = Some(i);
            min_dist = d;
        }
    }
    best
}

/// Chooses the seed triangle: the point nearest the bounding-box midpoint,
/// its nearest distinct neighbour, and the third point giving the smallest
/// circumcircle. Candidates the kernel finds collinear with the first two
/// are passed over even when rounding gave them a finite circumradius.
pub(crate) fn select_seed<K: Kernel>(points: &[Point]) -> Result<Seed, DelaunayError> {
    let (min, max) = bounds(points).ok_or(DelaunayError::DegenerateInput)?;
    let mid = Point::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0);

    let i0 = nearest(points, &mid, None, false).ok_or(DelaunayError::DegenerateInput)?;
    let p0 = points[i0];
    let i1 = nearest(points, &p0, Some(i0), true).ok_or(DelaunayError::DegenerateInput)?;
    let p1 = points[i1];

    let mut i2 = EMPTY;
    let mut min_radius = f64::INFINITY;
    for (i, p) in points.iter().enumerate() {
        if i == i0 || i == i1 {
            continue;
        }
        let r = circumradius_squared(&p0, &p1, p);
        if r < min_radius && K::area_sign(&p0, &p1, p) != Ordering::Equal {
            i2 = i;
            min_radius = r;
        }
    }
    if min_radius == f64::INFINITY {
        return Err(DelaunayError::DegenerateInput);
    }

    match K::area_sign(&p0, &p1, &points[i2]) {
        Ordering::Greater => Ok(Seed { i0, i1, i2 }),
        Ordering::Less => Ok(Seed { i0, i1: i2, i2: i1 }),
        Ordering::Equal => Err(DelaunayError::DegenerateInput),
    }
}

/// Point indices ordered by distance from `center`, then by x, then by y.
/// The sort is stable, so duplicates keep their index order.
pub(crate) fn sweep_order<K: Kernel>(points: &[Point], center: &Point) -> Vec<usize> {
    let mut ids: Vec<usize> = (0..points.len()).collect();
    ids.sort_by(|&a, &b| {
        let (pa, pb) = (&points[a], &points[b]);
        K::distance_compare(center, pa, pb)
            .then_with(|| pa.x.partial_cmp(&pb.x).unwrap_or(Ordering::Equal))
            .then_with(|| pa.y.partial_cmp(&pb.y).unwrap_or(Ordering::Equal))
    });
    ids
}

impl<'a, K: Kernel> Triangulator<'a, K> {
    pub(crate) fn new(input: &'a [Point]) -> Self {
        Self {
            input,
            points: Vec::new(),
            triangles: Vec::new(),
            halfedges: Vec::new(),
            front: Front::new(0, Point::default()),
            stack: Vec::new(),
            _kernel: PhantomData,
        }
    }

    pub(crate) fn run(mut self) -> Result<Triangulation, DelaunayError> {
        let input = self.input;
        let n = input.len();
        if n == 0 {
            return Ok(Triangulation::empty());
        }
        if let Some(bad) = input.iter().position(|p| !p.is_finite()) {
            tracing::debug!(point = bad, "non-finite coordinate");
            return Err(DelaunayError::MalformedWalk { point: bad });
        }

        self.points = normalize(input);
        let points = &self.points;
        let seed = select_seed::<K>(points).inspect_err(|_| {
            tracing::debug!(points = n, "no seed triangle with a finite circumcircle");
        })?;
        let center = circumcenter(&points[seed.i0], &points[seed.i1], &points[seed.i2]);
        tracing::debug!(?seed, ?center, points = n, "seed triangle selected");

        let ids = sweep_order::<K>(points, &center);
        tracing::debug!(first = ids[0], last = ids[n - 1], "points sorted around seed circumcenter");

        let max_triangles = 2 * n - 5;
        self.triangles = Vec::with_capacity(max_triangles * 3);
        self.halfedges = Vec::with_capacity(max_triangles * 3);

        self.front = Front::new(n, center);
        self.front.seed([
            (seed.i0, self.points[seed.i0]),
            (seed.i1, self.points[seed.i1]),
            (seed.i2, self.points[seed.i2]),
        ]);
        self.add_triangle(seed.i0, seed.i1, seed.i2, EMPTY, EMPTY, EMPTY);

        let mut previous: Option<Point> = None;
        for &i in &ids {
            let p = self.points[i];
            if previous == Some(p) {
                continue;
            }
            previous = Some(p);
            if seed.contains(i) {
                continue;
            }
            self.insert(i, &p).inspect_err(|_| {
                tracing::debug!(point = i, "front walk found no visible edge");
            })?;
        }

        self.triangles.shrink_to_fit();
        self.halfedges.shrink_to_fit();
        let hull = self.front.hull();
        tracing::debug!(
            triangles = self.triangles.len() / 3,
            hull = hull.len(),
            "triangulation complete"
        );

        Ok(Triangulation {
            points: input.to_vec(),
            triangles: self.triangles,
            halfedges: self.halfedges,
            hull,
        })
    }

    /// Adds point `i` outside the current front.
    fn insert(&mut self, i: usize, p: &Point) -> Result<(), DelaunayError> {
        let (e, walk_back) = self
            .front
            .find_visible_edge::<K>(p)
            .ok_or(DelaunayError::MalformedWalk { point: i })?;

        // first triangle against the visible edge
        let t = self.add_triangle(e, i, self.front.next(e), EMPTY, EMPTY, self.front.tri(e));
        self.front.set_tri(e, t);
        let node = self.front.insert_after(e, i, *p);
        let tri = self.legalize(t + 2);
        self.front.set_tri(node, tri);

        // forward: swallow front nodes while their outgoing edge stays visible
        let mut q = self.front.next(node);
        loop {
            let next = self.front.next(q);
            if !K::orient(p, self.front.point(q), self.front.point(next)) {
                break;
            }
            let t = self.add_triangle(q, i, next, self.front.tri(node), EMPTY, self.front.tri(q));
            let tri = self.legalize(t + 2);
            self.front.set_tri(node, tri);
            self.front.remove(q);
            q = next;
        }

        // backward, only when the walk may have started inside the visible run
        if walk_back {
            let mut q = self.front.prev(node);
            loop {
                let prev = self.front.prev(q);
                if !K::orient(p, self.front.point(prev), self.front.point(q)) {
                    break;
                }
                let t = self.add_triangle(prev, i, q, EMPTY, self.front.tri(q), self.front.tri(prev));
                self.legalize(t + 2);
                self.front.set_tri(prev, t);
                self.front.remove(q);
                q = prev;
            }
        }

        self.front.hash_node(node);
        self.front.hash_node(self.front.prev(node));
        Ok(())
    }

    /// Appends triangle `(i0, i1, i2)` whose half-edges pair with `a`, `b`,
    /// `c`, and returns its first half-edge.
    fn add_triangle(&mut self, i0: usize, i1: usize, i2: usize, a: usize, b: usize, c: usize) -> usize {
        let t = self.triangles.len();
        self.triangles.extend_from_slice(&[i0, i1, i2]);
        self.halfedges.extend_from_slice(&[EMPTY, EMPTY, EMPTY]);
        self.link(t, a);
        self.link(t + 1, b);
        self.link(t + 2, c);
        t
    }

    #[inline]
    fn link(&mut self, a: usize, b: usize) {
        self.halfedges[a] = b;
        if b != EMPTY {
            self.halfedges[b] = a;
        }
    }

    /// Flips edges until every edge reachable from `a` is locally Delaunay.
    ///
    /// ```text
    ///           pl                    pl
    ///          /||\                  /  \
    ///       al/ || \bl            al/    \a
    ///        /  ||  \              /      \
    ///       /  a||b  \    flip    /___ar___\
    ///     p0\   ||   /p1   =>   p0\---bl---/p1
    ///        \  ||  /              \      /
    ///       ar\ || /br             b\    /br
    ///          \||/                  \  /
    ///           pr                    pr
    /// ```
    ///
    /// Returns the `ar` half-edge of the last edge examined, which is the
    /// hull edge leaving the inserted point.
    fn legalize(&mut self, mut a: usize) -> usize {
        self.stack.clear();
        let mut ar;
        loop {
            let b = self.halfedges[a];
            ar = prev_halfedge(a);

            let illegal = b != EMPTY && {
                let al = next_halfedge(a);
                let bl = prev_halfedge(b);
                let p0 = &self.points[self.triangles[ar]];
                let pr = &self.points[self.triangles[a]];
                let pl = &self.points[self.triangles[al]];
                let p1 = &self.points[self.triangles[bl]];
                K::in_circle(p0, pr, pl, p1)
            };

            if illegal {
                let bl = prev_halfedge(b);
                self.triangles[a] = self.triangles[bl];
                self.triangles[b] = self.triangles[ar];

                let hbl = self.halfedges[bl];
                if hbl == EMPTY {
                    // the flip moved a hull edge from `bl` to `a`
                    self.front.retarget(bl, a);
                }
                let har = self.halfedges[ar];
                self.link(a, hbl);
                self.link(b, har);
                self.link(ar, bl);

                self.stack.push(next_halfedge(b));
                continue;
            }

            match self.stack.pop() {
                Some(next) => a = next,
                None => break,
            }
        }
        ar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::RobustKernel;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn seed_of_square_is_wound() {
        let seed = select_seed::<RobustKernel>(&square()).unwrap();
        assert_eq!(seed, Seed { i0: 0, i1: 2, i2: 1 });
    }

    #[test]
    fn seed_rejects_coincident_and_collinear() {
        let same = vec![Point::new(1.0, 1.0); 3];
        assert_eq!(select_seed::<RobustKernel>(&same), Err(DelaunayError::DegenerateInput));

        let line: Vec<Point> = (0..4).map(|i| Point::new(i as f64, 2.0 * i as f64)).collect();
        assert_eq!(select_seed::<RobustKernel>(&line), Err(DelaunayError::DegenerateInput));

        assert_eq!(select_seed::<RobustKernel>(&[]), Err(DelaunayError::DegenerateInput));
    }

    /// Three points exactly on `y = 3x` whose float circumradius is finite
    /// but smaller than that of any real triangle, plus two far points.
    fn rounded_collinear_candidate() -> Vec<Point> {
        let t0 = 1.0 + 59.0 * 2.0_f64.powi(-50);
        vec![
            Point::new(t0, 3.0 * t0),
            Point::new(2.0, 6.0),
            Point::new(3.75, 11.25),
            Point::new(3.0e18, -1.0e18),
            Point::new(-3.0e18, 1.0e18),
        ]
    }

    #[test]
    fn seed_skips_exactly_collinear_candidate() {
        let pts = rounded_collinear_candidate();
        assert!(circumradius_squared(&pts[0], &pts[1], &pts[2]).is_finite());
        assert_eq!(RobustKernel::area_sign(&pts[0], &pts[1], &pts[2]), Ordering::Equal);

        let seed = select_seed::<RobustKernel>(&pts).unwrap();
        assert_eq!(seed.i0, 0);
        assert!(seed.contains(1));
        assert!(!seed.contains(2));

        let tri = Triangulator::<RobustKernel>::new(&pts).run().unwrap();
        tri.validate_delaunay().unwrap();
    }

    #[test]
    fn sweep_order_breaks_ties_by_x_then_y() {
        let ids = sweep_order::<RobustKernel>(&square(), &Point::new(0.5, 0.5));
        assert_eq!(ids, vec![0, 3, 1, 2]);
    }

    #[test]
    fn sweep_order_keeps_duplicates_in_index_order() {
        let pts = vec![
            Point::new(2.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 0.0),
        ];
        let ids = sweep_order::<RobustKernel>(&pts, &Point::new(0.0, 0.0));
        assert_eq!(ids, vec![1, 3, 0, 2]);
    }

    #[test]
    fn flips_keep_halfedges_symmetric() {
        // a fan of points on a parabola forces repeated flips
        let pts: Vec<Point> = (0..40)
            .map(|i| {
                let x = i as f64 / 4.0 - 5.0;
                Point::new(x, x * x / 10.0)
            })
            .collect();
        let tri = Triangulator::<RobustKernel>::new(&pts).run().unwrap();
        for (e, &twin) in tri.halfedges.iter().enumerate() {
            if twin != EMPTY {
                assert_eq!(tri.halfedges[twin], e);
            }
        }
    }
}
