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

//! Advancing front of the sweep.
//!
//! The front is the convex boundary of the region triangulated so far, kept
//! as a circular doubly linked list over an arena. A node lives in the slot
//! of the point it carries, so node index and point index coincide and a slot
//! is written at most once. Removal only flags the node and relinks its
//! neighbours. A pseudo-angle hash around the seed circumcenter gives an O(1)
//! amortized starting node for visibility walks.

use crate::geometry::point::Point;
use crate::kernel::Kernel;
use crate::mesh::half_edge::EMPTY;

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) point: Point,
    /// Hull half-edge running from this node to `next`.
    pub(crate) tri: usize,
    pub(crate) prev: usize,
    pub(crate) next: usize,
    pub(crate) removed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            point: Point::default(),
            tri: EMPTY,
            prev: EMPTY,
            next: EMPTY,
            removed: false,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Front {
    nodes: Vec<Node>,
    hash: Vec<usize>,
    center: Point,
    start: usize,
}

impl Front {
    /// Empty front for `n` points, hashing around `center` into
    /// `ceil(sqrt(n))` buckets.
    pub(crate) fn new(n: usize, center: Point) -> Self {
        let hash_size = ((n as f64).sqrt().ceil() as usize).max(1);
        Self {
            nodes: vec![Node::default(); n],
            hash: vec![EMPTY; hash_size],
            center,
            start: EMPTY,
        }
    }

    /// Builds the three-node front of the seed triangle. Node `i` tracks
    /// half-edge `k` of triangle 0, which runs from seed `k` to seed `k + 1`.
    pub(crate) fn seed(&mut self, seeds: [(usize, Point); 3]) {
        let [(i0, p0), (i1, p1), (i2, p2)] = seeds;

        let n0 = &mut self.nodes[i0];
        n0.point = p0;
        n0.prev = i0;
        n0.next = i0;
        self.start = i0;

        self.insert_after(i0, i1, p1);
        self.insert_after(i1, i2, p2);

        self.nodes[i0].tri = 0;
        self.nodes[i1].tri = 1;
        self.nodes[i2].tri = 2;

        self.hash_node(i0);
        self.hash_node(i1);
        self.hash_node(i2);
    }

    /// Pseudo-angle bucket of `p` around the center. The pseudo-angle
    /// `1 - dx / (|dx| + |dy|)` (negated below the center) grows
    /// monotonically with the true angle and needs no trigonometry.
    pub(crate) fn hash_key(&self, p: &Point) -> usize {
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        let mut angle = 1.0 - dx / (dx.abs() + dy.abs());
        if dy < 0.0 {
            angle = -angle;
        }
        let len = self.hash.len();
        (((2.0 + angle) / 4.0 * len as f64).floor() as usize) % len
    }

    pub(crate) fn hash_node(&mut self, node: usize) {
        let key = self.hash_key(&self.nodes[node].point);
        self.hash[key] = node;
    }

    /// Links a fresh node for point `index` right after `prev`. The new node
    /// becomes the start of hull traversals and has no tracked half-edge yet.
    pub(crate) fn insert_after(&mut self, prev: usize, index: usize, point: Point) -> usize {
        let next = self.nodes[prev].next;
        self.nodes[index] = Node {
            point,
            tri: EMPTY,
            prev,
            next,
            removed: false,
        };
        self.nodes[next].prev = index;
        self.nodes[prev].next = index;
        self.start = index;
        index
    }

    /// Unlinks `node` and returns its predecessor.
    pub(crate) fn remove(&mut self, node: usize) -> usize {
        let Node { prev, next, .. } = self.nodes[node];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[node].removed = true;
        prev
    }

    #[inline]
    pub(crate) fn next(&self, node: usize) -> usize {
        self.nodes[node].next
    }

    #[inline]
    pub(crate) fn prev(&self, node: usize) -> usize {
        self.nodes[node].prev
    }

    #[inline]
    pub(crate) fn point(&self, node: usize) -> &Point {
        &self.nodes[node].point
    }

    #[inline]
    pub(crate) fn tri(&self, node: usize) -> usize {
        self.nodes[node].tri
    }

    #[inline]
    pub(crate) fn set_tri(&mut self, node: usize, tri: usize) {
        self.nodes[node].tri = tri;
    }

    /// Finds a front edge `(e, e.next)` visible from `p`.
    ///
    /// Starts at the hashed node for `p`, probing later buckets when the
    /// stored node is missing or removed, then walks forward. Returns the edge
    /// node and whether it is the node the walk started from, in which case
    /// edges before it may be visible too. `None` means the walk came back
    /// around without success.
    pub(crate) fn find_visible_edge<K: Kernel>(&self, p: &Point) -> Option<(usize, bool)> {
        let len = self.hash.len();
        let key = self.hash_key(p);
        let start = (0..len)
            .map(|j| self.hash[(key + j) % len])
            .find(|&node| node != EMPTY && !self.nodes[node].removed)
            .unwrap_or(self.start);

        let mut e = start;
        while !K::orient(p, self.point(e), self.point(self.next(e))) {
            e = self.next(e);
            if e == start {
                return None;
            }
        }
        Some((e, e == start))
    }

    /// Points the node that tracked hull half-edge `old` at `new` instead.
    /// Needed when a flip turns a different half-edge into that hull edge.
    pub(crate) fn retarget(&mut self, old: usize, new: usize) {
        let mut e = self.start;
        loop {
            if self.nodes[e].tri == old {
                self.nodes[e].tri = new;
                break;
            }
            e = self.nodes[e].prev;
            if e == self.start {
                break;
            }
        }
    }

    /// Surviving nodes in circular order from the start node.
    pub(crate) fn hull(&self) -> Vec<usize> {
        let mut hull = Vec::new();
        if self.start == EMPTY {
            return hull;
        }
        let mut e = self.start;
        loop {
            hull.push(e);
            e = self.nodes[e].next;
            if e == self.start {
                break;
            }
        }
        hull
    }
}
