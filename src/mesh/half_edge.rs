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

/// Marks a half-edge with no twin: the edge lies on the convex hull.
pub const EMPTY: usize = usize::MAX;

/// Next half-edge in the same triangle.
#[inline]
pub fn next_halfedge(e: usize) -> usize {
    if e % 3 == 2 { e - 2 } else { e + 1 }
}

/// Previous half-edge in the same triangle.
#[inline]
pub fn prev_halfedge(e: usize) -> usize {
    if e % 3 == 0 { e + 2 } else { e - 1 }
}

/// Triangle that owns half-edge `e`.
#[inline]
pub fn triangle_of_edge(e: usize) -> usize {
    e / 3
}

/// The three half-edges of triangle `t`.
#[inline]
pub fn edges_of_triangle(t: usize) -> [usize; 3] {
    [3 * t, 3 * t + 1, 3 * t + 2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_within_a_triangle() {
        assert_eq!(next_halfedge(3), 4);
        assert_eq!(next_halfedge(5), 3);
        assert_eq!(prev_halfedge(3), 5);
        assert_eq!(prev_halfedge(7), 6);
        for e in 0..9 {
            assert_eq!(prev_halfedge(next_halfedge(e)), e);
            assert_eq!(triangle_of_edge(next_halfedge(e)), triangle_of_edge(e));
        }
        assert_eq!(edges_of_triangle(2), [6, 7, 8]);
    }
}
