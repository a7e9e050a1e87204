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

use thiserror::Error;

/// Reasons a triangulation call can fail. Both are terminal; no partial mesh
/// is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DelaunayError {
    /// Fewer than three distinct points, or every point is collinear with
    /// the first two seeds.
    #[error("no Delaunay triangulation exists for this input")]
    DegenerateInput,

    /// The front walk went all the way around without finding an edge
    /// visible from `point`, or `point` has a non-finite coordinate.
    #[error("malformed input at point {point}: no visible front edge")]
    MalformedWalk {
        /// Index of the point being inserted.
        point: usize,
    },
}

/// Violations reported by [`Triangulation::validate`](crate::Triangulation::validate)
/// and [`Triangulation::validate_delaunay`](crate::Triangulation::validate_delaunay).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("triangle array length {0} is not a multiple of 3")]
    TriangleLength(usize),

    #[error("half-edge array has length {halfedges}, triangle array has length {triangles}")]
    LengthMismatch { triangles: usize, halfedges: usize },

    #[error("half-edge {edge} refers to out-of-range index {index}")]
    IndexOutOfRange { edge: usize, index: usize },

    #[error("half-edge {edge} links to {twin}, which links back to {back}")]
    Asymmetric { edge: usize, twin: usize, back: usize },

    #[error("half-edge {edge} and its twin {twin} do not join the same two points")]
    TwinMismatch { edge: usize, twin: usize },

    #[error("triangle {triangle} has negative signed area")]
    Winding { triangle: usize },

    #[error("point {point} lies inside the circumcircle of triangle {triangle}")]
    NotDelaunay { triangle: usize, point: usize },
}
