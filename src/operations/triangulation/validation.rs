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

//! Structural and Delaunay checks over a finished triangulation.

use std::cmp::Ordering;

use crate::error::ValidationError;
use crate::kernel::{Kernel, RobustKernel};
use crate::mesh::half_edge::{EMPTY, next_halfedge, prev_halfedge, triangle_of_edge};
use crate::operations::triangulation::Triangulation;

impl Triangulation {
    /// Checks array shapes, index ranges, half-edge symmetry, and that no
    /// triangle is wound backwards.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let len = self.triangles.len();
        if len % 3 != 0 {
            return Err(ValidationError::TriangleLength(len));
        }
        if self.halfedges.len() != len {
            return Err(ValidationError::LengthMismatch {
                triangles: len,
                halfedges: self.halfedges.len(),
            });
        }

        for (edge, &index) in self.triangles.iter().enumerate() {
            if index >= self.points.len() {
                return Err(ValidationError::IndexOutOfRange { edge, index });
            }
        }

        for (edge, &twin) in self.halfedges.iter().enumerate() {
            if twin == EMPTY {
                continue;
            }
            if twin >= len {
                return Err(ValidationError::IndexOutOfRange { edge, index: twin });
            }
            let back = self.halfedges[twin];
            if back != edge {
                return Err(ValidationError::Asymmetric { edge, twin, back });
            }
            if self.triangles[edge] != self.triangles[next_halfedge(twin)]
                || self.triangles[next_halfedge(edge)] != self.triangles[twin]
            {
                return Err(ValidationError::TwinMismatch { edge, twin });
            }
        }

        for triangle in 0..self.num_triangles() {
            let [a, b, c] = self.triangle_points(triangle);
            if RobustKernel::area_sign(&a, &b, &c) == Ordering::Less {
                return Err(ValidationError::Winding { triangle });
            }
        }
        Ok(())
    }

    /// [`validate`](Self::validate), then the empty-circumcircle test across
    /// every interior edge. Locally Delaunay everywhere implies globally
    /// Delaunay.
    pub fn validate_delaunay(&self) -> Result<(), ValidationError> {
        self.validate()?;
        for (edge, &twin) in self.halfedges.iter().enumerate() {
            if twin == EMPTY {
                continue;
            }
            let triangle = triangle_of_edge(edge);
            let [a, b, c] = self.triangle_points(triangle);
            let point = self.triangles[prev_halfedge(twin)];
            if RobustKernel::in_circle(&a, &b, &c, &self.points[point]) {
                return Err(ValidationError::NotDelaunay { triangle, point });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point;

    fn square() -> Triangulation {
        Triangulation {
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0),
            ],
            triangles: vec![0, 2, 1, 0, 3, 2],
            halfedges: vec![5, EMPTY, EMPTY, EMPTY, EMPTY, 0],
            hull: vec![3, 2, 1, 0],
        }
    }

    #[test]
    fn accepts_square() {
        assert_eq!(square().validate_delaunay(), Ok(()));
    }

    #[test]
    fn reports_broken_links() {
        let mut tri = square();
        tri.halfedges[5] = EMPTY;
        assert_eq!(
            tri.validate(),
            Err(ValidationError::Asymmetric { edge: 0, twin: 5, back: EMPTY })
        );

        let mut tri = square();
        tri.halfedges.pop();
        assert_eq!(
            tri.validate(),
            Err(ValidationError::LengthMismatch { triangles: 6, halfedges: 5 })
        );

        let mut tri = square();
        tri.triangles[4] = 9;
        assert_eq!(tri.validate(), Err(ValidationError::IndexOutOfRange { edge: 4, index: 9 }));
    }

    #[test]
    fn reports_backward_triangle() {
        let mut tri = square();
        tri.triangles.swap(1, 2);
        tri.halfedges = vec![EMPTY; 6];
        assert_eq!(tri.validate(), Err(ValidationError::Winding { triangle: 0 }));
    }

    #[test]
    fn reports_non_delaunay_edge() {
        // thin diamond split along its long diagonal
        let tri = Triangulation {
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(2.0, 1.0),
                Point::new(4.0, 0.0),
                Point::new(2.0, -1.0),
            ],
            triangles: vec![0, 1, 2, 0, 2, 3],
            halfedges: vec![EMPTY, EMPTY, 3, 2, EMPTY, EMPTY],
            hull: vec![0, 1, 2, 3],
        };
        assert_eq!(tri.validate(), Ok(()));
        assert_eq!(
            tri.validate_delaunay(),
            Err(ValidationError::NotDelaunay { triangle: 0, point: 3 })
        );
    }
}
