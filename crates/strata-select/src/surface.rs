//! Reference geometries that report an unsigned distance to their surface.

use std::fmt;

use strata_math::{Plane, Point3, Vector};

/// Something with a surface a point can be measured against.
pub trait SurfaceDistance: fmt::Debug + Send + Sync {
    /// Unsigned distance from `point` to the surface.
    fn distance(&self, point: &Point3) -> f64;
}

impl SurfaceDistance for Plane {
    fn distance(&self, point: &Point3) -> f64 {
        self.signed_distance(&Vector::from(*point)).abs()
    }
}

/// An indexed triangle soup.
#[derive(Debug, Clone, Default)]
pub struct TriangleSurface {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex indices per triangle.
    pub triangles: Vec<[usize; 3]>,
}

impl TriangleSurface {
    /// Create a surface from vertices and triangles.
    pub fn new(vertices: Vec<Point3>, triangles: Vec<[usize; 3]>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }
}

impl SurfaceDistance for TriangleSurface {
    /// Distance to the nearest triangle; infinite for an empty surface.
    /// Triangles referencing missing vertices are skipped.
    fn distance(&self, point: &Point3) -> f64 {
        self.triangles
            .iter()
            .filter_map(|&[i, j, k]| {
                let a = *self.vertices.get(i)?;
                let b = *self.vertices.get(j)?;
                let c = *self.vertices.get(k)?;
                Some((closest_point_on_triangle(*point, a, b, c) - *point).norm())
            })
            .fold(f64::INFINITY, f64::min)
    }
}

/// Closest point on triangle `abc` to `p` (Voronoi-region walk).
fn closest_point_on_triangle(p: Point3, a: Point3, b: Point3, c: Point3) -> Point3 {
    let ab = b - a;
    let ac = c - a;
    let ap = p - a;

    let d1 = ab.dot(&ap);
    let d2 = ac.dot(&ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return a;
    }

    let bp = p - b;
    let d3 = ab.dot(&bp);
    let d4 = ac.dot(&bp);
    if d3 >= 0.0 && d4 <= d3 {
        return b;
    }

    let vc = d1.mul_add(d4, -(d3 * d2));
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        return a + ab * (d1 / (d1 - d3));
    }

    let cp = p - c;
    let d5 = ab.dot(&cp);
    let d6 = ac.dot(&cp);
    if d6 >= 0.0 && d5 <= d6 {
        return c;
    }

    let vb = d5.mul_add(d2, -(d1 * d6));
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        return a + ac * (d2 / (d2 - d6));
    }

    let va = d3.mul_add(d6, -(d5 * d4));
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return b + (c - b) * w;
    }

    // interior
    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    a + ab * v + ac * w
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_triangle() -> TriangleSurface {
        TriangleSurface::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        )
    }

    #[test]
    fn test_plane_distance_is_unsigned() {
        let plane = Plane::xy();
        assert_relative_eq!(plane.distance(&Point3::new(3.0, 4.0, -2.5)), 2.5);
        assert_relative_eq!(plane.distance(&Point3::new(3.0, 4.0, 2.5)), 2.5);
    }

    #[test]
    fn test_triangle_interior() {
        let tri = unit_triangle();
        assert_relative_eq!(tri.distance(&Point3::new(0.25, 0.25, 2.0)), 2.0);
    }

    #[test]
    fn test_triangle_vertex_and_edge_regions() {
        let tri = unit_triangle();
        // beyond vertex b
        assert_relative_eq!(tri.distance(&Point3::new(2.0, 0.0, 0.0)), 1.0);
        // below edge ab
        assert_relative_eq!(tri.distance(&Point3::new(0.5, -3.0, 4.0)), 5.0);
        // beyond hypotenuse bc
        let d = tri.distance(&Point3::new(1.0, 1.0, 0.0));
        assert_relative_eq!(d, 0.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_empty_surface_is_infinitely_far() {
        let empty = TriangleSurface::default();
        assert!(empty.distance(&Point3::origin()).is_infinite());
    }
}
