//! The queries a mesh must answer for selections to evaluate against it.

use std::fmt;

use serde::{Deserialize, Serialize};
use strata_math::Point3;

use crate::{Aabb3, SurfaceDistance};

/// Which element family a selection or field addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    /// Cells (faces or volumes).
    Cells,
    /// Points (vertices).
    Points,
}

impl Component {
    /// Lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Component::Cells => "cells",
            Component::Points => "points",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Geometry and attribute queries consumed by [`Selection`](crate::Selection).
pub trait MeshQueries {
    /// Number of elements of `component`.
    fn element_count(&self, component: Component) -> usize;

    /// Point coordinates, one per point.
    fn point_coordinates(&self) -> &[Point3];

    /// Cell centroids, one per cell.
    fn cell_centroids(&self) -> Vec<Point3>;

    /// Bounding box of all points.
    fn bounding_box(&self) -> Aabb3 {
        Aabb3::from_points(self.point_coordinates())
    }

    /// Unsigned distance from every point to `surface`.
    fn unsigned_distance_to(&self, surface: &dyn SurfaceDistance) -> Vec<f64> {
        self.point_coordinates()
            .iter()
            .map(|p| surface.distance(p))
            .collect()
    }

    /// Transfer a per-point scalar field to cells.
    fn point_scalar_to_cell(&self, values: &[f64]) -> Vec<f64>;

    /// Transfer a per-cell scalar field to points.
    fn cell_scalar_to_point(&self, values: &[f64]) -> Vec<f64>;

    /// Categorical labels stored in `group:<field>`, or `None` if the
    /// field does not exist. Unassigned elements carry an empty label.
    fn group_labels(&self, component: Component, field: &str) -> Option<Vec<String>>;

    /// Representative position of each element: point coordinates for
    /// points, centroids for cells.
    fn positions(&self, component: Component) -> Vec<Point3> {
        match component {
            Component::Points => self.point_coordinates().to_vec(),
            Component::Cells => self.cell_centroids(),
        }
    }
}
