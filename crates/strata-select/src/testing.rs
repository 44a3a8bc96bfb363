//! A small quad strip used by the selection tests.

use std::collections::HashMap;

use strata_math::Point3;

use crate::{Component, MeshQueries};

/// Three unit quads along +x:
///
/// ```text
/// 4---5---6---7
/// | 0 | 1 | 2 |
/// 0---1---2---3
/// ```
pub struct QuadStrip {
    pub points: Vec<Point3>,
    pub cells: Vec<[usize; 4]>,
    pub groups: HashMap<(Component, String), Vec<String>>,
}

impl QuadStrip {
    pub fn new() -> Self {
        let mut points = Vec::new();
        for y in [0.0, 1.0] {
            for x in 0..4 {
                points.push(Point3::new(f64::from(x), y, 0.0));
            }
        }
        let cells = (0..3).map(|c| [c, c + 1, c + 5, c + 4]).collect();
        Self {
            points,
            cells,
            groups: HashMap::new(),
        }
    }

    pub fn with_group(mut self, component: Component, field: &str, labels: &[&str]) -> Self {
        self.groups.insert(
            (component, field.to_string()),
            labels.iter().map(|s| s.to_string()).collect(),
        );
        self
    }
}

impl MeshQueries for QuadStrip {
    fn element_count(&self, component: Component) -> usize {
        match component {
            Component::Cells => self.cells.len(),
            Component::Points => self.points.len(),
        }
    }

    fn point_coordinates(&self) -> &[Point3] {
        &self.points
    }

    fn cell_centroids(&self) -> Vec<Point3> {
        self.cells
            .iter()
            .map(|cell| {
                let sum = cell
                    .iter()
                    .fold(Point3::origin().coords, |acc, &i| acc + self.points[i].coords);
                Point3::from(sum / cell.len() as f64)
            })
            .collect()
    }

    fn point_scalar_to_cell(&self, values: &[f64]) -> Vec<f64> {
        self.cells
            .iter()
            .map(|cell| cell.iter().map(|&i| values[i]).sum::<f64>() / cell.len() as f64)
            .collect()
    }

    fn cell_scalar_to_point(&self, values: &[f64]) -> Vec<f64> {
        let mut sums = vec![0.0; self.points.len()];
        let mut counts = vec![0usize; self.points.len()];
        for (cell, &value) in self.cells.iter().zip(values) {
            for &i in cell {
                sums[i] += value;
                counts[i] += 1;
            }
        }
        sums.iter()
            .zip(&counts)
            .map(|(&s, &n)| if n == 0 { f64::NAN } else { s / n as f64 })
            .collect()
    }

    fn group_labels(&self, component: Component, field: &str) -> Option<Vec<String>> {
        self.groups.get(&(component, field.to_string())).cloned()
    }
}
