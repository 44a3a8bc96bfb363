//! A polygonal mesh carrying cell and point metadata.

use strata_math::{Plane, Point3, Vector};
use strata_meta::{FieldInput, FieldKey, FieldValues, MetadataStore, Target};
use strata_select::{Component, Mask, MeshQueries, Selection};
use strata_units::Unit;
use tracing::debug;

use crate::error::{Result, StrataError};
use crate::Settings;

/// Points, cells as point-index lists, and one metadata store per component.
///
/// Geometry is fixed at construction. Operations that move points return
/// a new mesh with the metadata copied across; none change element counts.
#[derive(Debug, Clone)]
pub struct Mesh {
    points: Vec<Point3>,
    cells: Vec<Vec<usize>>,
    settings: Settings,
    cell_data: MetadataStore,
    point_data: MetadataStore,
}

impl Mesh {
    /// Build a mesh with default settings.
    ///
    /// Every cell must reference at least one point, and only points that
    /// exist.
    pub fn new(points: Vec<Point3>, cells: Vec<Vec<usize>>) -> Result<Self> {
        for (cell, indices) in cells.iter().enumerate() {
            if indices.is_empty() {
                return Err(StrataError::InvalidCell {
                    cell,
                    reason: "no points".to_string(),
                });
            }
            if let Some(&bad) = indices.iter().find(|&&i| i >= points.len()) {
                return Err(StrataError::InvalidCell {
                    cell,
                    reason: format!("point {bad} out of range ({} points)", points.len()),
                });
            }
        }
        debug!(points = points.len(), cells = cells.len(), "built mesh");
        Ok(Self {
            cell_data: MetadataStore::new(Component::Cells, cells.len()),
            point_data: MetadataStore::new(Component::Points, points.len()),
            points,
            cells,
            settings: Settings::default(),
        })
    }

    /// Replace the settings.
    #[must_use]
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Point coordinates.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Cells as point indices.
    pub fn cells(&self) -> &[Vec<usize>] {
        &self.cells
    }

    /// Active settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Metadata store for one component.
    pub fn data(&self, component: Component) -> &MetadataStore {
        match component {
            Component::Cells => &self.cell_data,
            Component::Points => &self.point_data,
        }
    }

    /// Evaluate a selection on this mesh.
    pub fn select(&self, selection: &Selection, component: Component) -> Mask {
        selection.evaluate(self, component)
    }

    /// Read the selected entries of a field in its baseline unit.
    pub fn read(
        &self,
        component: Component,
        key: &FieldKey,
        selection: &Selection,
    ) -> Result<FieldValues> {
        Ok(self.data(component).read(self, key, selection, None)?)
    }

    /// Read the selected entries of a numeric field converted to `unit`.
    pub fn read_in(
        &self,
        component: Component,
        key: &FieldKey,
        selection: &Selection,
        unit: &Unit,
    ) -> Result<FieldValues> {
        Ok(self.data(component).read(self, key, selection, Some(unit))?)
    }

    /// Write a field over the selected elements.
    ///
    /// Bare numbers are interpreted in the settings' unit system.
    pub fn write(
        &mut self,
        component: Component,
        key: &FieldKey,
        selection: &Selection,
        value: impl Into<FieldInput>,
    ) -> Result<()> {
        let target = Target::resolve(selection, &*self, component);
        let store = match component {
            Component::Cells => &mut self.cell_data,
            Component::Points => &mut self.point_data,
        };
        store.write_target(key, &target, value, self.settings.units())?;
        Ok(())
    }

    /// A copy moved along `direction`.
    ///
    /// With `distance` the offset has that length; without it the
    /// direction vector is the offset.
    pub fn translated(&self, direction: impl Into<Vector>, distance: Option<f64>) -> Self {
        let offset = direction.into().scale(distance);
        self.map_points(|p| p + offset.as_vec3())
    }

    /// A copy with every point projected onto `plane`.
    pub fn flattened(&self, plane: &Plane) -> Self {
        self.map_points(|p| plane.project_point(&Vector::from(*p)).to_point())
    }

    fn map_points(&self, f: impl Fn(&Point3) -> Point3) -> Self {
        Self {
            points: self.points.iter().map(f).collect(),
            ..self.clone()
        }
    }
}

impl MeshQueries for Mesh {
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
                    .fold(Vector::zeros(), |acc, &i| acc + Vector::from(self.points[i]));
                (sum / cell.len() as f64).to_point()
            })
            .collect()
    }

    /// Mean of each cell's point values, every point weighted equally.
    fn point_scalar_to_cell(&self, values: &[f64]) -> Vec<f64> {
        self.cells
            .iter()
            .map(|cell| {
                let sum: f64 = cell
                    .iter()
                    .map(|&i| values.get(i).copied().unwrap_or(f64::NAN))
                    .sum();
                sum / cell.len() as f64
            })
            .collect()
    }

    /// Mean over the cells using each point; NaN for unused points.
    fn cell_scalar_to_point(&self, values: &[f64]) -> Vec<f64> {
        let mut sums = vec![0.0; self.points.len()];
        let mut counts = vec![0usize; self.points.len()];
        for (cell, &value) in self.cells.iter().zip(values) {
            for &i in cell {
                sums[i] += value;
                counts[i] += 1;
            }
        }
        sums.into_iter()
            .zip(counts)
            .map(|(sum, n)| if n == 0 { f64::NAN } else { sum / n as f64 })
            .collect()
    }

    fn group_labels(&self, component: Component, field: &str) -> Option<Vec<String>> {
        self.data(component).group_labels(field)
    }
}
