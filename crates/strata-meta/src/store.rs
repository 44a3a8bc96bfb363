//! The per-component field store.

use std::collections::BTreeMap;

use strata_select::{Component, MeshQueries, Selection};
use strata_units::{
    Magnitude, Property, PropertyInput, PropertyKind, Quantity, Unit, UnitError, UnitSystem,
};
use tracing::debug;

use crate::column::validate_text;
use crate::error::{MetadataError, Result};
use crate::{
    Column, ColumnKind, FieldInput, FieldKey, FieldValues, NumericColumn, Role, Target,
    TextColumn, TextInput,
};

/// Typed fields over the elements of one mesh component.
///
/// The store does not hold a reference to its mesh; every call that
/// evaluates a selection takes the mesh and checks that its element count
/// still matches. A mesh whose element count changes needs a new store.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataStore {
    component: Component,
    len: usize,
    columns: BTreeMap<FieldKey, Column>,
}

impl MetadataStore {
    /// An empty store for `len` elements of `component`.
    pub fn new(component: Component, len: usize) -> Self {
        Self {
            component,
            len,
            columns: BTreeMap::new(),
        }
    }

    /// Component the store is bound to.
    pub fn component(&self) -> Component {
        self.component
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for a store over zero elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Keys of every stored field, in order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldKey> {
        self.columns.keys()
    }

    /// Keys with the given role.
    pub fn fields_with_role(&self, role: Role) -> impl Iterator<Item = &FieldKey> {
        self.columns.keys().filter(move |key| key.role() == role)
    }

    /// True if `key` has been written.
    pub fn contains(&self, key: &FieldKey) -> bool {
        self.columns.contains_key(key)
    }

    /// Raw column for `key`.
    pub fn column(&self, key: &FieldKey) -> Option<&Column> {
        self.columns.get(key)
    }

    /// Drop a field, returning its data.
    pub fn remove(&mut self, key: &FieldKey) -> Option<Column> {
        self.columns.remove(key)
    }

    /// Baseline unit of a numeric field.
    pub fn baseline_unit(&self, key: &FieldKey) -> Option<&Unit> {
        match self.columns.get(key)? {
            Column::Numeric(col) => Some(col.unit()),
            Column::Text(_) => None,
        }
    }

    /// Every label of the text field `group:<name>`.
    pub fn group_labels(&self, name: &str) -> Option<Vec<String>> {
        match self.columns.get(&FieldKey::group(name))? {
            Column::Text(col) => Some(col.to_vec()),
            Column::Numeric(_) => None,
        }
    }

    /// Read the selected entries of `key`.
    ///
    /// Numeric values come back in `unit` when given, else in the field's
    /// baseline unit. A field that was never written reads as NaN (or
    /// empty text for groups).
    pub fn read<M: MeshQueries + ?Sized>(
        &self,
        mesh: &M,
        key: &FieldKey,
        selection: &Selection,
        unit: Option<&Unit>,
    ) -> Result<FieldValues> {
        self.check_mesh(mesh)?;
        let target = Target::resolve(selection, mesh, self.component);
        self.read_target(key, &target, unit)
    }

    /// Read with an already-resolved target.
    pub fn read_target(
        &self,
        key: &FieldKey,
        target: &Target,
        unit: Option<&Unit>,
    ) -> Result<FieldValues> {
        self.check_target(target)?;
        let indices = target.mask().indices();
        match self.columns.get(key) {
            Some(Column::Numeric(col)) => {
                let factor = match unit {
                    Some(unit) => col.unit().conversion_factor(unit)?,
                    None => 1.0,
                };
                let values = indices.iter().map(|&i| col.values()[i] * factor).collect();
                let unit = unit.unwrap_or(col.unit()).clone();
                Ok(FieldValues::Numeric(Quantity::new(
                    Magnitude::Array(values),
                    unit,
                )))
            }
            Some(Column::Text(col)) => Ok(FieldValues::Text(
                indices
                    .iter()
                    .map(|&i| col.get(i).unwrap_or_default())
                    .collect(),
            )),
            None => {
                debug!(field = %key, "read of unwritten field returns missing values");
                Ok(match key.role().kind() {
                    ColumnKind::Numeric => FieldValues::Numeric(Quantity::new(
                        vec![f64::NAN; indices.len()],
                        unit.cloned().unwrap_or_else(Unit::dimensionless),
                    )),
                    ColumnKind::Text => FieldValues::Text(vec![String::new(); indices.len()]),
                })
            }
        }
    }

    /// Write `value` into the selected entries of `key`.
    ///
    /// Bare numbers take the field's baseline unit, or for a new field the
    /// unit `system` assigns the property's dimension. The first write fixes
    /// the baseline unit; a write in another unit must use
    /// [`Selection::All`]. Writing `None` clears the selected entries.
    pub fn write<M: MeshQueries + ?Sized>(
        &mut self,
        mesh: &M,
        key: &FieldKey,
        selection: &Selection,
        value: impl Into<FieldInput>,
        system: &UnitSystem,
    ) -> Result<()> {
        self.check_mesh(mesh)?;
        let target = Target::resolve(selection, mesh, self.component);
        self.write_target(key, &target, value, system)
    }

    /// Write with an already-resolved target.
    pub fn write_target(
        &mut self,
        key: &FieldKey,
        target: &Target,
        value: impl Into<FieldInput>,
        system: &UnitSystem,
    ) -> Result<()> {
        self.check_target(target)?;
        let value = value.into();
        let expected = self
            .columns
            .get(key)
            .map_or_else(|| key.role().kind(), Column::kind);
        if value.kind() != expected {
            return Err(MetadataError::KindMismatch {
                field: key.to_string(),
                expected,
                found: value.kind(),
            });
        }
        match value {
            FieldInput::Numeric(input) => self.write_numeric(key, target, input, system),
            FieldInput::Text(input) => self.write_text(key, target, input),
        }
    }

    fn write_numeric(
        &mut self,
        key: &FieldKey,
        target: &Target,
        input: PropertyInput,
        system: &UnitSystem,
    ) -> Result<()> {
        let kind = match key.role() {
            Role::Property => PropertyKind::lookup(key.name()),
            _ => None,
        };
        let existing = match self.columns.get(key) {
            Some(Column::Numeric(col)) => Some(col.unit().clone()),
            _ => None,
        };

        let quantity = match input {
            PropertyInput::Missing => {
                self.clear(key, target);
                return Ok(());
            }
            PropertyInput::Quantity(quantity) => quantity,
            PropertyInput::Bare(magnitude) => {
                let unit = match (&existing, kind) {
                    (Some(unit), _) => unit.clone(),
                    (None, Some(kind)) => system.unit_for(&kind.dimension),
                    (None, None) => Unit::dimensionless(),
                };
                Quantity::new(magnitude, unit)
            }
        };
        if let Some(kind) = kind {
            Property::new(kind, quantity.clone(), system)?;
        }

        let selected = target.mask().indices();
        let values = broadcast(key, quantity.magnitude.values(), selected.len())?;

        if let Some(baseline) = &existing {
            if quantity.dimension() != baseline.dimension() {
                return Err(UnitError::DimensionMismatch {
                    expected: baseline.dimension(),
                    found: quantity.dimension(),
                }
                .into());
            }
            if quantity.unit != *baseline && !target.is_whole() {
                return Err(MetadataError::UnitRebase {
                    field: key.to_string(),
                    baseline: baseline.symbol().to_string(),
                    unit: quantity.unit.symbol().to_string(),
                });
            }
        }

        let len = self.len;
        let column = self.columns.entry(key.clone()).or_insert_with(|| {
            debug!(field = %key, unit = %quantity.unit, len, "allocated numeric field");
            Column::Numeric(NumericColumn::missing(len, quantity.unit.clone()))
        });
        let Column::Numeric(column) = column else {
            return Err(MetadataError::KindMismatch {
                field: key.to_string(),
                expected: ColumnKind::Text,
                found: ColumnKind::Numeric,
            });
        };
        if *column.unit() != quantity.unit {
            debug!(
                field = %key,
                from = %column.unit(),
                to = %quantity.unit,
                "rebased field unit"
            );
            // whole-component write: every entry is overwritten below
            column.rebase(quantity.unit.clone());
        }
        let slots = column.values_mut();
        for (&i, value) in selected.iter().zip(values) {
            slots[i] = value;
        }
        Ok(())
    }

    fn clear(&mut self, key: &FieldKey, target: &Target) {
        if let Some(Column::Numeric(column)) = self.columns.get_mut(key) {
            let slots = column.values_mut();
            for i in target.mask().iter() {
                slots[i] = f64::NAN;
            }
        }
    }

    fn write_text(&mut self, key: &FieldKey, target: &Target, input: TextInput) -> Result<()> {
        let selected = target.mask().indices();
        let labels: Vec<String> = match input {
            TextInput::One(label) => vec![label; selected.len()],
            TextInput::Many(labels) => {
                if labels.len() != selected.len() {
                    return Err(MetadataError::LengthMismatch {
                        field: key.to_string(),
                        expected: selected.len(),
                        found: labels.len(),
                    });
                }
                labels
            }
        };
        for label in &labels {
            validate_text(label)?;
        }

        let len = self.len;
        let column = self.columns.entry(key.clone()).or_insert_with(|| {
            debug!(field = %key, len, "allocated text field");
            Column::Text(TextColumn::empty(len))
        });
        let Column::Text(column) = column else {
            return Err(MetadataError::KindMismatch {
                field: key.to_string(),
                expected: ColumnKind::Numeric,
                found: ColumnKind::Text,
            });
        };
        let widest = labels.iter().map(String::len).max().unwrap_or(0);
        let old_width = column.width();
        if column.reserve_width(widest) {
            debug!(field = %key, from = old_width, to = widest, "widened text field");
        }
        for (&i, label) in selected.iter().zip(&labels) {
            column.set(i, label)?;
        }
        Ok(())
    }

    fn check_mesh<M: MeshQueries + ?Sized>(&self, mesh: &M) -> Result<()> {
        let found = mesh.element_count(self.component);
        if found != self.len {
            return Err(MetadataError::ElementCountMismatch {
                component: self.component,
                expected: self.len,
                found,
            });
        }
        Ok(())
    }

    fn check_target(&self, target: &Target) -> Result<()> {
        let found = target.mask().len();
        if found != self.len {
            return Err(MetadataError::ElementCountMismatch {
                component: self.component,
                expected: self.len,
                found,
            });
        }
        Ok(())
    }
}

/// Expand a scalar to `count` copies, or check an array has `count` values.
fn broadcast(key: &FieldKey, values: &[f64], count: usize) -> Result<Vec<f64>> {
    match values {
        [single] => Ok(vec![*single; count]),
        _ if values.len() == count => Ok(values.to_vec()),
        _ => Err(MetadataError::LengthMismatch {
            field: key.to_string(),
            expected: count,
            found: values.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use strata_math::Point3;
    use strata_select::Axis;
    use strata_units::units;

    /// Four points on the x axis, one "cell" per point.
    struct Line4 {
        points: Vec<Point3>,
    }

    impl Line4 {
        fn new() -> Self {
            Self {
                points: (0..4).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect(),
            }
        }
    }

    impl MeshQueries for Line4 {
        fn element_count(&self, _component: Component) -> usize {
            self.points.len()
        }

        fn point_coordinates(&self) -> &[Point3] {
            &self.points
        }

        fn cell_centroids(&self) -> Vec<Point3> {
            self.points.clone()
        }

        fn point_scalar_to_cell(&self, values: &[f64]) -> Vec<f64> {
            values.to_vec()
        }

        fn cell_scalar_to_point(&self, values: &[f64]) -> Vec<f64> {
            values.to_vec()
        }

        fn group_labels(&self, _component: Component, _field: &str) -> Option<Vec<String>> {
            None
        }
    }

    fn setup() -> (Line4, MetadataStore, UnitSystem) {
        let mesh = Line4::new();
        let store = MetadataStore::new(Component::Cells, 4);
        (mesh, store, UnitSystem::si())
    }

    fn numbers(values: &FieldValues) -> Vec<f64> {
        values.as_numbers().unwrap().to_vec()
    }

    #[test]
    fn test_density_round_trip() {
        let (mesh, mut store, si) = setup();
        let density = FieldKey::property("density");
        store
            .write(&mesh, &density, &Selection::All, 2700.0, &si)
            .unwrap();

        let read = store.read(&mesh, &density, &Selection::All, None).unwrap();
        assert_eq!(numbers(&read), vec![2700.0; 4]);
        assert_eq!(read.as_quantity().unwrap().unit, units::KILOGRAM_PER_CUBIC_METER);
        assert_eq!(store.baseline_unit(&density), Some(&units::KILOGRAM_PER_CUBIC_METER));
    }

    #[test]
    fn test_partial_write_in_other_unit_is_rejected() {
        let (mesh, mut store, si) = setup();
        let density = FieldKey::property("density");
        store
            .write(&mesh, &density, &Selection::All, 2700.0, &si)
            .unwrap();

        let west = Selection::coordinate_interval(Axis::try_from(0usize).unwrap(), None::<f64>, 0.0)
            .unwrap();
        let err = store
            .write(
                &mesh,
                &density,
                &west,
                (1.2, units::GRAM_PER_CUBIC_CENTIMETER),
                &si,
            )
            .unwrap_err();
        assert!(matches!(err, MetadataError::UnitRebase { .. }));
        // nothing changed
        let read = store.read(&mesh, &density, &Selection::All, None).unwrap();
        assert_eq!(numbers(&read), vec![2700.0; 4]);
    }

    #[test]
    fn test_whole_write_rebases_unit() {
        let (mesh, mut store, si) = setup();
        let density = FieldKey::property("density");
        store
            .write(&mesh, &density, &Selection::All, 2700.0, &si)
            .unwrap();
        store
            .write(
                &mesh,
                &density,
                &Selection::All,
                (2.5, units::GRAM_PER_CUBIC_CENTIMETER),
                &si,
            )
            .unwrap();
        assert_eq!(
            store.baseline_unit(&density),
            Some(&units::GRAM_PER_CUBIC_CENTIMETER)
        );

        // bare values now take the new baseline
        store
            .write(&mesh, &density, &Selection::ids([3]), 2.0, &si)
            .unwrap();
        let read = store
            .read(
                &mesh,
                &density,
                &Selection::All,
                Some(&units::KILOGRAM_PER_CUBIC_METER),
            )
            .unwrap();
        let values = numbers(&read);
        assert_relative_eq!(values[0], 2500.0, max_relative = 1e-12);
        assert_relative_eq!(values[3], 2000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_partial_write_in_baseline_unit() {
        let (mesh, mut store, si) = setup();
        let key = FieldKey::field("temperature_gradient");
        store
            .write(&mesh, &key, &Selection::ids([1, 2]), vec![25.0, 30.0], &si)
            .unwrap();

        let read = store.read(&mesh, &key, &Selection::All, None).unwrap();
        let values = numbers(&read);
        assert!(values[0].is_nan());
        assert_eq!(&values[1..3], &[25.0, 30.0]);
        assert!(values[3].is_nan());
        assert!(read.as_quantity().unwrap().unit.is_dimensionless());
    }

    #[test]
    fn test_dimension_change_rejected_even_for_all() {
        let (mesh, mut store, si) = setup();
        let key = FieldKey::boundary_condition("pressure");
        store
            .write(&mesh, &key, &Selection::All, (1.0, units::MEGAPASCAL), &si)
            .unwrap();
        let err = store
            .write(&mesh, &key, &Selection::All, (1.0, units::METER), &si)
            .unwrap_err();
        assert!(matches!(
            err,
            MetadataError::Unit(UnitError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_property_validation() {
        let (mesh, mut store, si) = setup();
        let phi = FieldKey::property("friction_angle");
        let err = store
            .write(&mesh, &phi, &Selection::All, 95.0, &si)
            .unwrap_err();
        assert!(matches!(
            err,
            MetadataError::Unit(UnitError::RangeViolation { .. })
        ));
        assert!(!store.contains(&phi));

        store.write(&mesh, &phi, &Selection::All, 30.0, &si).unwrap();
        assert_eq!(store.baseline_unit(&phi), Some(&units::DEGREE));
    }

    #[test]
    fn test_length_mismatch() {
        let (mesh, mut store, si) = setup();
        let key = FieldKey::field("porosity");
        let err = store
            .write(&mesh, &key, &Selection::ids([0, 1]), vec![0.1, 0.2, 0.3], &si)
            .unwrap_err();
        assert_eq!(
            err,
            MetadataError::LengthMismatch {
                field: "field:porosity".to_string(),
                expected: 2,
                found: 3,
            }
        );
    }

    #[test]
    fn test_missing_field_reads_sentinels() {
        let (mesh, store, _) = setup();
        let read = store
            .read(&mesh, &FieldKey::field("absent"), &Selection::ids([0, 2]), None)
            .unwrap();
        assert_eq!(read.len(), 2);
        assert!(numbers(&read).iter().all(|v| v.is_nan()));

        let labels = store
            .read(&mesh, &FieldKey::group("absent"), &Selection::All, None)
            .unwrap();
        assert_eq!(labels.as_text().unwrap(), &vec![String::new(); 4][..]);
    }

    #[test]
    fn test_read_conversion_dimension_mismatch() {
        let (mesh, mut store, si) = setup();
        let key = FieldKey::property("cohesion");
        store
            .write(&mesh, &key, &Selection::All, (2.0, units::MEGAPASCAL), &si)
            .unwrap();
        let kpa = store
            .read(&mesh, &key, &Selection::ids([0]), Some(&units::KILOPASCAL))
            .unwrap();
        assert_relative_eq!(numbers(&kpa)[0], 2000.0, max_relative = 1e-12);
        let err = store
            .read(&mesh, &key, &Selection::All, Some(&units::SECOND))
            .unwrap_err();
        assert!(matches!(
            err,
            MetadataError::Unit(UnitError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_group_text_widens_in_place() {
        let (mesh, mut store, si) = setup();
        let key = FieldKey::group("lithology");
        store
            .write(&mesh, &key, &Selection::All, "sand", &si)
            .unwrap();
        store
            .write(&mesh, &key, &Selection::ids([1, 3]), vec!["mudstone", "conglomerate"], &si)
            .unwrap();

        let read = store.read(&mesh, &key, &Selection::All, None).unwrap();
        assert_eq!(
            read.as_text().unwrap(),
            &["sand", "mudstone", "sand", "conglomerate"].map(String::from)[..]
        );
        assert_eq!(store.group_labels("lithology").unwrap().len(), 4);
    }

    #[test]
    fn test_kind_mismatch() {
        let (mesh, mut store, si) = setup();
        let err = store
            .write(&mesh, &FieldKey::group("unit"), &Selection::All, 1.0, &si)
            .unwrap_err();
        assert!(matches!(err, MetadataError::KindMismatch { .. }));
        let err = store
            .write(&mesh, &FieldKey::field("unit"), &Selection::All, "shale", &si)
            .unwrap_err();
        assert!(matches!(err, MetadataError::KindMismatch { .. }));
    }

    #[test]
    fn test_clear_with_none() {
        let (mesh, mut store, si) = setup();
        let key = FieldKey::field("saturation");
        store.write(&mesh, &key, &Selection::All, 0.8, &si).unwrap();
        store
            .write(&mesh, &key, &Selection::ids([0]), None::<f64>, &si)
            .unwrap();
        let values = numbers(&store.read(&mesh, &key, &Selection::All, None).unwrap());
        assert!(values[0].is_nan());
        assert_eq!(values[1], 0.8);
    }

    #[test]
    fn test_element_count_checked() {
        let mesh = Line4::new();
        let mut store = MetadataStore::new(Component::Points, 5);
        let err = store
            .write(&mesh, &FieldKey::field("x"), &Selection::All, 1.0, &UnitSystem::si())
            .unwrap_err();
        assert_eq!(
            err,
            MetadataError::ElementCountMismatch {
                component: Component::Points,
                expected: 5,
                found: 4,
            }
        );
    }

    #[test]
    fn test_fields_and_remove() {
        let (mesh, mut store, si) = setup();
        store
            .write(&mesh, &FieldKey::property("density"), &Selection::All, 2000.0, &si)
            .unwrap();
        store
            .write(&mesh, &FieldKey::group("unit"), &Selection::All, "a", &si)
            .unwrap();
        let keys: Vec<String> = store.fields().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["property:density", "group:unit"]);
        assert_eq!(store.fields_with_role(Role::Group).count(), 1);

        assert!(store.remove(&FieldKey::group("unit")).is_some());
        assert!(store.group_labels("unit").is_none());
    }
}
