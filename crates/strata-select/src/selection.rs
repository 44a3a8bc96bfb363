//! The selection predicate tree and its evaluation.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{BitAnd, BitOr, Not, Sub};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Result, SelectError};
use crate::{Component, Mask, MeshQueries, SurfaceDistance};

/// Default slack added to both ends of a coordinate interval.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// East.
    X,
    /// North.
    Y,
    /// Up.
    Z,
}

impl Axis {
    /// Component index (0, 1 or 2).
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = SelectError;

    fn try_from(index: usize) -> Result<Self> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(SelectError::InvalidAxis(index)),
        }
    }
}

/// One end of a coordinate interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CoordinateBound {
    /// A fixed coordinate.
    Value(f64),
    /// The mesh bounding-box minimum, resolved at evaluation.
    BoundsMin,
    /// The mesh bounding-box maximum, resolved at evaluation.
    BoundsMax,
    /// Open: `-inf` as a low bound, `+inf` as a high bound.
    Unbounded,
}

impl CoordinateBound {
    fn resolve(self, (min, max): (f64, f64), open: f64) -> f64 {
        match self {
            CoordinateBound::Value(v) => v,
            CoordinateBound::BoundsMin => min,
            CoordinateBound::BoundsMax => max,
            CoordinateBound::Unbounded => open,
        }
    }

    fn uses_bounds(self) -> bool {
        matches!(self, CoordinateBound::BoundsMin | CoordinateBound::BoundsMax)
    }
}

impl From<f64> for CoordinateBound {
    fn from(v: f64) -> Self {
        CoordinateBound::Value(v)
    }
}

impl From<Option<f64>> for CoordinateBound {
    fn from(v: Option<f64>) -> Self {
        v.map_or(CoordinateBound::Unbounded, CoordinateBound::Value)
    }
}

/// A boolean predicate over mesh elements.
///
/// Selections are plain values; they hold no reference to a mesh and can
/// be evaluated against any number of meshes.
#[derive(Debug, Clone)]
pub enum Selection {
    /// Every element.
    All,
    /// No element.
    Nothing,
    /// Elements with these indices. Indices past the element count are
    /// ignored.
    Ids(BTreeSet<usize>),
    /// Elements whose position along `axis` lies in
    /// `[low - tolerance, high + tolerance]`.
    CoordinateInterval {
        /// Axis to test.
        axis: Axis,
        /// Lower end.
        low: CoordinateBound,
        /// Upper end.
        high: CoordinateBound,
        /// Slack on both ends.
        tolerance: f64,
    },
    /// Elements within `max_distance` of a reference surface.
    DistanceToSurface {
        /// Reference geometry.
        surface: Arc<dyn SurfaceDistance>,
        /// Inclusive distance threshold.
        max_distance: f64,
    },
    /// Elements labelled `label` in the `group:<field>` text field.
    Group {
        /// Group field name.
        field: String,
        /// Label to match.
        label: String,
    },
    /// Elements in either selection.
    Union(Box<Selection>, Box<Selection>),
    /// Elements in both selections.
    Intersection(Box<Selection>, Box<Selection>),
    /// Elements not in the selection.
    Complement(Box<Selection>),
}

impl Selection {
    /// Select explicit element indices.
    #[must_use]
    pub fn ids(indices: impl IntoIterator<Item = usize>) -> Self {
        Self::Ids(indices.into_iter().collect())
    }

    /// Select along `axis` between `low` and `high` with the default
    /// tolerance.
    ///
    /// `None` leaves that end open.
    pub fn coordinate_interval(
        axis: Axis,
        low: impl Into<CoordinateBound>,
        high: impl Into<CoordinateBound>,
    ) -> Result<Self> {
        Self::coordinate_interval_with_tolerance(axis, low, high, DEFAULT_TOLERANCE)
    }

    /// Select along `axis` between `low` and `high`.
    pub fn coordinate_interval_with_tolerance(
        axis: Axis,
        low: impl Into<CoordinateBound>,
        high: impl Into<CoordinateBound>,
        tolerance: f64,
    ) -> Result<Self> {
        let (low, high) = (low.into(), high.into());
        let invalid = || SelectError::InvalidInterval {
            low: low.resolve((f64::NAN, f64::NAN), f64::NEG_INFINITY),
            high: high.resolve((f64::NAN, f64::NAN), f64::INFINITY),
            tolerance,
        };
        if !(tolerance >= 0.0) {
            return Err(invalid());
        }
        for bound in [low, high] {
            if let CoordinateBound::Value(v) = bound {
                if v.is_nan() {
                    return Err(invalid());
                }
            }
        }
        if let (CoordinateBound::Value(lo), CoordinateBound::Value(hi)) = (low, high) {
            if lo > hi {
                return Err(invalid());
            }
        }
        Ok(Self::CoordinateInterval {
            axis,
            low,
            high,
            tolerance,
        })
    }

    /// Select elements at a single coordinate (within the default tolerance).
    pub fn coordinate(axis: Axis, value: f64) -> Result<Self> {
        Self::coordinate_interval(axis, value, value)
    }

    /// Select elements within `max_distance` of `surface`.
    ///
    /// Cell queries transfer the per-point distance field to cells before
    /// thresholding.
    pub fn within_distance(
        surface: impl SurfaceDistance + 'static,
        max_distance: f64,
    ) -> Result<Self> {
        if !(max_distance >= 0.0) {
            return Err(SelectError::InvalidDistance(max_distance));
        }
        Ok(Self::DistanceToSurface {
            surface: Arc::new(surface),
            max_distance,
        })
    }

    /// Select elements tagged `label` in `group:<field>`.
    #[must_use]
    pub fn group(field: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Group {
            field: field.into(),
            label: label.into(),
        }
    }

    /// Union with another selection.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::Union(Box::new(self), Box::new(other))
    }

    /// Intersection with another selection.
    #[must_use]
    pub fn intersection(self, other: Self) -> Self {
        Self::Intersection(Box::new(self), Box::new(other))
    }

    /// Complement of this selection.
    #[must_use]
    pub fn complement(self) -> Self {
        Self::Complement(Box::new(self))
    }

    /// Elements in `self` but not in `other`.
    #[must_use]
    pub fn difference(self, other: Self) -> Self {
        self.intersection(other.complement())
    }

    /// True only for the literal [`Selection::All`].
    ///
    /// This is structural: `!Selection::Nothing` selects everything but is
    /// not `All`.
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Evaluate against `mesh` for one component.
    pub fn evaluate<M: MeshQueries + ?Sized>(&self, mesh: &M, component: Component) -> Mask {
        let mask = self.mask(mesh, component);
        trace!(
            %component,
            selected = mask.count(),
            total = mask.len(),
            "evaluated selection"
        );
        mask
    }

    fn mask<M: MeshQueries + ?Sized>(&self, mesh: &M, component: Component) -> Mask {
        let n = mesh.element_count(component);
        match self {
            Selection::All => Mask::all(n),
            Selection::Nothing => Mask::none(n),
            Selection::Ids(ids) => {
                let mut mask = Mask::none(n);
                for &i in ids.range(..n) {
                    mask.set(i, true);
                }
                mask
            }
            Selection::CoordinateInterval {
                axis,
                low,
                high,
                tolerance,
            } => {
                let index = axis.index();
                let range = if low.uses_bounds() || high.uses_bounds() {
                    mesh.bounding_box().range(index)
                } else {
                    (f64::NAN, f64::NAN)
                };
                let lo = low.resolve(range, f64::NEG_INFINITY) - tolerance;
                let hi = high.resolve(range, f64::INFINITY) + tolerance;
                let positions = mesh.positions(component);
                Mask::from_fn(n, |i| {
                    positions
                        .get(i)
                        .is_some_and(|p| lo <= p[index] && p[index] <= hi)
                })
            }
            Selection::DistanceToSurface {
                surface,
                max_distance,
            } => {
                let distances = mesh.unsigned_distance_to(surface.as_ref());
                let distances = match component {
                    Component::Points => distances,
                    Component::Cells => mesh.point_scalar_to_cell(&distances),
                };
                Mask::from_fn(n, |i| {
                    distances.get(i).is_some_and(|&d| d <= *max_distance)
                })
            }
            Selection::Group { field, label } => match mesh.group_labels(component, field) {
                Some(labels) => Mask::from_fn(n, |i| labels.get(i) == Some(label)),
                None => Mask::none(n),
            },
            Selection::Union(a, b) => a.mask(mesh, component).union(&b.mask(mesh, component)),
            Selection::Intersection(a, b) => a
                .mask(mesh, component)
                .intersection(&b.mask(mesh, component)),
            Selection::Complement(inner) => inner.mask(mesh, component).complement(),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("all"),
            Selection::Nothing => f.write_str("nothing"),
            Selection::Ids(ids) => write!(f, "ids({})", ids.len()),
            Selection::CoordinateInterval { axis, .. } => write!(f, "interval({axis:?})"),
            Selection::DistanceToSurface { max_distance, .. } => {
                write!(f, "within({max_distance})")
            }
            Selection::Group { field, label } => write!(f, "group({field}={label})"),
            Selection::Union(a, b) => write!(f, "({a} | {b})"),
            Selection::Intersection(a, b) => write!(f, "({a} & {b})"),
            Selection::Complement(inner) => write!(f, "!{inner}"),
        }
    }
}

impl BitOr for Selection {
    type Output = Selection;

    fn bitor(self, rhs: Selection) -> Selection {
        self.union(rhs)
    }
}

impl BitAnd for Selection {
    type Output = Selection;

    fn bitand(self, rhs: Selection) -> Selection {
        self.intersection(rhs)
    }
}

impl Not for Selection {
    type Output = Selection;

    fn not(self) -> Selection {
        self.complement()
    }
}

impl Sub for Selection {
    type Output = Selection;

    fn sub(self, rhs: Selection) -> Selection {
        self.difference(rhs)
    }
}
