//! Selections resolved against a mesh.

use strata_select::{Component, Mask, MeshQueries, Selection};

/// The elements a write or read touches.
///
/// `whole` records whether the selection was literally
/// [`Selection::All`], which is the only scope allowed to change a field's
/// baseline unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    mask: Mask,
    whole: bool,
}

impl Target {
    /// Evaluate `selection` on `mesh`.
    pub fn resolve<M: MeshQueries + ?Sized>(
        selection: &Selection,
        mesh: &M,
        component: Component,
    ) -> Self {
        Self {
            mask: selection.evaluate(mesh, component),
            whole: selection.is_all(),
        }
    }

    /// Every one of `len` elements.
    pub fn all(len: usize) -> Self {
        Self {
            mask: Mask::all(len),
            whole: true,
        }
    }

    /// An explicit mask; never counts as a whole-component selection.
    pub fn partial(mask: Mask) -> Self {
        Self { mask, whole: false }
    }

    /// Selected elements.
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// True when resolved from [`Selection::All`].
    pub fn is_whole(&self) -> bool {
        self.whole
    }
}
