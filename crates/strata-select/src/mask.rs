//! Boolean element masks.

/// One flag per element of a mesh component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Mask {
    bits: Vec<bool>,
}

impl Mask {
    /// A mask of `len` unselected elements.
    pub fn none(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// A mask of `len` selected elements.
    pub fn all(len: usize) -> Self {
        Self {
            bits: vec![true; len],
        }
    }

    /// Build from a predicate over element indices.
    pub fn from_fn(len: usize, f: impl FnMut(usize) -> bool) -> Self {
        Self {
            bits: (0..len).map(f).collect(),
        }
    }

    /// Number of elements the mask covers.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True if the mask covers no elements.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Whether element `index` is selected; out-of-range is unselected.
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).copied().unwrap_or(false)
    }

    /// Select or deselect element `index`. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, selected: bool) {
        if let Some(bit) = self.bits.get_mut(index) {
            *bit = selected;
        }
    }

    /// Number of selected elements.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Selected indices in ascending order.
    pub fn indices(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Iterate selected indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
    }

    /// Raw flags.
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Element-wise OR.
    #[must_use]
    pub fn union(mut self, other: &Mask) -> Self {
        for (a, &b) in self.bits.iter_mut().zip(&other.bits) {
            *a |= b;
        }
        self
    }

    /// Element-wise AND. Elements `other` does not cover are deselected.
    #[must_use]
    pub fn intersection(mut self, other: &Mask) -> Self {
        for (i, a) in self.bits.iter_mut().enumerate() {
            *a &= other.contains(i);
        }
        self
    }

    /// Element-wise NOT.
    #[must_use]
    pub fn complement(mut self) -> Self {
        for a in &mut self.bits {
            *a = !*a;
        }
        self
    }
}

impl From<Vec<bool>> for Mask {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_and_count() {
        let mask = Mask::from(vec![true, false, true, true]);
        assert_eq!(mask.indices(), vec![0, 2, 3]);
        assert_eq!(mask.count(), 3);
        assert_eq!(mask.len(), 4);
    }

    #[test]
    fn test_set_ignores_out_of_range() {
        let mut mask = Mask::none(2);
        mask.set(1, true);
        mask.set(7, true);
        assert_eq!(mask.indices(), vec![1]);
        assert!(!mask.contains(7));
    }

    #[test]
    fn test_boolean_ops() {
        let a = Mask::from(vec![true, true, false, false]);
        let b = Mask::from(vec![true, false, true, false]);
        assert_eq!(a.clone().union(&b).indices(), vec![0, 1, 2]);
        assert_eq!(a.clone().intersection(&b).indices(), vec![0]);
        assert_eq!(a.complement().indices(), vec![2, 3]);
    }
}
