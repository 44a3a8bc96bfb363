//! Per-element storage arrays.

use std::fmt;

use strata_units::Unit;

use crate::error::{MetadataError, Result};

/// Storage kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Unit-bearing `f64` values.
    Numeric,
    /// Fixed-width text.
    Text,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => f.write_str("numeric"),
            ColumnKind::Text => f.write_str("text"),
        }
    }
}

/// Numeric values with one baseline unit. Unassigned entries are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericColumn {
    values: Vec<f64>,
    unit: Unit,
}

impl NumericColumn {
    /// A column of `len` NaN entries in `unit`.
    pub fn missing(len: usize, unit: Unit) -> Self {
        Self {
            values: vec![f64::NAN; len],
            unit,
        }
    }

    /// Baseline unit.
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// All values in the baseline unit.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn rebase(&mut self, unit: Unit) {
        self.unit = unit;
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }
}

/// Fixed-width UTF-8 text. Every entry occupies `width` bytes, padded with
/// NUL; the width grows to fit the longest value ever written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextColumn {
    len: usize,
    width: usize,
    bytes: Vec<u8>,
}

impl TextColumn {
    /// A column of `len` empty entries.
    pub fn empty(len: usize) -> Self {
        Self {
            len,
            width: 0,
            bytes: Vec::new(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the column has no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current entry width in bytes.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Entry `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<String> {
        if index >= self.len {
            return None;
        }
        let slot = &self.bytes[index * self.width..(index + 1) * self.width];
        let end = slot.iter().position(|&b| b == 0).unwrap_or(slot.len());
        Some(String::from_utf8_lossy(&slot[..end]).into_owned())
    }

    /// All entries.
    pub fn to_vec(&self) -> Vec<String> {
        (0..self.len).filter_map(|i| self.get(i)).collect()
    }

    /// Make room for values of `width` bytes. Returns true if the column
    /// was reallocated.
    pub fn reserve_width(&mut self, width: usize) -> bool {
        if width <= self.width {
            return false;
        }
        let mut bytes = vec![0u8; self.len * width];
        for i in 0..self.len {
            let old = &self.bytes[i * self.width..(i + 1) * self.width];
            bytes[i * width..i * width + self.width].copy_from_slice(old);
        }
        self.bytes = bytes;
        self.width = width;
        true
    }

    /// Store `value` at `index`, widening if needed. Out-of-range indices
    /// are ignored.
    pub fn set(&mut self, index: usize, value: &str) -> Result<()> {
        validate_text(value)?;
        if index >= self.len {
            return Ok(());
        }
        self.reserve_width(value.len());
        let slot = &mut self.bytes[index * self.width..(index + 1) * self.width];
        slot.fill(0);
        slot[..value.len()].copy_from_slice(value.as_bytes());
        Ok(())
    }
}

/// Reject text that cannot round-trip through a NUL-padded slot.
pub(crate) fn validate_text(value: &str) -> Result<()> {
    if value.contains('\0') {
        return Err(MetadataError::InvalidText(value.to_string()));
    }
    Ok(())
}

/// One stored field.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Numeric field.
    Numeric(NumericColumn),
    /// Text field.
    Text(TextColumn),
}

impl Column {
    /// Storage kind.
    pub fn kind(&self) -> ColumnKind {
        match self {
            Column::Numeric(_) => ColumnKind::Numeric,
            Column::Text(_) => ColumnKind::Text,
        }
    }
}
