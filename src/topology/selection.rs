use crate::error::TopologyError;

use super::ElementKind;

/// A subset of pores or throats, as accepted by every query entry point.
///
/// Queries normalize a selection once, through [`Selection::resolve`] or
/// [`Selection::resolve_set`], before doing any set algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// An ordered list of element indices. May be empty, unsorted or contain
    /// duplicates.
    Indices(&'a [usize]),
    /// A boolean mask whose length must equal the element count.
    Mask(&'a [bool]),
    /// A single bare index.
    Single(usize),
}

impl Selection<'_> {
    /// Returns `true` if the selection contains no elements.
    ///
    /// This does not validate the selection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Indices(indices) => indices.is_empty(),
            Self::Mask(mask) => !mask.iter().any(|&b| b),
            Self::Single(_) => false,
        }
    }

    /// Validates the selection against `count` elements of `kind` and returns
    /// its indices.
    ///
    /// Index lists keep their order and duplicates; masks yield ascending
    /// indices.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::IndexOutOfRange`] for an index `>= count` and
    /// [`TopologyError::ShapeMismatch`] for a mask whose length is not `count`.
    pub fn resolve(&self, kind: ElementKind, count: usize) -> Result<Vec<usize>, TopologyError> {
        match *self {
            Self::Indices(indices) => {
                if let Some(&index) = indices.iter().find(|&&i| i >= count) {
                    return Err(TopologyError::IndexOutOfRange { kind, index, count });
                }
                Ok(indices.to_vec())
            }
            Self::Mask(mask) => {
                if mask.len() != count {
                    return Err(TopologyError::ShapeMismatch {
                        kind,
                        expected: count,
                        actual: mask.len(),
                    });
                }
                Ok(mask
                    .iter()
                    .enumerate()
                    .filter_map(|(i, &selected)| selected.then_some(i))
                    .collect())
            }
            Self::Single(index) => {
                if index >= count {
                    return Err(TopologyError::IndexOutOfRange { kind, index, count });
                }
                Ok(vec![index])
            }
        }
    }

    /// Like [`Selection::resolve`], but returns the indices sorted ascending
    /// with duplicates removed.
    ///
    /// # Errors
    ///
    /// Same as [`Selection::resolve`].
    pub fn resolve_set(
        &self,
        kind: ElementKind,
        count: usize,
    ) -> Result<Vec<usize>, TopologyError> {
        let mut indices = self.resolve(kind, count)?;
        indices.sort_unstable();
        indices.dedup();
        Ok(indices)
    }
}

impl From<usize> for Selection<'_> {
    fn from(index: usize) -> Self {
        Self::Single(index)
    }
}

impl<'a> From<&'a [usize]> for Selection<'a> {
    fn from(indices: &'a [usize]) -> Self {
        Self::Indices(indices)
    }
}

impl<'a> From<&'a Vec<usize>> for Selection<'a> {
    fn from(indices: &'a Vec<usize>) -> Self {
        Self::Indices(indices)
    }
}

impl<'a, const N: usize> From<&'a [usize; N]> for Selection<'a> {
    fn from(indices: &'a [usize; N]) -> Self {
        Self::Indices(indices)
    }
}

impl<'a> From<&'a [bool]> for Selection<'a> {
    fn from(mask: &'a [bool]) -> Self {
        Self::Mask(mask)
    }
}

impl<'a> From<&'a Vec<bool>> for Selection<'a> {
    fn from(mask: &'a Vec<bool>) -> Self {
        Self::Mask(mask)
    }
}

impl<'a, const N: usize> From<&'a [bool; N]> for Selection<'a> {
    fn from(mask: &'a [bool; N]) -> Self {
        Self::Mask(mask)
    }
}
