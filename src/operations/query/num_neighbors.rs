use crate::error::Result;
use crate::topology::{ElementKind, Selection, TopologyStore};

use super::{FindNeighborPores, Mode};

/// Result of [`NumNeighbors`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NeighborCount {
    /// Size of the merged neighbor set.
    Total(usize),
    /// Neighbor count of each input pore, in input order.
    PerElement(Vec<usize>),
}

impl NeighborCount {
    /// The merged count, if the query was flattened.
    #[must_use]
    pub fn total(&self) -> Option<usize> {
        match self {
            Self::Total(n) => Some(*n),
            Self::PerElement(_) => None,
        }
    }

    /// The per-pore counts, if the query was not flattened.
    #[must_use]
    pub fn per_element(&self) -> Option<&[usize]> {
        match self {
            Self::PerElement(counts) => Some(counts),
            Self::Total(_) => None,
        }
    }
}

/// Counts the neighbors of a set of pores.
///
/// Flattened (the default), the count is the size of the merged
/// [`FindNeighborPores`] result with the same mode, input pores excluded.
/// Not flattened, each input pore reports the size of its own neighbor set.
/// An empty selection counts zero when flattened and yields an empty per-pore
/// count otherwise.
pub struct NumNeighbors<'a> {
    pores: Selection<'a>,
    mode: Mode,
    flatten: bool,
}

impl<'a> NumNeighbors<'a> {
    /// Creates a new flattened union count.
    #[must_use]
    pub fn new(pores: impl Into<Selection<'a>>) -> Self {
        Self {
            pores: pores.into(),
            mode: Mode::default(),
            flatten: true,
        }
    }

    /// Sets how per-pore neighbor sets are merged before counting.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets whether one merged count or one count per pore is returned.
    #[must_use]
    pub fn with_flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    /// Executes the count.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection holds an out-of-range pore or is a
    /// mask of the wrong length.
    pub fn execute(&self, store: &TopologyStore) -> Result<NeighborCount> {
        let pores = self.pores.resolve(ElementKind::Pore, store.num_pores())?;
        if pores.is_empty() {
            return Ok(if self.flatten {
                NeighborCount::Total(0)
            } else {
                NeighborCount::PerElement(Vec::new())
            });
        }

        if self.flatten {
            let merged = FindNeighborPores::new(self.pores)
                .with_mode(self.mode)
                .execute(store)?;
            return Ok(NeighborCount::Total(merged.len()));
        }

        let neighbors = FindNeighborPores::new(self.pores)
            .with_flatten(false)
            .execute(store)?;
        let counts = neighbors
            .as_per_element()
            .map(|sets| sets.iter().map(Vec::len).collect())
            .unwrap_or_default();
        Ok(NeighborCount::PerElement(counts))
    }
}
