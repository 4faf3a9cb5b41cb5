use crate::error::Result;
use crate::topology::{ElementKind, Selection, TopologyStore};

use super::Mode;

/// Result of a neighbor query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Neighbors {
    /// The per-pore sets merged by the query mode; sorted, duplicate-free.
    Flat(Vec<usize>),
    /// One sorted, duplicate-free set per input pore, in input order.
    PerElement(Vec<Vec<usize>>),
}

impl Neighbors {
    /// Number of entries at the top level of the result.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(items) => items.len(),
            Self::PerElement(sets) => sets.len(),
        }
    }

    /// Returns `true` if the result has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The merged result, if the query was flattened.
    #[must_use]
    pub fn as_flat(&self) -> Option<&[usize]> {
        match self {
            Self::Flat(items) => Some(items),
            Self::PerElement(_) => None,
        }
    }

    /// The per-pore sets, if the query was not flattened.
    #[must_use]
    pub fn as_per_element(&self) -> Option<&[Vec<usize>]> {
        match self {
            Self::PerElement(sets) => Some(sets),
            Self::Flat(_) => None,
        }
    }
}

/// Finds the pores that share a throat with a set of pores.
///
/// When flattened (the default), the neighbor sets of the distinct selected
/// pores are merged according to the [`Mode`]. With `excl_self` (the default)
/// the selected pores themselves are removed from the merged result; without
/// it each selected pore counts as a member of its own neighbor set, unless
/// none of the selected pores has any neighbor, in which case the merged
/// result is empty.
///
/// When not flattened, one neighbor set is returned per input pore and the
/// mode is not applied.
pub struct FindNeighborPores<'a> {
    pores: Selection<'a>,
    mode: Mode,
    excl_self: bool,
    flatten: bool,
}

impl<'a> FindNeighborPores<'a> {
    /// Creates a new flattened union query that excludes the input pores.
    #[must_use]
    pub fn new(pores: impl Into<Selection<'a>>) -> Self {
        Self {
            pores: pores.into(),
            mode: Mode::default(),
            excl_self: true,
            flatten: true,
        }
    }

    /// Sets how per-pore neighbor sets are merged.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets whether the input pores are removed from the result.
    #[must_use]
    pub fn with_excl_self(mut self, excl_self: bool) -> Self {
        self.excl_self = excl_self;
        self
    }

    /// Sets whether per-pore sets are merged into one result.
    #[must_use]
    pub fn with_flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection holds an out-of-range pore or is a
    /// mask of the wrong length.
    pub fn execute(&self, store: &TopologyStore) -> Result<Neighbors> {
        if !self.flatten {
            let pores = self.pores.resolve(ElementKind::Pore, store.num_pores())?;
            tracing::debug!(
                selected = pores.len(),
                excl_self = self.excl_self,
                "find_neighbor_pores per pore"
            );
            let sets = pores
                .iter()
                .map(|&p| {
                    store
                        .neighbors_of(p)
                        .map(|set| own_neighbor_set(p, set, self.excl_self))
                })
                .collect::<std::result::Result<Vec<_>, _>>()?;
            return Ok(Neighbors::PerElement(sets));
        }

        let pores = self.pores.resolve_set(ElementKind::Pore, store.num_pores())?;
        tracing::debug!(
            selected = pores.len(),
            mode = %self.mode,
            excl_self = self.excl_self,
            "find_neighbor_pores"
        );
        let raw = pores
            .iter()
            .map(|&p| store.neighbors_of(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        if raw.iter().all(Vec::is_empty) {
            return Ok(Neighbors::Flat(Vec::new()));
        }
        let sets: Vec<Vec<usize>> = pores
            .iter()
            .zip(raw)
            .map(|(&p, set)| own_neighbor_set(p, set, self.excl_self))
            .collect();

        let mut merged = self.mode.combine(&sets);
        if self.excl_self {
            merged.retain(|q| pores.binary_search(q).is_err());
        }
        Ok(Neighbors::Flat(merged))
    }
}

/// Turns the raw neighbors of `pore` into its own set. Without `excl_self`
/// the pore is a member of its own set; with it the pore is never a member,
/// self-loops included.
fn own_neighbor_set(pore: usize, mut set: Vec<usize>, excl_self: bool) -> Vec<usize> {
    match set.binary_search(&pore) {
        Ok(pos) if excl_self => {
            set.remove(pos);
        }
        Err(pos) if !excl_self => set.insert(pos, pore),
        _ => {}
    }
    set
}
