use crate::error::Result;
use crate::topology::{ElementKind, Selection, TopologyStore};

use super::{Mode, Neighbors};

/// Finds the throats touching a set of pores.
///
/// When flattened (the default), the incident-throat sets of the distinct
/// selected pores are merged according to the [`Mode`]. When not flattened,
/// one set is returned per input pore.
pub struct FindNeighborThroats<'a> {
    pores: Selection<'a>,
    mode: Mode,
    flatten: bool,
}

impl<'a> FindNeighborThroats<'a> {
    /// Creates a new flattened union query.
    #[must_use]
    pub fn new(pores: impl Into<Selection<'a>>) -> Self {
        Self {
            pores: pores.into(),
            mode: Mode::default(),
            flatten: true,
        }
    }

    /// Sets how per-pore throat sets are merged.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
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
        let pores = if self.flatten {
            self.pores.resolve_set(ElementKind::Pore, store.num_pores())?
        } else {
            self.pores.resolve(ElementKind::Pore, store.num_pores())?
        };
        tracing::debug!(
            selected = pores.len(),
            mode = %self.mode,
            flatten = self.flatten,
            "find_neighbor_throats"
        );

        let sets = pores
            .iter()
            .map(|&p| store.incident_throats(p).map(<[usize]>::to_vec))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        if self.flatten {
            Ok(Neighbors::Flat(self.mode.combine(&sets)))
        } else {
            Ok(Neighbors::PerElement(sets))
        }
    }
}
