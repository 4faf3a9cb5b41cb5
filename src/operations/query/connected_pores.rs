use crate::error::Result;
use crate::topology::{ElementKind, Selection, TopologyStore};

/// Result of [`FindConnectedPores`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectedPores {
    /// One endpoint pair per input throat, in input order.
    Pairs(Vec<[usize; 2]>),
    /// The sorted, duplicate-free pores touched by any input throat.
    Flat(Vec<usize>),
}

impl ConnectedPores {
    /// Table shape of the result: `(n, 2)` for pairs, `(n, 1)` for flat.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Self::Pairs(pairs) => (pairs.len(), 2),
            Self::Flat(pores) => (pores.len(), 1),
        }
    }

    /// Returns `true` if no pores were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shape().0 == 0
    }

    /// The endpoint pairs, if this is a pairwise result.
    #[must_use]
    pub fn as_pairs(&self) -> Option<&[[usize; 2]]> {
        match self {
            Self::Pairs(pairs) => Some(pairs),
            Self::Flat(_) => None,
        }
    }

    /// The merged pores, if this is a flat result.
    #[must_use]
    pub fn as_flat(&self) -> Option<&[usize]> {
        match self {
            Self::Flat(pores) => Some(pores),
            Self::Pairs(_) => None,
        }
    }
}

/// Finds the pores at either end of a set of throats.
///
/// An empty selection always yields an empty [`ConnectedPores::Pairs`]
/// table of shape `(0, 2)`, whether or not the result is flattened.
pub struct FindConnectedPores<'a> {
    throats: Selection<'a>,
    flatten: bool,
}

impl<'a> FindConnectedPores<'a> {
    /// Creates a new query over the given throats, not flattened.
    #[must_use]
    pub fn new(throats: impl Into<Selection<'a>>) -> Self {
        Self {
            throats: throats.into(),
            flatten: false,
        }
    }

    /// Merges all endpoints into one sorted set.
    #[must_use]
    pub fn with_flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection holds an out-of-range throat or is a
    /// mask of the wrong length.
    pub fn execute(&self, store: &TopologyStore) -> Result<ConnectedPores> {
        let throats = self
            .throats
            .resolve(ElementKind::Throat, store.num_throats())?;
        tracing::debug!(selected = throats.len(), flatten = self.flatten, "find_connected_pores");

        let conns = store.conns();
        if throats.is_empty() {
            return Ok(ConnectedPores::Pairs(Vec::new()));
        }
        if !self.flatten {
            return Ok(ConnectedPores::Pairs(
                throats.iter().map(|&t| conns[t]).collect(),
            ));
        }

        let mut pores: Vec<usize> = throats.iter().flat_map(|&t| conns[t]).collect();
        pores.sort_unstable();
        pores.dedup();
        Ok(ConnectedPores::Flat(pores))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store() -> TopologyStore {
        TopologyStore::new(5, vec![[0, 1], [2, 1], [3, 4], [4, 0]]).unwrap()
    }

    #[test]
    fn pairs_keep_stored_and_input_order() {
        let result = FindConnectedPores::new(&[3, 1, 1]).execute(&store()).unwrap();
        assert_eq!(result, ConnectedPores::Pairs(vec![[4, 0], [2, 1], [2, 1]]));
        assert_eq!(result.shape(), (3, 2));
    }

    #[test]
    fn flat_is_sorted_unique() {
        let result = FindConnectedPores::new(&[3, 1, 0])
            .with_flatten(true)
            .execute(&store())
            .unwrap();
        assert_eq!(result.as_flat().unwrap(), &[0, 1, 2, 4]);
    }

    #[test]
    fn mask_matches_indices() {
        let mask = [true, false, false, true];
        let a = FindConnectedPores::new(&mask).with_flatten(true).execute(&store()).unwrap();
        let b = FindConnectedPores::new(&[0, 3]).with_flatten(true).execute(&store()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_selection_has_pair_shape() {
        let empty: Vec<usize> = Vec::new();
        for flatten in [false, true] {
            let result = FindConnectedPores::new(&empty)
                .with_flatten(flatten)
                .execute(&store())
                .unwrap();
            assert_eq!(result.shape(), (0, 2));
            assert!(result.is_empty());
        }
    }

    #[test]
    fn out_of_range_throat() {
        assert!(FindConnectedPores::new(4).execute(&store()).is_err());
        assert!(FindConnectedPores::new(&[true, false]).execute(&store()).is_err());
    }
}
