use crate::error::{QueryError, Result};
use crate::topology::TopologyStore;

/// Finds the throats that cross the boundary between labeled pore domains.
///
/// A throat is an interface throat when its two endpoints carry two different
/// labels from the given list. Throats inside one domain, or with an endpoint
/// outside every listed domain, are excluded. Fewer than two distinct labels
/// can never form an interface and yield an empty result.
pub struct FindInterfaceThroats<'a> {
    labels: Vec<&'a str>,
}

impl<'a> FindInterfaceThroats<'a> {
    /// Creates a new query over the named pore labels.
    #[must_use]
    pub fn new(labels: &[&'a str]) -> Self {
        let mut unique: Vec<&'a str> = Vec::with_capacity(labels.len());
        for &label in labels {
            if !unique.contains(&label) {
                unique.push(label);
            }
        }
        Self { labels: unique }
    }

    /// Executes the query, returning interface throats in ascending order.
    ///
    /// # Errors
    ///
    /// Returns an error if a label does not exist, or if two of the listed
    /// labels share a pore.
    pub fn execute(&self, store: &TopologyStore) -> Result<Vec<usize>> {
        let masks = self
            .labels
            .iter()
            .map(|&name| store.label(name))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut domain: Vec<Option<usize>> = vec![None; store.num_pores()];
        for (li, mask) in masks.iter().enumerate() {
            for (pore, &member) in mask.iter().enumerate() {
                if !member {
                    continue;
                }
                if let Some(prev) = domain[pore] {
                    return Err(QueryError::OverlappingLabels {
                        first: self.labels[prev].into(),
                        second: self.labels[li].into(),
                        pore,
                    }
                    .into());
                }
                domain[pore] = Some(li);
            }
        }

        if self.labels.len() < 2 {
            return Ok(Vec::new());
        }

        let throats: Vec<usize> = store
            .conns()
            .iter()
            .enumerate()
            .filter(|&(_, &[a, b])| {
                matches!((domain[a], domain[b]), (Some(x), Some(y)) if x != y)
            })
            .map(|(t, _)| t)
            .collect();
        tracing::debug!(
            labels = ?self.labels,
            found = throats.len(),
            "find_interface_throats"
        );
        Ok(throats)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{PorenetError, TopologyError};

    /// Path 0 - 1 - 2 - 3 - 4 - 5 with domains a = {0, 1}, b = {2, 3}, c = {5}.
    fn labeled_path() -> TopologyStore {
        let conns = (0..5).map(|p| [p, p + 1]).collect();
        let mut store = TopologyStore::new(6, conns).unwrap();
        store
            .set_label("a", vec![true, true, false, false, false, false])
            .unwrap();
        store
            .set_label("b", vec![false, false, true, true, false, false])
            .unwrap();
        store
            .set_label("c", vec![false, false, false, false, false, true])
            .unwrap();
        store
    }

    #[test]
    fn finds_boundary_throat() {
        let store = labeled_path();
        assert_eq!(FindInterfaceThroats::new(&["a", "b"]).execute(&store).unwrap(), vec![1]);
        assert_eq!(FindInterfaceThroats::new(&["b", "a"]).execute(&store).unwrap(), vec![1]);
    }

    #[test]
    fn unlabeled_gap_is_not_an_interface() {
        let store = labeled_path();
        assert!(FindInterfaceThroats::new(&["b", "c"]).execute(&store).unwrap().is_empty());
        assert!(FindInterfaceThroats::new(&["a", "c"]).execute(&store).unwrap().is_empty());
    }

    #[test]
    fn more_than_two_labels() {
        let mut store = labeled_path();
        store
            .set_label("d", vec![false, false, false, false, true, false])
            .unwrap();
        let found = FindInterfaceThroats::new(&["a", "b", "c", "d"]).execute(&store).unwrap();
        assert_eq!(found, vec![1, 3, 4]);
    }

    #[test]
    fn single_label_has_no_interface() {
        let store = labeled_path();
        assert!(FindInterfaceThroats::new(&["a"]).execute(&store).unwrap().is_empty());
        assert!(FindInterfaceThroats::new(&["a", "a"]).execute(&store).unwrap().is_empty());
    }

    #[test]
    fn unknown_label() {
        let store = labeled_path();
        let err = FindInterfaceThroats::new(&["a", "z"]).execute(&store).unwrap_err();
        assert!(matches!(
            err,
            PorenetError::Topology(TopologyError::LabelNotFound(name)) if name == "z"
        ));
    }

    #[test]
    fn overlapping_labels() {
        let mut store = labeled_path();
        store
            .set_label("ab", vec![false, true, true, false, false, false])
            .unwrap();
        let err = FindInterfaceThroats::new(&["a", "ab"]).execute(&store).unwrap_err();
        assert!(matches!(
            err,
            PorenetError::Query(QueryError::OverlappingLabels { pore: 1, .. })
        ));
    }
}
