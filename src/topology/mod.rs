pub mod element;
pub mod selection;

pub use element::ElementKind;
pub use selection::Selection;

use std::collections::BTreeMap;

use crate::error::TopologyError;

/// Read-only connectivity of a pore network.
///
/// Holds the throat→pore connectivity table and a compressed pore→throat
/// incidence index built once at construction. Pores and throats are plain
/// indices in `[0, num_pores)` and `[0, num_throats)`.
#[derive(Debug, Clone, Default)]
pub struct TopologyStore {
    num_pores: usize,
    conns: Vec<[usize; 2]>,
    /// `incident[offsets[p]..offsets[p + 1]]` are the throats touching pore `p`.
    offsets: Vec<usize>,
    incident: Vec<usize>,
    labels: BTreeMap<String, Vec<bool>>,
}

impl TopologyStore {
    /// Creates a store for `num_pores` pores connected by `conns`, one
    /// `[pore, pore]` pair per throat.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::IndexOutOfRange`] if an endpoint is not a
    /// valid pore index.
    pub fn new(num_pores: usize, conns: Vec<[usize; 2]>) -> Result<Self, TopologyError> {
        if let Some(&index) = conns.iter().flatten().find(|&&p| p >= num_pores) {
            return Err(TopologyError::IndexOutOfRange {
                kind: ElementKind::Pore,
                index,
                count: num_pores,
            });
        }

        let mut degree = vec![0usize; num_pores];
        for &[a, b] in &conns {
            degree[a] += 1;
            if a != b {
                degree[b] += 1;
            }
        }

        let mut offsets = Vec::with_capacity(num_pores + 1);
        offsets.push(0);
        for d in &degree {
            let last = offsets.last().copied().unwrap_or(0);
            offsets.push(last + d);
        }

        // Throats are visited in order, so each pore's slice ends up sorted.
        let mut cursor = offsets[..num_pores].to_vec();
        let mut incident = vec![0usize; offsets[num_pores]];
        for (t, &[a, b]) in conns.iter().enumerate() {
            incident[cursor[a]] = t;
            cursor[a] += 1;
            if a != b {
                incident[cursor[b]] = t;
                cursor[b] += 1;
            }
        }

        tracing::debug!(
            num_pores,
            num_throats = conns.len(),
            "built pore network topology"
        );

        Ok(Self {
            num_pores,
            conns,
            offsets,
            incident,
            labels: BTreeMap::new(),
        })
    }

    // --- Counts ---

    /// Number of pores (`Np`).
    #[must_use]
    pub fn num_pores(&self) -> usize {
        self.num_pores
    }

    /// Number of throats (`Nt`).
    #[must_use]
    pub fn num_throats(&self) -> usize {
        self.conns.len()
    }

    /// Number of elements of the given kind.
    #[must_use]
    pub fn count(&self, kind: ElementKind) -> usize {
        match kind {
            ElementKind::Pore => self.num_pores(),
            ElementKind::Throat => self.num_throats(),
        }
    }

    /// All pore indices, ascending.
    #[must_use]
    pub fn pore_indices(&self) -> std::ops::Range<usize> {
        0..self.num_pores
    }

    /// All throat indices, ascending.
    #[must_use]
    pub fn throat_indices(&self) -> std::ops::Range<usize> {
        0..self.conns.len()
    }

    // --- Adjacency ---

    /// The full connectivity table, one endpoint pair per throat.
    #[must_use]
    pub fn conns(&self) -> &[[usize; 2]] {
        &self.conns
    }

    /// The two pore endpoints of a throat, in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if `throat` is out of range.
    pub fn throat_endpoints(&self, throat: usize) -> Result<[usize; 2], TopologyError> {
        self.conns
            .get(throat)
            .copied()
            .ok_or(TopologyError::IndexOutOfRange {
                kind: ElementKind::Throat,
                index: throat,
                count: self.conns.len(),
            })
    }

    /// The throats touching a pore, ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if `pore` is out of range.
    pub fn incident_throats(&self, pore: usize) -> Result<&[usize], TopologyError> {
        self.check_pore(pore)?;
        Ok(&self.incident[self.offsets[pore]..self.offsets[pore + 1]])
    }

    /// The pores sharing a throat with `pore`, sorted and duplicate-free.
    ///
    /// A throat connecting `pore` to itself makes `pore` its own neighbor.
    ///
    /// # Errors
    ///
    /// Returns an error if `pore` is out of range.
    pub fn neighbors_of(&self, pore: usize) -> Result<Vec<usize>, TopologyError> {
        let mut neighbors: Vec<usize> = self
            .incident_throats(pore)?
            .iter()
            .map(|&t| {
                let [a, b] = self.conns[t];
                if a == pore {
                    b
                } else {
                    a
                }
            })
            .collect();
        neighbors.sort_unstable();
        neighbors.dedup();
        Ok(neighbors)
    }

    fn check_pore(&self, pore: usize) -> Result<(), TopologyError> {
        if pore < self.num_pores {
            Ok(())
        } else {
            Err(TopologyError::IndexOutOfRange {
                kind: ElementKind::Pore,
                index: pore,
                count: self.num_pores,
            })
        }
    }

    // --- Label operations ---

    /// Stores a named pore label, replacing any label with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::ShapeMismatch`] if `mask` does not have one
    /// entry per pore.
    pub fn set_label(
        &mut self,
        name: impl Into<String>,
        mask: Vec<bool>,
    ) -> Result<(), TopologyError> {
        if mask.len() != self.num_pores {
            return Err(TopologyError::ShapeMismatch {
                kind: ElementKind::Pore,
                expected: self.num_pores,
                actual: mask.len(),
            });
        }
        self.labels.insert(name.into(), mask);
        Ok(())
    }

    /// Returns the mask of a named pore label.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::LabelNotFound`] if no such label exists.
    pub fn label(&self, name: &str) -> Result<&[bool], TopologyError> {
        self.labels
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| TopologyError::LabelNotFound(name.into()))
    }

    /// Names of all stored labels, in lexical order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.keys().map(String::as_str)
    }

    /// The pores carrying a label, ascending.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::LabelNotFound`] if no such label exists.
    pub fn pores_with_label(&self, name: &str) -> Result<Vec<usize>, TopologyError> {
        Selection::Mask(self.label(name)?).resolve(ElementKind::Pore, self.num_pores)
    }
}
