use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::QueryError;

/// How per-pore neighbor sets are merged into one result.
///
/// Each candidate is counted by the number of per-pore sets it appears in;
/// the mode decides which counts are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Neighbors of at least one selected pore.
    #[default]
    Union,
    /// Neighbors shared by two or more selected pores. A single pore keeps
    /// its whole neighbor set.
    Intersection,
    /// Neighbors of exactly one selected pore.
    NotIntersection,
}

impl Mode {
    /// Merges duplicate-free sets according to the mode.
    ///
    /// Returns a sorted, duplicate-free result. An empty list of sets merges
    /// to an empty result in every mode.
    #[must_use]
    pub fn combine(self, sets: &[Vec<usize>]) -> Vec<usize> {
        let k = sets.len();
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for set in sets {
            for &i in set {
                *counts.entry(i).or_insert(0) += 1;
            }
        }
        counts
            .into_iter()
            .filter(|&(_, count)| self.accepts(count, k))
            .map(|(i, _)| i)
            .collect()
    }

    fn accepts(self, count: usize, k: usize) -> bool {
        match self {
            Self::Union => count >= 1,
            Self::Intersection if k == 1 => count == 1,
            Self::Intersection => count >= 2,
            Self::NotIntersection => count == 1,
        }
    }

    /// The canonical lowercase name of the mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Intersection => "intersection",
            Self::NotIntersection => "not_intersection",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "union" => Ok(Self::Union),
            "intersection" => Ok(Self::Intersection),
            "not_intersection" => Ok(Self::NotIntersection),
            other => Err(QueryError::InvalidMode(other.into())),
        }
    }
}
