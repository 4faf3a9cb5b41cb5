use std::fmt;

/// The two kinds of network element an index can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A network node (void element).
    Pore,
    /// A network edge connecting two pores.
    Throat,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pore => f.write_str("pore"),
            Self::Throat => f.write_str("throat"),
        }
    }
}
