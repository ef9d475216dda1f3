use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Key of a node. Sentinels bound every level on both sides.
///
/// Variant order gives the total order `NegInf < Value(_) < PosInf`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkipKey {
    // leftmost nodes of every level
    NegInf,
    // shared by every node of one tower
    Value(Arc<str>),
    // rightmost nodes of every level
    PosInf,
}

impl SkipKey {
    pub fn is_sentinel(&self) -> bool {
        match self {
            SkipKey::Value(_) => false,
            _ => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SkipKey::Value(key) => Some(key),
            _ => None,
        }
    }

    /// Compares against an ordinary key without allocating one.
    pub fn cmp_str(&self, other: &str) -> Ordering {
        match self {
            SkipKey::NegInf => Ordering::Less,
            SkipKey::Value(key) => key.as_ref().cmp(other),
            SkipKey::PosInf => Ordering::Greater,
        }
    }

    pub fn matches(&self, other: &str) -> bool {
        self.cmp_str(other) == Ordering::Equal
    }
}

impl fmt::Display for SkipKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipKey::NegInf => write!(f, "-oo"),
            SkipKey::Value(key) => write!(f, "{}", key),
            SkipKey::PosInf => write!(f, "+oo"),
        }
    }
}
