use std::{error, fmt, result};

/// Error enumerates over all possible errors that this package
/// shall return.
#[derive(Debug, PartialEq)]
pub enum Error<K> {
    /// Returned by insert() when the comparator cannot order the key
    /// against itself, such keys can never be located again.
    InvalidKey,
    /// Fatal case, root of a non-empty tree is red.
    RedRoot,
    /// Fatal case, a red node has a red child. Components are the
    /// parent key and the child key.
    ConsecutiveReds(K, K),
    /// Fatal case, number of blacks differ between left and right
    /// sub-tree. The String component can be used for debugging.
    UnbalancedBlacks(String),
    /// Fatal case, index entries are not in sort-order.
    SortError(K, K),
    /// Fatal case, child's parent link does not point back to parent.
    BrokenParent(K),
    /// Fatal case, tree height (first) exceeds 2*log2(n+1) (second).
    HeightBound(usize, usize),
}

pub type Result<T, K> = result::Result<T, Error<K>>;

impl<K> fmt::Display for Error<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidKey => write!(f, "key is not comparable with itself"),
            Error::RedRoot => write!(f, "root node is red"),
            Error::ConsecutiveReds(p, c) => write!(f, "consecutive reds {:?} -> {:?}", p, c),
            Error::UnbalancedBlacks(s) => write!(f, "unbalanced blacks {}", s),
            Error::SortError(a, b) => write!(f, "sort error {:?} {:?}", a, b),
            Error::BrokenParent(k) => write!(f, "broken parent link at {:?}", k),
            Error::HeightBound(h, b) => write!(f, "height {} exceeds bound {}", h, b),
        }
    }
}

impl<K> error::Error for Error<K> where K: fmt::Debug {}
