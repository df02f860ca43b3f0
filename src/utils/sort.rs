//! Stable ordering of key/value pairs by value.
//!
//! [`sort_by_value`] is the single ordering primitive used to rank vertices by in-degree,
//! both by the cover algorithm and by reporting code that wants a "top N" listing.

use strum::{Display, EnumIter, EnumString};

/// Direction for [`sort_by_value`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    /// Smallest value first
    Ascending,
    /// Largest value first
    #[default]
    Descending,
}

/// Returns `entries` ordered by value.
///
/// The sort is stable in both directions: entries with equal values keep the relative
/// order in which they were supplied. This tie-break is what makes repeated runs over the
/// same input produce the same ranking.
///
/// # Arguments
///
/// * `entries` - `(key, value)` pairs in their original order
/// * `order` - Whether the largest or the smallest value comes first
///
/// # Examples
///
/// ```rust
/// use followcover::utils::{sort_by_value, SortOrder};
///
/// let ranked = sort_by_value(vec![("a", 1), ("b", 3), ("c", 1), ("d", 2)], SortOrder::Descending);
/// assert_eq!(ranked, vec![("b", 3), ("d", 2), ("a", 1), ("c", 1)]);
/// ```
#[must_use]
pub fn sort_by_value<K, V, I>(entries: I, order: SortOrder) -> Vec<(K, V)>
where
    I: IntoIterator<Item = (K, V)>,
    V: Ord,
{
    let mut sorted: Vec<(K, V)> = entries.into_iter().collect();
    match order {
        SortOrder::Ascending => sorted.sort_by(|a, b| a.1.cmp(&b.1)),
        SortOrder::Descending => sorted.sort_by(|a, b| b.1.cmp(&a.1)),
    }
    sorted
}
