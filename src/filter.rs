//! Category filtering shared by every filterable section.
//!
//! A registry is an ordered slice of records. A [`CategoryFilter`] derives
//! the set of categories present in it once, then produces views of the
//! registry for a [`Selection`] without ever reordering or copying records.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Label of the sentinel selection that disables filtering.
pub const ALL_LABEL: &str = "All";

/// A closed set of tags used to partition a registry.
///
/// `Ord` follows declaration order, which is also the order filter
/// controls are displayed in.
pub trait Category: Copy + Ord + fmt::Debug + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

/// Records that carry their own category.
pub trait Categorized {
    type Category: Category;

    fn category(&self) -> Self::Category;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection<C> {
    All,
    Only(C),
}

impl<C> Default for Selection<C> {
    fn default() -> Self {
        Self::All
    }
}

impl<C: Category> Selection<C> {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => ALL_LABEL,
            Self::Only(c) => c.label(),
        }
    }

    pub fn matches(self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }
}

impl<C: Category> fmt::Display for Selection<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl<C: Category> FromStr for Selection<C> {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_LABEL {
            return Ok(Self::All);
        }
        C::ALL
            .iter()
            .copied()
            .find(|c| c.label() == s)
            .map(Self::Only)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Keeps the records of `items` matching `selection`, in their original order.
pub fn filter_by_category<'a, T, C, I, F>(
    items: I,
    selection: Selection<C>,
    accessor: F,
) -> impl Iterator<Item = &'a T>
where
    T: 'a,
    C: Category,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> C,
{
    items
        .into_iter()
        .filter(move |item| selection.matches(accessor(*item)))
}

pub struct CategoryFilter<'a, T, C, F> {
    registry: &'a [T],
    accessor: F,
    categories: BTreeSet<C>,
}

impl<'a, T: Categorized> CategoryFilter<'a, T, T::Category, fn(&T) -> T::Category> {
    pub fn of(registry: &'a [T]) -> Self {
        Self::new(registry, T::category)
    }
}

impl<'a, T, C, F> CategoryFilter<'a, T, C, F>
where
    C: Category,
    F: Fn(&T) -> C,
{
    pub fn new(registry: &'a [T], accessor: F) -> Self {
        let categories = registry.iter().map(&accessor).collect();
        Self {
            registry,
            accessor,
            categories,
        }
    }

    /// Categories present in the registry, in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = C> + '_ {
        self.categories.iter().copied()
    }

    /// The selections a filter control offers: the sentinel first, then
    /// each present category.
    pub fn selections(&self) -> Vec<Selection<C>> {
        std::iter::once(Selection::All)
            .chain(self.categories().map(Selection::Only))
            .collect()
    }

    pub fn accepts(&self, selection: Selection<C>) -> bool {
        match selection {
            Selection::All => true,
            Selection::Only(c) => self.categories.contains(&c),
        }
    }

    pub fn registry(&self) -> &'a [T] {
        self.registry
    }

    /// The visible subset for `selection`.
    ///
    /// Selecting a category that no record carries is a caller bug and
    /// asserts in debug builds.
    pub fn visible(&self, selection: Selection<C>) -> impl Iterator<Item = &'a T> + '_ {
        debug_assert!(
            self.accepts(selection),
            "selection {selection:?} is not offered by this registry"
        );
        filter_by_category(self.registry, selection, &self.accessor)
    }

    pub fn count(&self, selection: Selection<C>) -> usize {
        self.visible(selection).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Tone {
        Warm,
        Cool,
        Neutral,
    }

    impl Category for Tone {
        const ALL: &'static [Self] = &[Self::Warm, Self::Cool, Self::Neutral];

        fn label(self) -> &'static str {
            match self {
                Self::Warm => "Warm",
                Self::Cool => "Cool",
                Self::Neutral => "Neutral",
            }
        }
    }

    #[derive(Debug, PartialEq)]
    struct Swatch {
        name: &'static str,
        tone: Tone,
    }

    fn swatches() -> Vec<Swatch> {
        vec![
            Swatch { name: "teal", tone: Tone::Cool },
            Swatch { name: "red", tone: Tone::Warm },
            Swatch { name: "navy", tone: Tone::Cool },
            Swatch { name: "orange", tone: Tone::Warm },
        ]
    }

    fn names<'a>(items: impl Iterator<Item = &'a Swatch>) -> Vec<&'static str> {
        items.map(|s| s.name).collect()
    }

    #[test]
    fn test_all_is_identity() {
        let registry = swatches();
        let filter = CategoryFilter::new(&registry, |s: &Swatch| s.tone);
        assert_eq!(
            names(filter.visible(Selection::All)),
            vec!["teal", "red", "navy", "orange"]
        );
    }

    #[test]
    fn test_filter_is_stable() {
        let registry = swatches();
        let filter = CategoryFilter::new(&registry, |s: &Swatch| s.tone);
        assert_eq!(
            names(filter.visible(Selection::Only(Tone::Cool))),
            vec!["teal", "navy"]
        );
        assert_eq!(filter.count(Selection::Only(Tone::Warm)), 2);
    }

    #[test]
    fn test_categories_follow_declaration_order() {
        let registry = swatches();
        let filter = CategoryFilter::new(&registry, |s: &Swatch| s.tone);
        // Cool appears first in the registry but Warm is declared first
        assert_eq!(filter.categories().collect::<Vec<_>>(), vec![Tone::Warm, Tone::Cool]);
        assert_eq!(
            filter.selections(),
            vec![
                Selection::All,
                Selection::Only(Tone::Warm),
                Selection::Only(Tone::Cool)
            ]
        );
        assert!(!filter.accepts(Selection::Only(Tone::Neutral)));
    }

    #[test]
    fn test_refiltering_is_idempotent() {
        let registry = swatches();
        let accessor = |s: &Swatch| s.tone;
        let once: Vec<&Swatch> =
            filter_by_category(&registry, Selection::Only(Tone::Warm), accessor).collect();
        let twice: Vec<&Swatch> =
            filter_by_category(once.iter().copied(), Selection::Only(Tone::Warm), accessor)
                .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filtering_leaves_registry_untouched() {
        let registry = swatches();
        let filter = CategoryFilter::new(&registry, |s: &Swatch| s.tone);
        let _ = filter.visible(Selection::Only(Tone::Cool)).count();
        assert_eq!(filter.registry(), swatches().as_slice());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is not offered")]
    fn test_absent_category_fails_fast() {
        let registry = swatches();
        let filter = CategoryFilter::new(&registry, |s: &Swatch| s.tone);
        let _ = filter.visible(Selection::Only(Tone::Neutral)).count();
    }

    #[test]
    fn test_selection_labels_round_trip() {
        assert_eq!("All".parse::<Selection<Tone>>(), Ok(Selection::All));
        assert_eq!(
            "Cool".parse::<Selection<Tone>>(),
            Ok(Selection::Only(Tone::Cool))
        );
        assert_eq!(Selection::Only(Tone::Warm).to_string(), "Warm");
        assert_eq!(
            "Purple".parse::<Selection<Tone>>(),
            Err(UnknownCategory("Purple".to_string()))
        );
    }
}
