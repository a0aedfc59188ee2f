//! Ordered, read-only collection of showcase entries.

use std::collections::HashMap;

use crate::data::{EntryId, ShowcaseEntry};

/// Error type for catalog construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Two entries share a title, so their correlation keys would collide
    #[error("duplicate entry title {title:?} at positions {first} and {second}")]
    DuplicateTitle {
        title: String,
        first: usize,
        second: usize,
    },
}

/// Fixed ordered list of showcase entries.
///
/// Insertion order is display order. Entries cannot be mutated once the
/// catalog is built.
///
/// ## Example
///
/// ```rust
/// use showcase_core_view::{Catalog, EntryId, ImageRef, ShowcaseEntry};
///
/// let catalog = Catalog::new(vec![
///     ShowcaseEntry::new("A", ImageRef::new("a.png"), ImageRef::new("a-big.png")),
///     ShowcaseEntry::new("B", ImageRef::new("b.png"), ImageRef::new("b-big.png")),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.position("B"), Some(EntryId(1)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<ShowcaseEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate titles.
    pub fn new(entries: Vec<ShowcaseEntry>) -> Result<Self, CatalogError> {
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if let Some(&first) = seen.get(entry.title.as_str()) {
                return Err(CatalogError::DuplicateTitle {
                    title: entry.title.clone(),
                    first,
                    second: index,
                });
            }
            seen.insert(entry.title.as_str(), index);
        }

        tracing::info!(entries = entries.len(), "showcase catalog built");
        Ok(Self { entries })
    }

    /// The showcase table shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            entries: crate::builtin::entries(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry with the given id.
    pub fn get(&self, id: EntryId) -> Option<&ShowcaseEntry> {
        self.entries.get(id.index())
    }

    /// Check if an id refers to an entry of this catalog.
    #[inline]
    pub fn contains(&self, id: EntryId) -> bool {
        id.index() < self.entries.len()
    }

    /// Find the id of the entry with exactly this title.
    pub fn position(&self, title: &str) -> Option<EntryId> {
        self.entries
            .iter()
            .position(|entry| entry.title == title)
            .map(EntryId)
    }

    /// Iterate entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &ShowcaseEntry)> + Clone + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (EntryId(index), entry))
    }

    /// All entries as a slice, in display order.
    #[inline]
    pub fn entries(&self) -> &[ShowcaseEntry] {
        &self.entries
    }
}
