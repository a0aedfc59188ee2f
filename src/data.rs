//! Core data structures for showcase entries.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

/// Intrinsic size hint passed to the image loader when none is given.
pub const DEFAULT_IMAGE_SIZE: u32 = 150;

/// Position of an entry within its catalog.
///
/// Catalog order is display order, so the id doubles as the grid index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub usize);

impl EntryId {
    /// Grid index of this entry.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to an image served by the host's image pipeline.
///
/// Only the URI and intrinsic size hints travel with the entry; fetching,
/// resizing and caching belong to whoever draws the scene.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageRef {
    /// Image URI
    pub src: String,
    /// Intrinsic width hint in pixels
    #[cfg_attr(feature = "serde", serde(default = "default_image_size"))]
    pub width: u32,
    /// Intrinsic height hint in pixels
    #[cfg_attr(feature = "serde", serde(default = "default_image_size"))]
    pub height: u32,
}

#[cfg(feature = "serde")]
fn default_image_size() -> u32 {
    DEFAULT_IMAGE_SIZE
}

impl ImageRef {
    /// Create an image reference with the default 150x150 size hint.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            width: DEFAULT_IMAGE_SIZE,
            height: DEFAULT_IMAGE_SIZE,
        }
    }

    /// Override the intrinsic size hint.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Body content of an entry, shown only in the expanded overlay.
///
/// `Lazy` producers run every time the overlay is rendered, never when the
/// catalog is built.
#[derive(Clone)]
pub enum EntryBody {
    /// Content known up front
    Static(String),
    /// Content produced on demand at render time
    Lazy(Rc<dyn Fn() -> String>),
}

impl EntryBody {
    /// Wrap a zero-argument producer.
    pub fn lazy<F>(producer: F) -> Self
    where
        F: Fn() -> String + 'static,
    {
        Self::Lazy(Rc::new(producer))
    }

    /// Resolve the body into displayable text.
    pub fn materialize(&self) -> Cow<'_, str> {
        match self {
            Self::Static(text) => Cow::Borrowed(text.as_str()),
            Self::Lazy(producer) => Cow::Owned(producer()),
        }
    }

    #[inline]
    pub fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }
}

impl Default for EntryBody {
    fn default() -> Self {
        Self::Static(String::new())
    }
}

impl fmt::Debug for EntryBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl From<String> for EntryBody {
    fn from(text: String) -> Self {
        Self::Static(text)
    }
}

impl From<&str> for EntryBody {
    fn from(text: &str) -> Self {
        Self::Static(text.to_string())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EntryBody {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.materialize())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EntryBody {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <String as serde::Deserialize>::deserialize(deserializer).map(Self::Static)
    }
}

/// One showcase record: a card in the grid and its expanded overlay.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShowcaseEntry {
    /// Card title, unique within a catalog
    pub title: String,
    /// Short tagline, may be empty
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Image shown in the grid
    pub collapsed_image: ImageRef,
    /// Image shown in the overlay
    pub expanded_image: ImageRef,
    /// Call-to-action button text
    pub cta_label: String,
    /// Call-to-action link, opened in a new browsing context
    pub cta_target: String,
    /// Overlay body
    #[cfg_attr(feature = "serde", serde(default))]
    pub body: EntryBody,
}

impl ShowcaseEntry {
    /// Create an entry with empty description, body and call-to-action.
    pub fn new(
        title: impl Into<String>,
        collapsed_image: ImageRef,
        expanded_image: ImageRef,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            collapsed_image,
            expanded_image,
            cta_label: String::new(),
            cta_target: String::new(),
            body: EntryBody::default(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn cta(mut self, label: impl Into<String>, target: impl Into<String>) -> Self {
        self.cta_label = label.into();
        self.cta_target = target.into();
        self
    }

    pub fn body(mut self, body: impl Into<EntryBody>) -> Self {
        self.body = body.into();
        self
    }

    /// Check if this entry has a description worth rendering.
    #[inline]
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}
