//! # showcase-core-view
//!
//! Core card gallery and expanding overlay library for showcase pages.
//!
//! This crate provides platform-agnostic data structures and logic for:
//! - Holding an ordered catalog of showcase entries
//! - Driving the open/close interaction state (card click, close control,
//!   outside click, Escape)
//! - Suppressing page scrolling while the overlay is open, scoped to the
//!   open state
//! - Declaring shared-element correlation keys and fades for an external
//!   animation engine
//! - Building a render scene and HTML for it (with optional DOM binding)
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for data structures
//! - `toml` - Load a [`GalleryConfig`] from TOML
//! - `web` - Enable DOM mounting, body scroll lock and listeners
//!
//! ## Example
//!
//! ```rust
//! use showcase_core_view::{Gallery, GalleryEvent, GalleryState, Key, MemorySurface, ScrollLocker};
//!
//! let surface = MemorySurface::new();
//! let mut gallery = Gallery::builtin(ScrollLocker::new(surface.clone()));
//!
//! let first = gallery.scene().grid.cells().next().unwrap().id;
//! gallery.handle(GalleryEvent::CardClicked(first));
//! assert_eq!(gallery.state(), GalleryState::Open(first));
//!
//! let html = gallery.scene().to_html();
//! assert!(html.contains("data-gallery-region"));
//!
//! gallery.handle(GalleryEvent::KeyDown(Key::Escape));
//! assert!(surface.is_scrollable());
//! ```

mod animation;
mod builtin;
mod catalog;
mod config;
mod controller;
mod data;
mod gallery;
pub mod layout;
mod outside;
pub mod render;
mod scroll_lock;

#[cfg(feature = "web")]
pub mod web;

pub use animation::{
    ExitToken, Fade, InstanceId, LayoutId, LayoutPart, Presence, PresencePhase,
    CLOSE_CONTROL_EXIT,
};
pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, GalleryConfig, Heading};
pub use controller::{DismissReason, GalleryController, GalleryState, Key, Transition};
pub use data::{EntryBody, EntryId, ImageRef, ShowcaseEntry, DEFAULT_IMAGE_SIZE};
pub use gallery::{Gallery, GalleryEvent};
pub use layout::{LayoutConfig, Point, Rect, Viewport};
pub use outside::{OutsideClick, PointerKind};
pub use render::{GalleryScene, OverlayView};
pub use scroll_lock::{MemorySurface, Overflow, ScrollLock, ScrollLocker, ScrollSurface};

#[cfg(feature = "web")]
pub use web::{mount, BodySurface, MountedGallery};
