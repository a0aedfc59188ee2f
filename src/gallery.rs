//! The gallery component: catalog, interaction state and layout together.

use crate::animation::{ExitToken, InstanceId, PresencePhase};
use crate::catalog::Catalog;
use crate::config::{ConfigError, GalleryConfig, Heading};
use crate::controller::{DismissReason, GalleryController, GalleryState, Key, Transition};
use crate::data::{EntryId, ShowcaseEntry};
use crate::layout::{LayoutConfig, Point, Rect, Viewport};
use crate::outside::{OutsideClick, PointerKind};
use crate::render::{build_scene, GalleryScene, SceneInput};
use crate::scroll_lock::ScrollLocker;

/// User input delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GalleryEvent {
    /// A grid cell was clicked
    CardClicked(EntryId),
    /// The overlay close control was clicked
    CloseClicked,
    /// Pointer pressed anywhere in the viewport
    PointerDown { point: Point, kind: PointerKind },
    /// The host's own detector saw pointer activity outside the expanded
    /// region (e.g. by DOM containment)
    PointerOutside(PointerKind),
    /// Key pressed while the gallery is mounted
    KeyDown(Key),
    /// The animation engine finished the overlay exit started with this
    /// token
    ExitComplete(ExitToken),
}

/// A mounted card gallery.
///
/// Owns its catalog and interaction state. Dropping the gallery is its
/// teardown: an open overlay is dismissed and the scroll lock released.
///
/// ## Example
///
/// ```rust
/// use showcase_core_view::{
///     Gallery, GalleryEvent, GalleryState, Key, MemorySurface, Point, PointerKind, ScrollLocker,
/// };
///
/// let surface = MemorySurface::new();
/// let mut gallery = Gallery::builtin(ScrollLocker::new(surface.clone()));
///
/// let net_r = gallery.catalog().position("NET-R").unwrap();
/// gallery.handle(GalleryEvent::CardClicked(net_r));
/// assert_eq!(gallery.state(), GalleryState::Open(net_r));
/// assert!(!surface.is_scrollable());
///
/// gallery.handle(GalleryEvent::PointerDown {
///     point: Point::new(1.0, 1.0),
///     kind: PointerKind::Mouse,
/// });
/// assert_eq!(gallery.state(), GalleryState::Closed);
/// assert!(surface.is_scrollable());
/// ```
#[derive(Debug)]
pub struct Gallery {
    instance: InstanceId,
    heading: Heading,
    layout: LayoutConfig,
    catalog: Catalog,
    viewport: Viewport,
    controller: GalleryController,
}

impl Gallery {
    /// Create a gallery over `catalog` with the default heading and layout.
    pub fn new(catalog: Catalog, locker: ScrollLocker) -> Self {
        Self::with_parts(Heading::default(), LayoutConfig::default(), catalog, locker)
    }

    /// Create a gallery over the built-in showcase.
    pub fn builtin(locker: ScrollLocker) -> Self {
        Self::new(Catalog::builtin(), locker)
    }

    /// Create a gallery from injected configuration.
    pub fn from_config(config: GalleryConfig, locker: ScrollLocker) -> Result<Self, ConfigError> {
        let catalog = Catalog::new(config.entries)?;
        Ok(Self::with_parts(config.heading, config.layout, catalog, locker))
    }

    fn with_parts(
        heading: Heading,
        layout: LayoutConfig,
        catalog: Catalog,
        locker: ScrollLocker,
    ) -> Self {
        let controller = GalleryController::new(catalog.len(), locker);
        Self {
            instance: InstanceId::next(),
            heading,
            layout,
            catalog,
            viewport: Viewport::default(),
            controller,
        }
    }

    /// Pin the instance id used in correlation keys.
    pub fn with_instance(mut self, instance: InstanceId) -> Self {
        self.instance = instance;
        self
    }

    /// Update the viewport after a resize.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    #[inline]
    pub fn heading(&self) -> &Heading {
        &self.heading
    }

    #[inline]
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    pub fn state(&self) -> GalleryState {
        self.controller.state()
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    /// Active entry, if open.
    pub fn active(&self) -> Option<(EntryId, &ShowcaseEntry)> {
        let id = self.controller.active()?;
        self.catalog.get(id).map(|entry| (id, entry))
    }

    /// Check if a dismissed overlay is still running its exit animation.
    pub fn is_exiting(&self) -> bool {
        matches!(self.controller.presence(), Some((_, PresencePhase::Exiting)))
    }

    /// Bounds of the expanded card while open.
    pub fn expanded_region(&self) -> Option<Rect> {
        self.controller
            .is_open()
            .then(|| self.layout.modal_rect(self.viewport))
    }

    /// Expand an entry.
    pub fn select(&mut self, id: EntryId) -> Transition {
        self.controller.select(id)
    }

    /// Expand the entry with this exact title.
    pub fn select_title(&mut self, title: &str) -> Transition {
        match self.catalog.position(title) {
            Some(id) => self.controller.select(id),
            None => {
                tracing::warn!(title, "no entry with this title");
                Transition::Unchanged
            }
        }
    }

    /// Collapse the overlay.
    pub fn dismiss(&mut self, reason: DismissReason) -> Transition {
        self.controller.dismiss(reason)
    }

    /// Feed one input event.
    pub fn handle(&mut self, event: GalleryEvent) -> Transition {
        match event {
            GalleryEvent::CardClicked(id) => self.controller.select(id),
            GalleryEvent::CloseClicked => self.controller.dismiss(DismissReason::CloseControl),
            GalleryEvent::PointerDown { point, kind } => {
                let detector = OutsideClick::new(self.expanded_region());
                let transition = self.controller.on_pointer_down(point, &detector);
                if transition.is_change() {
                    tracing::trace!(?kind, x = point.x, y = point.y, "pointer outside overlay");
                }
                transition
            }
            GalleryEvent::PointerOutside(kind) => {
                tracing::trace!(?kind, "pointer outside overlay");
                self.controller.dismiss(DismissReason::OutsideClick)
            }
            GalleryEvent::KeyDown(key) => self.controller.on_key(key),
            GalleryEvent::ExitComplete(token) => self.controller.finish_exit(token),
        }
    }

    /// Token of the overlay exit in progress, if any.
    #[inline]
    pub fn exit_token(&self) -> Option<ExitToken> {
        self.controller.exit_token()
    }

    /// Unmount the exiting overlay if `token` belongs to its exit.
    pub fn finish_exit(&mut self, token: ExitToken) -> Transition {
        self.controller.finish_exit(token)
    }

    /// Build the scene to draw for the current state.
    pub fn scene(&self) -> GalleryScene<'_> {
        build_scene(SceneInput {
            heading: &self.heading,
            catalog: &self.catalog,
            layout: &self.layout,
            viewport: self.viewport,
            instance: self.instance,
            presence: self.controller.presence(),
            scroll_locked: self.controller.locker().is_locked(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ImageRef;
    use crate::scroll_lock::MemorySurface;

    fn gallery() -> (Gallery, MemorySurface) {
        let surface = MemorySurface::new();
        let catalog = Catalog::new(vec![
            ShowcaseEntry::new("A", ImageRef::new("a.png"), ImageRef::new("a-big.png")),
            ShowcaseEntry::new("B", ImageRef::new("b.png"), ImageRef::new("b-big.png")),
        ])
        .unwrap();
        let mut gallery = Gallery::new(catalog, ScrollLocker::new(surface.clone()))
            .with_instance(InstanceId::fixed(1));
        gallery.set_viewport(Viewport::new(1280.0, 1000.0));
        (gallery, surface)
    }

    fn click(x: f64, y: f64) -> GalleryEvent {
        GalleryEvent::PointerDown {
            point: Point::new(x, y),
            kind: PointerKind::Mouse,
        }
    }

    #[test]
    fn test_every_card_opens_itself() {
        let (mut gallery, _) = gallery();
        let ids: Vec<EntryId> = gallery.catalog().iter().map(|(id, _)| id).collect();
        for id in ids {
            gallery.handle(GalleryEvent::CardClicked(id));
            assert_eq!(gallery.state(), GalleryState::Open(id));
            assert_eq!(gallery.active().map(|(active, _)| active), Some(id));
            gallery.handle(GalleryEvent::KeyDown(Key::Escape));
        }
    }

    #[test]
    fn test_every_dismissal_path() {
        let events = [
            GalleryEvent::CloseClicked,
            GalleryEvent::KeyDown(Key::Escape),
            click(5.0, 5.0),
            GalleryEvent::PointerOutside(PointerKind::Touch),
        ];
        for event in events {
            let (mut gallery, surface) = gallery();
            gallery.handle(GalleryEvent::CardClicked(EntryId(1)));
            assert!(!surface.is_scrollable());

            let transition = gallery.handle(event);
            assert!(transition.is_change(), "{event:?} should dismiss");
            assert_eq!(gallery.state(), GalleryState::Closed);
            assert!(surface.is_scrollable(), "{event:?} should restore scrolling");
        }
    }

    #[test]
    fn test_click_inside_region_keeps_open() {
        let (mut gallery, _) = gallery();
        gallery.select(EntryId(0));
        let region = gallery.expanded_region().unwrap();
        let inside = click(region.x + 10.0, region.y + 10.0);
        assert_eq!(gallery.handle(inside), Transition::Unchanged);
        assert!(gallery.is_open());
    }

    #[test]
    fn test_pointer_while_closed_is_ignored() {
        let (mut gallery, surface) = gallery();
        assert_eq!(gallery.expanded_region(), None);
        assert_eq!(gallery.handle(click(1.0, 1.0)), Transition::Unchanged);
        assert_eq!(surface.writes(), 0);
    }

    #[test]
    fn test_select_title() {
        let (mut gallery, _) = gallery();
        assert_eq!(gallery.select_title("B"), Transition::Opened(EntryId(1)));
        assert_eq!(gallery.select_title("nope"), Transition::Unchanged);
        assert_eq!(gallery.active().unwrap().1.title, "B");
    }

    #[test]
    fn test_scene_follows_presence() {
        let (mut gallery, _) = gallery();
        assert!(gallery.scene().overlay.is_none());
        assert!(!gallery.scene().scroll_locked);

        gallery.select(EntryId(0));
        let scene = gallery.scene();
        assert!(scene.scroll_locked);
        assert_eq!(scene.overlay.as_ref().unwrap().phase, PresencePhase::Present);

        gallery.dismiss(DismissReason::CloseControl);
        assert!(gallery.is_exiting());
        let scene = gallery.scene();
        assert!(!scene.scroll_locked);
        assert_eq!(scene.overlay.as_ref().unwrap().phase, PresencePhase::Exiting);

        let token = gallery.exit_token().unwrap();
        let transition = gallery.handle(GalleryEvent::ExitComplete(token));
        assert_eq!(transition, Transition::ExitFinished(EntryId(0)));
        assert!(transition.is_change());
        assert!(gallery.scene().overlay.is_none());
    }

    #[test]
    fn test_late_exit_complete_keeps_newer_overlay() {
        let (mut gallery, _) = gallery();
        gallery.select(EntryId(0));
        gallery.dismiss(DismissReason::CloseControl);
        let first = gallery.exit_token().unwrap();

        gallery.select(EntryId(1));
        gallery.dismiss(DismissReason::CloseControl);
        let second = gallery.exit_token().unwrap();

        let transition = gallery.handle(GalleryEvent::ExitComplete(first));
        assert_eq!(transition, Transition::Unchanged);
        let scene = gallery.scene();
        let overlay = scene.overlay.as_ref().unwrap();
        assert_eq!(overlay.id, EntryId(1));
        assert_eq!(overlay.phase, PresencePhase::Exiting);

        let transition = gallery.handle(GalleryEvent::ExitComplete(second));
        assert_eq!(transition, Transition::ExitFinished(EntryId(1)));
        assert!(gallery.scene().overlay.is_none());
    }

    #[test]
    fn test_host_dismiss_reason() {
        let (mut gallery, surface) = gallery();
        gallery.select(EntryId(0));
        assert_eq!(
            gallery.dismiss(DismissReason::Host),
            Transition::Closed {
                id: EntryId(0),
                reason: DismissReason::Host
            }
        );
        assert!(surface.is_scrollable());
        assert!(gallery.is_exiting());
    }

    #[test]
    fn test_teardown_while_open() {
        let (mut gallery, surface) = gallery();
        gallery.select(EntryId(0));
        drop(gallery);
        assert!(surface.is_scrollable());
    }

    #[test]
    fn test_from_config_rejects_duplicates() {
        let entry = ShowcaseEntry::new("Same", ImageRef::new("s.png"), ImageRef::new("l.png"));
        let config = GalleryConfig {
            entries: vec![entry.clone(), entry],
            ..GalleryConfig::default()
        };
        let err = Gallery::from_config(config, ScrollLocker::new(MemorySurface::new())).unwrap_err();
        assert!(matches!(err, ConfigError::Catalog(_)));
    }

    #[test]
    fn test_builtin_gallery() {
        let gallery = Gallery::builtin(ScrollLocker::new(MemorySurface::new()));
        assert_eq!(gallery.catalog().len(), 5);
        assert_eq!(gallery.state(), GalleryState::Closed);
        assert_eq!(gallery.scene().grid.cells().count(), 5);
    }
}
