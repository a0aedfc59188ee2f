//! Interaction state machine for the gallery.

use std::fmt;

use crate::animation::{ExitToken, Presence, PresencePhase};
use crate::data::EntryId;
use crate::layout::Point;
use crate::outside::OutsideClick;
use crate::scroll_lock::{ScrollLock, ScrollLocker};

/// Observable gallery state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GalleryState {
    /// No entry expanded
    #[default]
    Closed,
    /// The given entry is expanded in the overlay
    Open(EntryId),
}

/// Why the overlay was dismissed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissReason {
    /// Close control clicked
    CloseControl,
    /// Pointer activity outside the expanded region
    OutsideClick,
    /// Escape pressed
    Escape,
    /// Component torn down while open
    Teardown,
    /// Host code closed the overlay programmatically
    Host,
}

/// Keyboard input relevant to the gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    /// Anything else; always ignored
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// Outcome of feeding an input to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// `Closed -> Open(id)`
    Opened(EntryId),
    /// `Open(from) -> Open(to)` with no intermediate `Closed`
    Replaced { from: EntryId, to: EntryId },
    /// `Open(id) -> Closed`
    Closed { id: EntryId, reason: DismissReason },
    /// The exiting overlay for `id` finished its exit and was unmounted
    ExitFinished(EntryId),
    /// Input had no effect
    Unchanged,
}

impl Transition {
    /// Check if the state or the mounted overlay changed.
    #[inline]
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

enum Phase {
    Closed,
    // The lock lives exactly as long as the open phase.
    Open { id: EntryId, _lock: ScrollLock },
}

/// Platform-agnostic controller mapping user input to state transitions.
///
/// Opening acquires a [`ScrollLock`]; every way out of the open state drops
/// it, including dropping the controller itself. Replacing the active entry
/// keeps the lock held throughout.
///
/// ## Example
///
/// ```rust
/// use showcase_core_view::{
///     DismissReason, EntryId, GalleryController, GalleryState, Key, MemorySurface, ScrollLocker,
/// };
///
/// let surface = MemorySurface::new();
/// let mut controller = GalleryController::new(2, ScrollLocker::new(surface.clone()));
///
/// controller.select(EntryId(0));
/// assert_eq!(controller.state(), GalleryState::Open(EntryId(0)));
/// assert!(!surface.is_scrollable());
///
/// controller.on_key(Key::Escape);
/// assert_eq!(controller.state(), GalleryState::Closed);
/// assert!(surface.is_scrollable());
/// ```
pub struct GalleryController {
    entry_count: usize,
    locker: ScrollLocker,
    phase: Phase,
    presence: Presence<EntryId>,
}

impl GalleryController {
    /// Create a closed controller for a catalog of `entry_count` entries.
    pub fn new(entry_count: usize, locker: ScrollLocker) -> Self {
        Self {
            entry_count,
            locker,
            phase: Phase::Closed,
            presence: Presence::new(),
        }
    }

    /// Get the current state.
    pub fn state(&self) -> GalleryState {
        match &self.phase {
            Phase::Closed => GalleryState::Closed,
            Phase::Open { id, .. } => GalleryState::Open(*id),
        }
    }

    /// Active entry, if open.
    #[inline]
    pub fn active(&self) -> Option<EntryId> {
        match &self.phase {
            Phase::Closed => None,
            Phase::Open { id, .. } => Some(*id),
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Open { .. })
    }

    /// Locker shared with the scroll surface.
    #[inline]
    pub fn locker(&self) -> &ScrollLocker {
        &self.locker
    }

    /// Overlay currently mounted and its phase (present or exiting).
    pub fn presence(&self) -> Option<(EntryId, PresencePhase)> {
        self.presence.current().map(|(id, phase)| (*id, phase))
    }

    /// Expand an entry.
    ///
    /// Ids outside the catalog are ignored. Selecting the active entry is a
    /// no-op.
    pub fn select(&mut self, id: EntryId) -> Transition {
        if id.index() >= self.entry_count {
            tracing::warn!(%id, entries = self.entry_count, "ignoring selection of unknown entry");
            return Transition::Unchanged;
        }

        let transition = match &mut self.phase {
            Phase::Open { id: active, .. } if *active == id => return Transition::Unchanged,
            Phase::Open { id: active, .. } => {
                let from = *active;
                *active = id;
                Transition::Replaced { from, to: id }
            }
            Phase::Closed => {
                self.phase = Phase::Open {
                    id,
                    _lock: self.locker.acquire(),
                };
                Transition::Opened(id)
            }
        };

        self.presence.show(id);
        tracing::debug!(?transition, "gallery transition");
        transition
    }

    /// Collapse the overlay. No-op while closed.
    pub fn dismiss(&mut self, reason: DismissReason) -> Transition {
        match std::mem::replace(&mut self.phase, Phase::Closed) {
            Phase::Closed => Transition::Unchanged,
            Phase::Open { id, _lock: lock } => {
                drop(lock);
                if reason == DismissReason::Teardown {
                    self.presence.clear();
                } else {
                    self.presence.hide();
                }
                let transition = Transition::Closed { id, reason };
                tracing::debug!(?transition, "gallery transition");
                transition
            }
        }
    }

    /// Handle a key press. Only Escape does anything, and only while open.
    pub fn on_key(&mut self, key: Key) -> Transition {
        match key {
            Key::Escape => self.dismiss(DismissReason::Escape),
            Key::Other => Transition::Unchanged,
        }
    }

    /// Handle pointer activity, dismissing if it lands outside the region.
    pub fn on_pointer_down(&mut self, point: Point, detector: &OutsideClick) -> Transition {
        if self.is_open() && detector.is_outside(point) {
            self.dismiss(DismissReason::OutsideClick)
        } else {
            Transition::Unchanged
        }
    }

    /// Token of the overlay exit in progress, if any.
    #[inline]
    pub fn exit_token(&self) -> Option<ExitToken> {
        self.presence.exit_token()
    }

    /// Unmount an overlay whose exit animation completed.
    ///
    /// `token` must belong to the exit in progress; completions of earlier
    /// exits are ignored.
    pub fn finish_exit(&mut self, token: ExitToken) -> Transition {
        match self.presence.finish_exit(token) {
            Some(id) => {
                let transition = Transition::ExitFinished(id);
                tracing::debug!(?transition, "gallery transition");
                transition
            }
            None => Transition::Unchanged,
        }
    }
}

impl Drop for GalleryController {
    fn drop(&mut self) {
        self.dismiss(DismissReason::Teardown);
    }
}

impl fmt::Debug for GalleryController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryController")
            .field("entry_count", &self.entry_count)
            .field("state", &self.state())
            .field("presence", &self.presence)
            .finish()
    }
}
