//! Scoped suppression of ambient page scrolling.
//!
//! A [`ScrollLocker`] wraps the surface that actually scrolls (the document
//! body on the web) and hands out [`ScrollLock`] guards. Scrolling stays
//! disabled while at least one guard is alive and comes back when the last
//! one drops, so several overlays sharing one surface cannot re-enable it
//! under each other.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Overflow mode written to the scroll surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overflow {
    /// Normal scrolling
    #[default]
    Auto,
    /// Scrolling suppressed
    Hidden,
}

impl Overflow {
    /// CSS `overflow` value.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Hidden => "hidden",
        }
    }
}

/// Something whose scrolling can be switched on and off.
///
/// No `Send` bounds; surfaces live on the UI thread.
pub trait ScrollSurface {
    fn set_overflow(&self, overflow: Overflow);
}

/// In-memory surface for headless hosts and tests.
///
/// Clones share the same state, so a test can keep one handle and give the
/// other to a locker.
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    overflow: Rc<Cell<Overflow>>,
    writes: Rc<Cell<usize>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last overflow mode written.
    pub fn overflow(&self) -> Overflow {
        self.overflow.get()
    }

    /// Check if scrolling is currently enabled.
    pub fn is_scrollable(&self) -> bool {
        self.overflow.get() == Overflow::Auto
    }

    /// Number of writes seen so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ScrollSurface for MemorySurface {
    fn set_overflow(&self, overflow: Overflow) {
        self.overflow.set(overflow);
        self.writes.set(self.writes.get() + 1);
    }
}

struct LockState {
    surface: Box<dyn ScrollSurface>,
    holders: Cell<usize>,
}

impl LockState {
    fn release(&self) {
        let holders = self.holders.get().saturating_sub(1);
        self.holders.set(holders);
        if holders == 0 {
            tracing::debug!("scroll lock released");
            self.surface.set_overflow(Overflow::Auto);
        }
    }
}

/// Reference-counted owner of a scroll surface.
///
/// Cloning shares the counter; hand one clone to every gallery that draws
/// over the same page.
#[derive(Clone)]
pub struct ScrollLocker {
    state: Rc<LockState>,
}

impl ScrollLocker {
    pub fn new(surface: impl ScrollSurface + 'static) -> Self {
        Self {
            state: Rc::new(LockState {
                surface: Box::new(surface),
                holders: Cell::new(0),
            }),
        }
    }

    /// Disable scrolling until the returned guard is dropped.
    pub fn acquire(&self) -> ScrollLock {
        let holders = self.state.holders.get() + 1;
        self.state.holders.set(holders);
        if holders == 1 {
            tracing::debug!("scroll lock acquired");
            self.state.surface.set_overflow(Overflow::Hidden);
        }
        ScrollLock {
            state: Rc::clone(&self.state),
        }
    }

    /// Check if any guard is alive.
    pub fn is_locked(&self) -> bool {
        self.state.holders.get() > 0
    }

    /// Number of live guards.
    pub fn holders(&self) -> usize {
        self.state.holders.get()
    }
}

impl fmt::Debug for ScrollLocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLocker")
            .field("holders", &self.state.holders.get())
            .finish()
    }
}

/// Guard keeping scrolling disabled; dropping it releases the hold.
#[must_use = "scrolling is restored as soon as the lock is dropped"]
pub struct ScrollLock {
    state: Rc<LockState>,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.state.release();
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holders", &self.state.holders.get())
            .finish()
    }
}
