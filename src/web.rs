//! DOM binding for the gallery.
//!
//! [`mount`] renders a [`Gallery`] into a container element and wires the
//! listeners the component needs for as long as it is mounted:
//! - `keydown` on the window (Escape dismisses),
//! - `mousedown`/`touchstart` on the document (outside-click detection by
//!   DOM containment against the `data-gallery-region` element),
//! - `click` on the container (card selection and close control).
//!
//! Dropping the returned [`MountedGallery`] removes every listener and
//! tears the gallery down, which restores body scrolling.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent, Node, Window};

use crate::animation::ExitToken;
use crate::controller::{DismissReason, Key, Transition};
use crate::data::EntryId;
use crate::gallery::{Gallery, GalleryEvent};
use crate::layout::Viewport;
use crate::outside::PointerKind;
use crate::scroll_lock::{Overflow, ScrollSurface};

/// How long an exiting overlay stays mounted before it is removed.
pub const EXIT_SETTLE_MS: i32 = 300;

/// Error type for DOM binding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("failed to {0}")]
    Dom(&'static str),
}

/// The document body as a scroll surface.
#[derive(Clone, Debug)]
pub struct BodySurface {
    body: HtmlElement,
}

impl BodySurface {
    /// Use the body of the current document.
    pub fn from_document() -> Result<Self, WebError> {
        let document = document()?;
        let body = document.body().ok_or(WebError::NoBody)?;
        Ok(Self { body })
    }
}

impl ScrollSurface for BodySurface {
    fn set_overflow(&self, overflow: Overflow) {
        if self
            .body
            .style()
            .set_property("overflow", overflow.as_css())
            .is_err()
        {
            tracing::warn!(overflow = overflow.as_css(), "failed to set body overflow");
        }
    }
}

fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or(WebError::NoWindow)
}

fn document() -> Result<Document, WebError> {
    window()?.document().ok_or(WebError::NoDocument)
}

/// Current viewport size of the window.
pub fn viewport_of(window: &Window) -> Viewport {
    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport::new(dimension(window.inner_width()), dimension(window.inner_height()))
}

/// An event listener removed from its target on drop.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, WebError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(|_| WebError::Dom("add event listener"))?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!(kind = self.kind, "failed to remove event listener");
        }
    }
}

struct Shared {
    gallery: RefCell<Gallery>,
    container: Element,
}

impl Shared {
    fn render(&self) {
        let gallery = self.gallery.borrow();
        self.container.set_inner_html(&gallery.scene().to_html());
    }

    fn dispatch(self: &Rc<Self>, event: GalleryEvent) {
        let transition = self.gallery.borrow_mut().handle(event);
        self.apply(transition);
    }

    /// Redraw after `transition` and start the exit timer for a dismissal.
    fn apply(self: &Rc<Self>, transition: Transition) {
        if !transition.is_change() {
            return;
        }
        self.render();
        if let Transition::Closed { .. } = transition {
            let token = self.gallery.borrow().exit_token();
            if let Some(token) = token {
                self.schedule_exit(token);
            }
        }
    }

    fn schedule_exit(self: &Rc<Self>, token: ExitToken) {
        let shared = Rc::downgrade(self);
        let settle = Closure::once_into_js(move || {
            if let Some(shared) = shared.upgrade() {
                shared.dispatch(GalleryEvent::ExitComplete(token));
            }
        });
        let scheduled = web_sys::window().map(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(
                settle.unchecked_ref(),
                EXIT_SETTLE_MS,
            )
        });
        if !matches!(scheduled, Some(Ok(_))) {
            tracing::warn!("failed to schedule overlay exit");
        }
    }
}

/// A gallery mounted into the DOM; dropping it unmounts.
pub struct MountedGallery {
    // Listeners go first so no callback runs against a torn-down gallery.
    listeners: Vec<Listener>,
    shared: Rc<Shared>,
}

impl MountedGallery {
    /// Run `f` against the mounted gallery, then redraw.
    ///
    /// An overlay dismissed by `f` gets its exit timer like any other.
    pub fn update<R>(&self, f: impl FnOnce(&mut Gallery) -> R) -> R {
        let exiting = self.shared.gallery.borrow().exit_token();
        let result = f(&mut self.shared.gallery.borrow_mut());
        self.shared.render();
        let token = self.shared.gallery.borrow().exit_token();
        if let Some(token) = token.filter(|token| exiting != Some(*token)) {
            self.shared.schedule_exit(token);
        }
        result
    }

    /// Dismiss the overlay from host code.
    pub fn dismiss(&self) {
        let transition = self.shared.gallery.borrow_mut().dismiss(DismissReason::Host);
        self.shared.apply(transition);
    }
}

impl Drop for MountedGallery {
    fn drop(&mut self) {
        self.listeners.clear();
        self.shared
            .gallery
            .borrow_mut()
            .dismiss(DismissReason::Teardown);
        self.shared.container.set_inner_html("");
        tracing::debug!("gallery unmounted");
    }
}

fn entry_of(target: &Element) -> Option<EntryId> {
    let cell = target.closest("[data-entry]").ok().flatten()?;
    let index = cell.get_attribute("data-entry")?.parse().ok()?;
    Some(EntryId(index))
}

/// Mount `gallery` into `container` and wire its listeners.
///
/// The gallery should have been built with a locker over
/// [`BodySurface`] so opening it locks page scrolling.
pub fn mount(container: Element, mut gallery: Gallery) -> Result<MountedGallery, WebError> {
    let window = window()?;
    let document = window.document().ok_or(WebError::NoDocument)?;
    gallery.set_viewport(viewport_of(&window));

    let shared = Rc::new(Shared {
        gallery: RefCell::new(gallery),
        container: container.clone(),
    });
    shared.render();

    let listeners = match attach_listeners(&window, &document, &container, &shared) {
        Ok(listeners) => listeners,
        Err(err) => {
            container.set_inner_html("");
            return Err(err);
        }
    };

    tracing::debug!("gallery mounted");
    Ok(MountedGallery { listeners, shared })
}

fn attach_listeners(
    window: &Window,
    document: &Document,
    container: &Element,
    shared: &Rc<Shared>,
) -> Result<Vec<Listener>, WebError> {
    let mut listeners = Vec::with_capacity(5);

    let weak = Rc::downgrade(shared);
    listeners.push(Listener::attach(window.as_ref(), "keydown", move |event: Event| {
        let (Some(shared), Some(event)) = (weak.upgrade(), event.dyn_ref::<KeyboardEvent>()) else {
            return;
        };
        shared.dispatch(GalleryEvent::KeyDown(Key::from_name(&event.key())));
    })?);

    for (kind, pointer) in [("mousedown", PointerKind::Mouse), ("touchstart", PointerKind::Touch)] {
        let weak = Rc::downgrade(shared);
        listeners.push(Listener::attach(document.as_ref(), kind, move |event: Event| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            if !shared.gallery.borrow().is_open() {
                return;
            }
            let region = shared
                .container
                .query_selector("[data-gallery-region]")
                .ok()
                .flatten();
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = match (&region, &target) {
                (Some(region), Some(target)) => region.contains(Some(target)),
                _ => false,
            };
            if !inside {
                shared.dispatch(GalleryEvent::PointerOutside(pointer));
            }
        })?);
    }

    let weak = Rc::downgrade(shared);
    listeners.push(Listener::attach(container.as_ref(), "click", move |event: Event| {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if target.closest("[data-gallery-close]").ok().flatten().is_some() {
            shared.dispatch(GalleryEvent::CloseClicked);
        } else if let Some(id) = entry_of(&target) {
            shared.dispatch(GalleryEvent::CardClicked(id));
        }
    })?);

    let weak = Rc::downgrade(shared);
    let resize_window = window.clone();
    listeners.push(Listener::attach(window.as_ref(), "resize", move |_| {
        if let Some(shared) = weak.upgrade() {
            shared.gallery.borrow_mut().set_viewport(viewport_of(&resize_window));
            shared.render();
        }
    })?);

    Ok(listeners)
}
