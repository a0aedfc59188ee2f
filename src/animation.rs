//! Declarative animation bindings handed to an external animation engine.
//!
//! Nothing here interpolates anything. The engine receives:
//! - correlation keys pairing a grid element with its overlay counterpart
//!   so it can morph one into the other,
//! - enter/exit opacity declarations with optional timing hints,
//! - presence phases telling it which overlay is leaving and must stay
//!   mounted until its exit animation completes.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Exit duration hint for the overlay close control.
pub const CLOSE_CONTROL_EXIT: Duration = Duration::from_millis(50);

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Identifier unique to one gallery instance.
///
/// Appended to every correlation key so two galleries on the same page never
/// pair each other's elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Allocate a fresh process-unique id.
    pub fn next() -> Self {
        Self(NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed))
    }

    /// Use a fixed id (stable output for snapshots and server rendering).
    pub const fn fixed(id: u64) -> Self {
        Self(id)
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Element of a card that participates in the shared-element transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutPart {
    /// Whole card container
    Card,
    /// Card image
    Image,
    /// Title heading
    Title,
    /// Description paragraph
    Description,
    /// Call-to-action button
    Button,
}

impl LayoutPart {
    pub const ALL: [LayoutPart; 5] = [
        LayoutPart::Card,
        LayoutPart::Image,
        LayoutPart::Title,
        LayoutPart::Description,
        LayoutPart::Button,
    ];

    fn prefix(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Image => "image",
            Self::Title => "title",
            Self::Description => "description",
            Self::Button => "button",
        }
    }
}

/// Correlation key shared by a collapsed element and its expanded twin.
///
/// Renders as `{part}-{title}-{instance}`, e.g. `card-NET-R-3`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayoutId {
    part: LayoutPart,
    title: String,
    instance: InstanceId,
}

impl LayoutId {
    pub fn new(part: LayoutPart, title: &str, instance: InstanceId) -> Self {
        Self {
            part,
            title: title.to_string(),
            instance,
        }
    }

    #[inline]
    pub fn part(&self) -> LayoutPart {
        self.part
    }

    #[inline]
    pub fn instance(&self) -> InstanceId {
        self.instance
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.part.prefix(), self.title, self.instance.0)
    }
}

/// Opacity states for an element entering and leaving the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    /// Opacity when first mounted
    pub initial: f32,
    /// Opacity once settled
    pub animate: f32,
    /// Opacity at the end of the exit animation
    pub exit: f32,
    /// Exit duration hint; `None` leaves it to the engine
    pub exit_duration: Option<Duration>,
}

impl Fade {
    /// Fade in from transparent and back out, engine-default timing.
    pub const fn standard() -> Self {
        Self {
            initial: 0.0,
            animate: 1.0,
            exit: 0.0,
            exit_duration: None,
        }
    }

    /// Standard fade with a fixed exit duration.
    pub const fn with_exit(duration: Duration) -> Self {
        Self {
            exit_duration: Some(duration),
            ..Self::standard()
        }
    }

    /// Fade used by the overlay close control.
    pub const fn close_control() -> Self {
        Self::with_exit(CLOSE_CONTROL_EXIT)
    }

    /// Opacity the engine should aim for in the given phase.
    pub fn target(&self, phase: PresencePhase) -> f32 {
        match phase {
            PresencePhase::Present => self.animate,
            PresencePhase::Exiting => self.exit,
        }
    }
}

impl Default for Fade {
    fn default() -> Self {
        Self::standard()
    }
}

/// Lifecycle phase of an element that is still mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresencePhase {
    /// Shown (entering or settled)
    Present,
    /// Dismissed; kept mounted until the exit animation completes
    Exiting,
}

/// Identifies one exit started by [`Presence::hide`].
///
/// An exit-complete notification carries the token of the exit it was
/// scheduled for, so a late notification for an earlier overlay cannot
/// unmount a later one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExitToken(u64);

/// Tracks which value is mounted and whether it is on its way out.
///
/// ## Example
///
/// ```rust
/// use showcase_core_view::{Presence, PresencePhase};
///
/// let mut presence = Presence::new();
/// presence.show("A");
/// let token = presence.hide().unwrap();
/// assert_eq!(presence.current(), Some((&"A", PresencePhase::Exiting)));
///
/// presence.finish_exit(token);
/// assert_eq!(presence.current(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presence<T> {
    mounted: Option<(T, PresencePhase)>,
    exits: u64,
}

impl<T> Default for Presence<T> {
    fn default() -> Self {
        Self {
            mounted: None,
            exits: 0,
        }
    }
}

impl<T> Presence<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount `value`, replacing anything present or exiting.
    pub fn show(&mut self, value: T) {
        self.mounted = Some((value, PresencePhase::Present));
    }

    /// Start the exit of the mounted value.
    ///
    /// Returns the token to hand back to [`finish_exit`](Self::finish_exit),
    /// or `None` if nothing was present.
    pub fn hide(&mut self) -> Option<ExitToken> {
        match &mut self.mounted {
            Some((_, phase)) if *phase == PresencePhase::Present => {
                *phase = PresencePhase::Exiting;
                self.exits += 1;
                Some(ExitToken(self.exits))
            }
            _ => None,
        }
    }

    /// Token of the exit in progress, if any.
    pub fn exit_token(&self) -> Option<ExitToken> {
        self.is_exiting().then_some(ExitToken(self.exits))
    }

    /// Unmount a value whose exit animation completed.
    ///
    /// Returns the removed value. Tokens from earlier exits are ignored, as
    /// is a value that was shown again in the meantime.
    pub fn finish_exit(&mut self, token: ExitToken) -> Option<T> {
        if self.exit_token() != Some(token) {
            return None;
        }
        self.mounted.take().map(|(value, _)| value)
    }

    /// Drop the mounted value without an exit animation.
    pub fn clear(&mut self) {
        self.mounted = None;
    }

    /// Currently mounted value and its phase.
    pub fn current(&self) -> Option<(&T, PresencePhase)> {
        self.mounted.as_ref().map(|(value, phase)| (value, *phase))
    }

    #[inline]
    pub fn is_exiting(&self) -> bool {
        matches!(self.mounted, Some((_, PresencePhase::Exiting)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_id_format() {
        let id = LayoutId::new(LayoutPart::Card, "NET-R", InstanceId::fixed(7));
        assert_eq!(id.to_string(), "card-NET-R-7");

        let desc = LayoutId::new(LayoutPart::Description, "VISVASA", InstanceId::fixed(7));
        assert_eq!(desc.to_string(), "description-VISVASA-7");
    }

    #[test]
    fn test_keys_distinct_per_part_and_instance() {
        let a = InstanceId::fixed(1);
        let b = InstanceId::fixed(2);
        let keys: Vec<String> = LayoutPart::ALL
            .iter()
            .map(|part| LayoutId::new(*part, "A", a).to_string())
            .collect();
        for (i, left) in keys.iter().enumerate() {
            for right in &keys[i + 1..] {
                assert_ne!(left, right);
            }
        }
        assert_ne!(
            LayoutId::new(LayoutPart::Card, "A", a),
            LayoutId::new(LayoutPart::Card, "A", b)
        );
    }

    #[test]
    fn test_instance_ids_unique() {
        let first = InstanceId::next();
        let second = InstanceId::next();
        assert_ne!(first, second);
    }

    #[test]
    fn test_close_control_fade() {
        let fade = Fade::close_control();
        assert_eq!(fade.exit_duration, Some(Duration::from_millis(50)));
        assert_eq!(fade.target(PresencePhase::Present), 1.0);
        assert_eq!(fade.target(PresencePhase::Exiting), 0.0);
        assert_eq!(Fade::standard().exit_duration, None);
    }

    #[test]
    fn test_presence_lifecycle() {
        let mut presence = Presence::new();
        assert_eq!(presence.hide(), None);
        assert_eq!(presence.exit_token(), None);

        presence.show(1);
        assert_eq!(presence.current(), Some((&1, PresencePhase::Present)));

        let token = presence.hide().unwrap();
        assert!(presence.is_exiting());
        assert_eq!(presence.exit_token(), Some(token));
        assert_eq!(presence.hide(), None);

        assert_eq!(presence.finish_exit(token), Some(1));
        assert_eq!(presence.current(), None);
        assert_eq!(presence.finish_exit(token), None);
    }

    #[test]
    fn test_show_during_exit_replaces() {
        let mut presence = Presence::new();
        presence.show(1);
        let token = presence.hide().unwrap();
        presence.show(2);
        assert_eq!(presence.current(), Some((&2, PresencePhase::Present)));
        assert_eq!(presence.finish_exit(token), None);
        assert_eq!(presence.current(), Some((&2, PresencePhase::Present)));
    }

    #[test]
    fn test_stale_exit_ignored_during_later_exit() {
        let mut presence = Presence::new();
        presence.show(1);
        let first = presence.hide().unwrap();
        presence.show(2);
        let second = presence.hide().unwrap();
        assert_ne!(first, second);

        assert_eq!(presence.finish_exit(first), None);
        assert_eq!(presence.current(), Some((&2, PresencePhase::Exiting)));

        assert_eq!(presence.finish_exit(second), Some(2));
        assert_eq!(presence.current(), None);
    }
}
