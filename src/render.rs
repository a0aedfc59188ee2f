//! Scene building for the gallery.
//!
//! A [`GalleryScene`] is a platform-agnostic description of what to draw:
//! the heading, the card grid and, when an entry is mounted, the expanded
//! overlay. Every element that takes part in the shared-element transition
//! carries its [`LayoutId`] and fades so an animation engine can pair the
//! grid cell with its overlay twin. [`GalleryScene::to_html`] turns the
//! scene into markup for DOM hosts.

use std::borrow::Cow;

use crate::animation::{Fade, InstanceId, LayoutId, LayoutPart, PresencePhase};
use crate::catalog::Catalog;
use crate::config::Heading;
use crate::data::{EntryId, ImageRef, ShowcaseEntry};
use crate::layout::{LayoutConfig, Rect, Viewport};

/// Correlation keys for every animated part of one entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardKeys {
    pub card: LayoutId,
    pub image: LayoutId,
    pub title: LayoutId,
    pub description: LayoutId,
    pub button: LayoutId,
}

impl CardKeys {
    pub fn new(title: &str, instance: InstanceId) -> Self {
        Self {
            card: LayoutId::new(LayoutPart::Card, title, instance),
            image: LayoutId::new(LayoutPart::Image, title, instance),
            title: LayoutId::new(LayoutPart::Title, title, instance),
            description: LayoutId::new(LayoutPart::Description, title, instance),
            button: LayoutId::new(LayoutPart::Button, title, instance),
        }
    }
}

/// One collapsed card in the grid.
#[derive(Clone, Debug)]
pub struct CardCell<'a> {
    pub id: EntryId,
    pub entry: &'a ShowcaseEntry,
    /// Cell position in the viewport
    pub rect: Rect,
    /// Edge of the square collapsed image
    pub image_size: f64,
    pub keys: CardKeys,
}

impl CardCell<'_> {
    #[inline]
    pub fn image(&self) -> &ImageRef {
        &self.entry.collapsed_image
    }
}

/// The card grid, in catalog order.
///
/// Cells are produced lazily; call [`GridView::cells`] again to walk the
/// grid from the start.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
    catalog: &'a Catalog,
    layout: &'a LayoutConfig,
    viewport: Viewport,
    instance: InstanceId,
}

impl<'a> GridView<'a> {
    pub fn new(
        catalog: &'a Catalog,
        layout: &'a LayoutConfig,
        viewport: Viewport,
        instance: InstanceId,
    ) -> Self {
        Self {
            catalog,
            layout,
            viewport,
            instance,
        }
    }

    /// Iterate the grid cells in display order.
    pub fn cells(&self) -> impl Iterator<Item = CardCell<'a>> + Clone + 'a {
        let layout = self.layout;
        let viewport = self.viewport;
        let instance = self.instance;
        self.catalog.iter().map(move |(id, entry)| CardCell {
            id,
            entry,
            rect: layout.cell_rect(id.index(), viewport),
            image_size: layout.collapsed_image_size,
            keys: CardKeys::new(&entry.title, instance),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Number of columns at the current viewport.
    pub fn columns(&self) -> usize {
        self.layout.columns_for(self.viewport)
    }

    /// Total grid height, heading included.
    pub fn height(&self) -> f64 {
        self.layout.grid_height(self.catalog.len(), self.viewport)
    }
}

/// Close control drawn in the overlay corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloseControl {
    pub rect: Rect,
    pub fade: Fade,
}

/// Image shown at the top of the expanded card.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpandedImage<'a> {
    pub image: &'a ImageRef,
    /// Display height in pixels
    pub height: f64,
    /// Ask the image loader to fetch this one first
    pub priority: bool,
}

/// The expanded card and its surroundings.
#[derive(Clone, Debug)]
pub struct OverlayView<'a> {
    pub id: EntryId,
    pub entry: &'a ShowcaseEntry,
    /// Present while open, exiting while the dismissal animation runs
    pub phase: PresencePhase,
    pub keys: CardKeys,
    /// Dimmed full-viewport layer behind the card
    pub backdrop: Fade,
    /// `None` where the control is hidden
    pub close: Option<CloseControl>,
    /// Expanded card bounds; pointer activity outside dismisses
    pub region: Rect,
    pub image: ExpandedImage<'a>,
    /// Body content, materialized for this render
    pub body: Cow<'a, str>,
    pub body_fade: Fade,
}

impl OverlayView<'_> {
    /// Check if the overlay should react to input.
    #[inline]
    pub fn is_interactive(&self) -> bool {
        self.phase == PresencePhase::Present
    }
}

/// Everything to draw for one frame of the gallery.
#[derive(Clone, Debug)]
pub struct GalleryScene<'a> {
    pub heading: &'a Heading,
    pub grid: GridView<'a>,
    pub overlay: Option<OverlayView<'a>>,
    /// Ambient scrolling is suppressed
    pub scroll_locked: bool,
}

/// Inputs for [`build_scene`].
#[derive(Clone, Copy, Debug)]
pub struct SceneInput<'a> {
    pub heading: &'a Heading,
    pub catalog: &'a Catalog,
    pub layout: &'a LayoutConfig,
    pub viewport: Viewport,
    pub instance: InstanceId,
    /// Mounted overlay entry and its phase
    pub presence: Option<(EntryId, PresencePhase)>,
    pub scroll_locked: bool,
}

/// Build the scene for the current gallery state.
///
/// The active entry's body is materialized here, so lazy producers run
/// once per call.
pub fn build_scene(input: SceneInput<'_>) -> GalleryScene<'_> {
    let _span = tracing::debug_span!(
        "gallery_scene",
        cells = input.catalog.len(),
        overlay = input.presence.is_some(),
        width = input.viewport.width,
        height = input.viewport.height
    )
    .entered();

    let overlay = input.presence.and_then(|(id, phase)| {
        let entry = input.catalog.get(id)?;
        Some(OverlayView {
            id,
            entry,
            phase,
            keys: CardKeys::new(&entry.title, input.instance),
            backdrop: Fade::standard(),
            close: input.layout.close_rect(input.viewport).map(|rect| CloseControl {
                rect,
                fade: Fade::close_control(),
            }),
            region: input.layout.modal_rect(input.viewport),
            image: ExpandedImage {
                image: &entry.expanded_image,
                height: input.layout.expanded_image_height_for(input.viewport),
                priority: true,
            },
            body: entry.body.materialize(),
            body_fade: Fade::standard(),
        })
    });

    GalleryScene {
        heading: input.heading,
        grid: GridView::new(input.catalog, input.layout, input.viewport, input.instance),
        overlay,
        scroll_locked: input.scroll_locked,
    }
}

impl GalleryScene<'_> {
    /// Render the scene as HTML.
    ///
    /// Interactive elements carry data attributes for event delegation:
    /// `data-entry` on grid cells, `data-gallery-close` on the close control
    /// and `data-gallery-region` on the expanded card.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(1024 + self.grid.len() * 512);

        out.push_str("<h1 class=\"gallery-heading\">");
        html_escape_into(&mut out, &self.heading.text);
        if let Some(highlight) = &self.heading.highlight {
            out.push_str("<span class=\"gallery-highlight\">");
            html_escape_into(&mut out, highlight);
            out.push_str("</span>");
        }
        out.push_str("</h1>");

        if let Some(overlay) = &self.overlay {
            write_overlay(&mut out, overlay);
        }

        out.push_str("<ul class=\"gallery-grid\">");
        for cell in self.grid.cells() {
            write_cell(&mut out, &cell);
        }
        out.push_str("</ul>");
        out
    }
}

fn phase_name(phase: PresencePhase) -> &'static str {
    match phase {
        PresencePhase::Present => "present",
        PresencePhase::Exiting => "exiting",
    }
}

fn write_fade(out: &mut String, fade: Fade, phase: PresencePhase) {
    out.push_str(&format!(" style=\"opacity:{}\"", fade.target(phase)));
    if let Some(duration) = fade.exit_duration {
        out.push_str(&format!(" data-exit-ms=\"{}\"", duration.as_millis()));
    }
}

fn write_layout_id(out: &mut String, id: &LayoutId) {
    out.push_str(" data-layout-id=\"");
    html_escape_into(out, &id.to_string());
    out.push('"');
}

fn write_image(out: &mut String, image: &ImageRef, alt: &str, priority: bool) {
    out.push_str("<img src=\"");
    html_escape_into(out, &image.src);
    out.push_str("\" alt=\"");
    html_escape_into(out, alt);
    out.push_str(&format!("\" width=\"{}\" height=\"{}\"", image.width, image.height));
    if priority {
        out.push_str(" fetchpriority=\"high\"");
    } else {
        out.push_str(" loading=\"lazy\"");
    }
    out.push('>');
}

fn write_text(out: &mut String, tag: &str, class: &str, id: &LayoutId, text: &str) {
    out.push_str(&format!("<{tag} class=\"{class}\""));
    write_layout_id(out, id);
    out.push('>');
    html_escape_into(out, text);
    out.push_str(&format!("</{tag}>"));
}

fn write_overlay(out: &mut String, overlay: &OverlayView<'_>) {
    let phase = phase_name(overlay.phase);

    out.push_str(&format!("<div class=\"gallery-backdrop\" data-phase=\"{phase}\""));
    write_fade(out, overlay.backdrop, overlay.phase);
    out.push_str("></div>");

    out.push_str(&format!("<div class=\"gallery-overlay\" data-phase=\"{phase}\">"));

    if let Some(close) = &overlay.close {
        out.push_str("<button type=\"button\" class=\"gallery-close\" data-gallery-close aria-label=\"Close\"");
        write_fade(out, close.fade, overlay.phase);
        out.push_str(">&times;</button>");
    }

    out.push_str("<div class=\"gallery-card gallery-card--expanded\" data-gallery-region");
    write_layout_id(out, &overlay.keys.card);
    out.push('>');

    out.push_str("<div class=\"gallery-card__image\"");
    write_layout_id(out, &overlay.keys.image);
    out.push('>');
    write_image(out, overlay.image.image, &overlay.entry.title, overlay.image.priority);
    out.push_str("</div>");

    out.push_str("<div class=\"gallery-card__header\"><div>");
    write_text(out, "h3", "gallery-card__title", &overlay.keys.title, &overlay.entry.title);
    if overlay.entry.has_description() {
        write_text(
            out,
            "p",
            "gallery-card__description",
            &overlay.keys.description,
            &overlay.entry.description,
        );
    }
    out.push_str("</div><a class=\"gallery-card__cta\"");
    write_layout_id(out, &overlay.keys.button);
    out.push_str(" href=\"");
    html_escape_into(out, &overlay.entry.cta_target);
    out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
    html_escape_into(out, &overlay.entry.cta_label);
    out.push_str("</a></div>");

    out.push_str("<div class=\"gallery-card__body\"");
    write_fade(out, overlay.body_fade, overlay.phase);
    out.push('>');
    if !overlay.body.is_empty() {
        out.push_str("<p>");
        html_escape_into(out, &overlay.body);
        out.push_str("</p>");
    }
    out.push_str("</div></div></div>");
}

fn write_cell(out: &mut String, cell: &CardCell<'_>) {
    out.push_str(&format!("<li class=\"gallery-card\" data-entry=\"{}\"", cell.id));
    write_layout_id(out, &cell.keys.card);
    out.push('>');

    out.push_str(&format!(
        "<div class=\"gallery-card__image\" style=\"width:{0}px;height:{0}px\"",
        cell.image_size
    ));
    write_layout_id(out, &cell.keys.image);
    out.push('>');
    write_image(out, cell.image(), &cell.entry.title, false);
    out.push_str("</div>");

    write_text(out, "h3", "gallery-card__title", &cell.keys.title, &cell.entry.title);
    if cell.entry.has_description() {
        write_text(
            out,
            "p",
            "gallery-card__description",
            &cell.keys.description,
            &cell.entry.description,
        );
    }
    out.push_str("<button type=\"button\" class=\"gallery-card__cta\"");
    write_layout_id(out, &cell.keys.button);
    out.push('>');
    html_escape_into(out, &cell.entry.cta_label);
    out.push_str("</button></li>");
}

/// HTML-escape a string into the output buffer.
fn html_escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::data::EntryBody;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            ShowcaseEntry::new("A", ImageRef::new("a.png"), ImageRef::new("a-big.png"))
                .description("first")
                .cta("View", "https://a.example")
                .body("About A"),
            ShowcaseEntry::new("B", ImageRef::new("b.png"), ImageRef::new("b-big.png"))
                .cta("View", "https://b.example"),
        ])
        .unwrap()
    }

    fn input<'a>(
        heading: &'a Heading,
        catalog: &'a Catalog,
        layout: &'a LayoutConfig,
        presence: Option<(EntryId, PresencePhase)>,
    ) -> SceneInput<'a> {
        SceneInput {
            heading,
            catalog,
            layout,
            viewport: Viewport::new(375.0, 700.0),
            instance: InstanceId::fixed(9),
            presence,
            scroll_locked: presence.is_some(),
        }
    }

    #[test]
    fn test_grid_cells_in_order_and_restartable() {
        let (heading, catalog, layout) = (Heading::default(), catalog(), LayoutConfig::default());
        let scene = build_scene(input(&heading, &catalog, &layout, None));

        let cells = scene.grid.cells();
        let titles: Vec<String> = cells.clone().map(|c| c.entry.title.clone()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        // Walking again yields the same cells
        assert_eq!(cells.count(), 2);
        assert_eq!(scene.grid.cells().count(), 2);

        let second = scene.grid.cells().nth(1).unwrap();
        assert_eq!(second.keys.card.to_string(), "card-B-9");
        assert_eq!(second.rect, layout.cell_rect(1, Viewport::new(375.0, 700.0)));
        assert_eq!(second.image_size, 128.0);
        assert_eq!(scene.grid.columns(), 2);
        assert!(scene.overlay.is_none());
    }

    #[test]
    fn test_overlay_pairs_keys_with_grid() {
        let (heading, catalog, layout) = (Heading::default(), catalog(), LayoutConfig::default());
        let scene = build_scene(input(
            &heading,
            &catalog,
            &layout,
            Some((EntryId(0), PresencePhase::Present)),
        ));

        let overlay = scene.overlay.as_ref().unwrap();
        let cell = scene.grid.cells().next().unwrap();
        assert_eq!(overlay.keys, cell.keys);
        assert!(overlay.image.priority);
        assert_eq!(overlay.image.height, 320.0);
        assert_eq!(overlay.body, "About A");
        assert!(overlay.close.is_some());
        assert!(overlay.is_interactive());
        assert_eq!(overlay.close.unwrap().fade.exit_duration.unwrap().as_millis(), 50);
    }

    #[test]
    fn test_lazy_body_invoked_per_render() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let catalog = Catalog::new(vec![ShowcaseEntry::new(
            "L",
            ImageRef::new("l.png"),
            ImageRef::new("l-big.png"),
        )
        .body(EntryBody::lazy(move || {
            counter.set(counter.get() + 1);
            "produced".to_string()
        }))])
        .unwrap();
        let (heading, layout) = (Heading::default(), LayoutConfig::default());

        let closed = build_scene(input(&heading, &catalog, &layout, None));
        assert_eq!(closed.grid.cells().count(), 1);
        assert_eq!(calls.get(), 0);

        let open = build_scene(input(
            &heading,
            &catalog,
            &layout,
            Some((EntryId(0), PresencePhase::Present)),
        ));
        assert_eq!(open.overlay.unwrap().body, "produced");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_lazy_and_static_bodies_render_identically() {
        let make = |body: EntryBody| {
            Catalog::new(vec![ShowcaseEntry::new(
                "X",
                ImageRef::new("x.png"),
                ImageRef::new("x-big.png"),
            )
            .body(body)])
            .unwrap()
        };
        let fixed = make(EntryBody::from("Same words"));
        let deferred = make(EntryBody::lazy(|| "Same words".to_string()));
        let (heading, layout) = (Heading::default(), LayoutConfig::default());
        let open = Some((EntryId(0), PresencePhase::Present));

        let a = build_scene(input(&heading, &fixed, &layout, open)).to_html();
        let b = build_scene(input(&heading, &deferred, &layout, open)).to_html();
        assert_eq!(a, b);
    }

    #[test]
    fn test_html_structure() {
        let (heading, catalog, layout) = (Heading::default(), catalog(), LayoutConfig::default());
        let html = build_scene(input(
            &heading,
            &catalog,
            &layout,
            Some((EntryId(0), PresencePhase::Present)),
        ))
        .to_html();

        assert!(html.starts_with("<h1 class=\"gallery-heading\">50+ STARTUPS"));
        assert!(html.contains("<span class=\"gallery-highlight\">JABAA 3.0</span>"));
        assert!(html.contains("data-gallery-region"));
        assert!(html.contains("data-gallery-close"));
        assert!(html.contains("data-exit-ms=\"50\""));
        assert!(html.contains("target=\"_blank\" rel=\"noopener noreferrer\""));
        assert!(html.contains("fetchpriority=\"high\""));
        assert!(html.contains("data-entry=\"1\""));
        assert!(html.contains("style=\"width:128px;height:128px\""));
        assert_eq!(html.matches("data-layout-id=\"card-A-9\"").count(), 2);
        // B has no description: no paragraph emitted for it
        assert!(!html.contains("description-B-9"));
    }

    #[test]
    fn test_exiting_overlay_targets_transparent() {
        let (heading, catalog, layout) = (Heading::default(), catalog(), LayoutConfig::default());
        let scene = build_scene(input(
            &heading,
            &catalog,
            &layout,
            Some((EntryId(1), PresencePhase::Exiting)),
        ));
        assert!(!scene.overlay.as_ref().unwrap().is_interactive());

        let html = scene.to_html();
        assert!(html.contains("data-phase=\"exiting\""));
        assert!(html.contains("style=\"opacity:0\""));
        // Empty body renders no paragraph
        assert!(html.contains("class=\"gallery-card__body\" style=\"opacity:0\"></div>"));
    }

    #[test]
    fn test_close_hidden_on_wide_viewport() {
        let (heading, catalog, layout) = (Heading::default(), catalog(), LayoutConfig::default());
        let mut scene_input = input(
            &heading,
            &catalog,
            &layout,
            Some((EntryId(0), PresencePhase::Present)),
        );
        scene_input.viewport = Viewport::new(1280.0, 800.0);
        let scene = build_scene(scene_input);
        let overlay = scene.overlay.as_ref().unwrap();
        assert!(overlay.close.is_none());
        assert_eq!(overlay.image.height, 240.0);
        assert!(!scene.to_html().contains("data-gallery-close"));
    }

    #[test]
    fn test_html_escaping() {
        let mut out = String::new();
        html_escape_into(&mut out, "<a href=\"x\">Tom & Jerry's</a>");
        assert_eq!(
            out,
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }
}
