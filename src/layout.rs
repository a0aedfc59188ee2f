//! Responsive geometry for the card grid and the expanded overlay.

/// Viewport width at which the `sm` breakpoint starts.
pub const SM: f64 = 640.0;
/// Viewport width at which the `md` breakpoint starts.
pub const MD: f64 = 768.0;
/// Viewport width at which the `lg` breakpoint starts.
pub const LG: f64 = 1024.0;

/// A position in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point lies inside. Left/top edges are inclusive,
    /// right/bottom edges exclusive.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Size of the visible area the gallery is drawn into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Active responsive breakpoint.
    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::from_width(self.width)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// Responsive breakpoints, smallest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    Base,
    Sm,
    Md,
    Lg,
}

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        if width >= LG {
            Self::Lg
        } else if width >= MD {
            Self::Md
        } else if width >= SM {
            Self::Sm
        } else {
            Self::Base
        }
    }
}

/// Layout tuning for the grid and overlay.
///
/// Defaults reproduce the showcase page: two columns on small screens,
/// four from `lg` up, a 500px wide modal capped at 90% of the viewport
/// height from `md` up.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Grid columns below `lg`
    pub columns: usize,
    /// Grid columns from `lg` up
    pub wide_columns: usize,
    /// Gap between cells
    pub gap: f64,
    /// Maximum grid width; the grid is centered inside the viewport
    pub max_width: f64,
    /// Space above the grid taken by the heading
    pub grid_top: f64,
    /// Height of one grid cell
    pub cell_height: f64,
    /// Edge of the square collapsed image
    pub collapsed_image_size: f64,
    /// Maximum modal width
    pub modal_max_width: f64,
    /// Modal height cap as a fraction of the viewport height (from `md` up)
    pub modal_max_height_ratio: f64,
    /// Expanded image height below `lg`
    pub expanded_image_height: f64,
    /// Expanded image height from `lg` up
    pub expanded_image_height_wide: f64,
    /// Title/description/button row height in the modal
    pub modal_header_height: f64,
    /// Body area height in the modal
    pub modal_body_height: f64,
    /// Edge of the square close control
    pub close_size: f64,
    /// Close control inset from the top-right corner
    pub close_inset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: 2,
            wide_columns: 4,
            gap: 16.0,
            max_width: 1152.0,
            grid_top: 132.0,
            cell_height: 280.0,
            collapsed_image_size: 128.0,
            modal_max_width: 500.0,
            modal_max_height_ratio: 0.9,
            expanded_image_height: 320.0,
            expanded_image_height_wide: 240.0,
            modal_header_height: 96.0,
            modal_body_height: 216.0,
            close_size: 24.0,
            close_inset: 8.0,
        }
    }
}

impl LayoutConfig {
    /// Number of grid columns for a viewport.
    pub fn columns_for(&self, viewport: Viewport) -> usize {
        let columns = if viewport.breakpoint() >= Breakpoint::Lg {
            self.wide_columns
        } else {
            self.columns
        };
        columns.max(1)
    }

    /// Horizontal extent of the grid as `(x, width)`.
    pub fn grid_span(&self, viewport: Viewport) -> (f64, f64) {
        let width = viewport.width.min(self.max_width).max(0.0);
        ((viewport.width - width) / 2.0, width)
    }

    /// Rectangle of the grid cell at `index`.
    pub fn cell_rect(&self, index: usize, viewport: Viewport) -> Rect {
        let columns = self.columns_for(viewport);
        let (grid_x, grid_width) = self.grid_span(viewport);
        let gaps = self.gap * (columns - 1) as f64;
        let cell_width = ((grid_width - gaps) / columns as f64).max(0.0);

        let col = index % columns;
        let row = index / columns;
        Rect::new(
            grid_x + col as f64 * (cell_width + self.gap),
            self.grid_top + row as f64 * (self.cell_height + self.gap),
            cell_width,
            self.cell_height,
        )
    }

    /// Total height of the grid for `count` cells, heading included.
    pub fn grid_height(&self, count: usize, viewport: Viewport) -> f64 {
        if count == 0 {
            return self.grid_top;
        }
        let columns = self.columns_for(viewport);
        let rows = count.div_ceil(columns);
        self.grid_top + rows as f64 * self.cell_height + (rows - 1) as f64 * self.gap
    }

    /// Index of the cell under a point, if any.
    ///
    /// For hosts without their own hit testing (terminals, canvases).
    pub fn cell_at(&self, point: Point, count: usize, viewport: Viewport) -> Option<usize> {
        (0..count).find(|&index| self.cell_rect(index, viewport).contains(point))
    }

    /// Height of the expanded image.
    pub fn expanded_image_height_for(&self, viewport: Viewport) -> f64 {
        if viewport.breakpoint() >= Breakpoint::Lg {
            self.expanded_image_height_wide
        } else {
            self.expanded_image_height
        }
    }

    /// Natural height of the modal content before capping.
    pub fn modal_content_height(&self, viewport: Viewport) -> f64 {
        self.expanded_image_height_for(viewport) + self.modal_header_height + self.modal_body_height
    }

    /// Rectangle of the expanded modal; this is the outside-click region.
    ///
    /// Below `md` the modal fills the viewport height; from `md` up it fits
    /// its content, capped and vertically centered.
    pub fn modal_rect(&self, viewport: Viewport) -> Rect {
        let width = viewport.width.min(self.modal_max_width).max(0.0);
        let x = (viewport.width - width) / 2.0;

        if viewport.breakpoint() >= Breakpoint::Md {
            let cap = viewport.height * self.modal_max_height_ratio;
            let height = self.modal_content_height(viewport).min(cap).max(0.0);
            Rect::new(x, (viewport.height - height) / 2.0, width, height)
        } else {
            Rect::new(x, 0.0, width, viewport.height.max(0.0))
        }
    }

    /// Rectangle of the close control, `None` where it is hidden (`lg` up).
    pub fn close_rect(&self, viewport: Viewport) -> Option<Rect> {
        if viewport.breakpoint() >= Breakpoint::Lg {
            return None;
        }
        Some(Rect::new(
            viewport.width - self.close_inset - self.close_size,
            self.close_inset,
            self.close_size,
            self.close_size,
        ))
    }
}
