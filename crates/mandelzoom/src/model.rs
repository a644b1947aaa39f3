//! View state and the concrete window of the complex plane it resolves to.

use crate::errors::ViewError;
use std::fmt;

type Result<T> = std::result::Result<T, ViewError>;

/// Height of the sampled window, in plane units, at zoom 1.
pub const BASE_SPAN: f64 = 3.5;

/// Factor applied to the zoom on every zoom-in (and divided out on every zoom-out).
pub const ZOOM_STEP: f64 = 2.0;

/// Logical view: where we look and how closely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub center_x: f64,
    pub center_y: f64,
    pub zoom: f64,
}

impl Default for View {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl View {
    pub const INITIAL: Self = Self::new(-0.5, 0.0, 1.0);

    pub const fn new(center_x: f64, center_y: f64, zoom: f64) -> Self {
        Self {
            center_x,
            center_y,
            zoom,
        }
    }

    /// Recentre on `(x, y)` and double the zoom.
    pub fn zoom_in_at(&self, x: f64, y: f64) -> Self {
        Self::new(x, y, self.zoom * ZOOM_STEP)
    }

    /// Recentre on `(x, y)` and halve the zoom.
    pub fn zoom_out_at(&self, x: f64, y: f64) -> Self {
        Self::new(x, y, self.zoom / ZOOM_STEP)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            return Err(ViewError::NonPositiveZoom(self.zoom));
        }
        if !self.center_x.is_finite() || !self.center_y.is_finite() {
            return Err(ViewError::NonFiniteCenter(self.center_x, self.center_y));
        }
        Ok(())
    }

    /// Resolve the rectangle of the plane covered by a `width` x `height` raster.
    ///
    /// The window is `BASE_SPAN / zoom` tall and as wide as the raster aspect ratio requires,
    /// centred on the view centre.
    pub fn window(&self, width: u32, height: u32) -> Result<ViewWindow> {
        self.validate()?;
        if width == 0 || height == 0 {
            return Err(ViewError::EmptyGrid { width, height });
        }

        let half_height = BASE_SPAN / self.zoom / 2.0;
        let half_width = half_height * (width as f64 / height as f64);

        Ok(ViewWindow {
            view: *self,
            width,
            height,
            x_range: (self.center_x - half_width, self.center_x + half_width),
            y_range: (self.center_y - half_height, self.center_y + half_height),
        })
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.6}, {:.6}) @ {:.1}x",
            self.center_x, self.center_y, self.zoom
        )
    }
}

/// A view resolved against a raster size: what actually gets sampled and drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    pub view: View,
    pub width: u32,
    pub height: u32,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl ViewWindow {
    pub fn x_samples(&self) -> impl Iterator<Item = f64> + Clone {
        linspace(self.x_range.0, self.x_range.1, self.width)
    }

    pub fn y_samples(&self) -> impl Iterator<Item = f64> + Clone {
        linspace(self.y_range.0, self.y_range.1, self.height)
    }

    /// Map raster coordinates (column from the left, row from the top) to the plane.
    ///
    /// Row 0 is the top edge of the raster, i.e. the upper end of the imaginary range.
    pub fn pixel_to_plane(&self, col: f64, row: f64) -> (f64, f64) {
        let x = lerp(self.x_range.0, self.x_range.1, col, self.width);
        let y = lerp(self.y_range.1, self.y_range.0, row, self.height);
        (x, y)
    }
}

/// `count` evenly spaced values from `start` to `end`, both ends included.
pub fn linspace(start: f64, end: f64, count: u32) -> impl Iterator<Item = f64> + Clone {
    (0..count).map(move |i| lerp(start, end, i as f64, count))
}

fn lerp(start: f64, end: f64, index: f64, count: u32) -> f64 {
    if count < 2 {
        return start;
    }
    let step = (end - start) / (count - 1) as f64;
    start + index * step
}

/// How many iterations a view gets: `min(base + floor(zoom * per_zoom), cap)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationPolicy {
    pub base: u32,
    pub per_zoom: u32,
    pub cap: u32,
}

impl Default for IterationPolicy {
    fn default() -> Self {
        Self {
            base: 100,
            per_zoom: 20,
            cap: 500,
        }
    }
}

impl IterationPolicy {
    pub fn max_iter(&self, zoom: f64) -> u32 {
        let extra = (zoom * self.per_zoom as f64).floor();
        // saturating float -> int cast keeps huge zooms at the cap
        let budget = (self.base as f64 + extra.max(0.0)) as u32;
        budget.min(self.cap).max(1)
    }
}
