//! Mapping from data coordinates to canvas pixels.

use log::debug;

use tierplot_core::{
    geometry::{Bounds, Point, Size},
    semantic::AxisRange,
};

use crate::{config::CanvasConfig, export};

/// Maps the diagram's axis ranges onto the plot area of the canvas.
///
/// Data x grows to the right, data y grows upward; canvas y grows downward,
/// so the y axis is flipped.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    canvas: Size,
    plot_area: Bounds,
    x_range: AxisRange,
    y_range: AxisRange,
}

impl Viewport {
    /// Creates a viewport for `canvas` showing the given ranges.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Viewport`] if the margins leave no plot area
    /// or an axis range is empty.
    pub fn new(
        canvas: &CanvasConfig,
        x_range: AxisRange,
        y_range: AxisRange,
    ) -> Result<Self, export::Error> {
        let canvas_size = Size::new(canvas.width(), canvas.height());
        let plot_area =
            Bounds::new_from_top_left(Point::default(), canvas_size).shrink(canvas.margins());

        if plot_area.width() <= 0.0 || plot_area.height() <= 0.0 {
            return Err(export::Error::Viewport(format!(
                "margins leave no plot area on a {}x{} canvas",
                canvas.width(),
                canvas.height()
            )));
        }
        if x_range.span() <= 0.0 || y_range.span() <= 0.0 {
            return Err(export::Error::Viewport(
                "axis ranges must not be empty".to_string(),
            ));
        }

        debug!(
            plot_width = plot_area.width(),
            plot_height = plot_area.height();
            "Viewport created"
        );

        Ok(Self {
            canvas: canvas_size,
            plot_area,
            x_range,
            y_range,
        })
    }

    pub fn canvas_size(&self) -> Size {
        self.canvas
    }

    pub fn plot_area(&self) -> Bounds {
        self.plot_area
    }

    /// Converts a data point to canvas pixels.
    pub fn to_canvas(&self, point: Point) -> Point {
        let x = self.plot_area.min_x() + self.x_range.fraction(point.x()) * self.plot_area.width();
        let y = self.plot_area.max_y() - self.y_range.fraction(point.y()) * self.plot_area.height();
        Point::new(x, y)
    }

    /// Converts the data rectangle spanned by two corners to canvas bounds.
    pub fn to_canvas_bounds(&self, a: Point, b: Point) -> Bounds {
        Bounds::from_corners(self.to_canvas(a), self.to_canvas(b))
    }
}
