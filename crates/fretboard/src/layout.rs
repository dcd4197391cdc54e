//! The layout engine.
//!
//! [`compute_layout`] turns a fret range, a string count and a style into the
//! absolute geometry of the fretboard grid. The grid has a *string axis*
//! (across the strings) and a *fret axis* (along the strings). In portrait
//! orientation the string axis is horizontal; in landscape it is vertical and
//! the lowest string is drawn at the bottom.
//!
//! ```text
//!              string axis
//!            x ─────────────▶
//!          y ┌──┬──┬──┬──┬──┐  ◀ nut
//!   fret     ├──┼──┼──┼──┼──┤
//!   axis     ├──┼──┼──┼──┼──┤
//!     │      ├──┼──┼──┼──┼──┤
//!     ▼      └──┴──┴──┴──┴──┘
//! ```

use log::debug;

use fretboard_core::geometry::{Point, Size};

use crate::{
    error::FretboardError,
    model::FretRange,
    style::{Orientation, Style},
};

/// Absolute geometry of one render.
///
/// `width` always measures the horizontal extent of the grid and `height` the
/// vertical one, whatever the orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    string_space: f32,
    fret_space: f32,
    marker_radius: f32,
    nut_size: f32,
    orientation: Orientation,
    string_count: usize,
    padded_first: u32,
    padded_count: usize,
    canvas: Size,
}

/// Computes the layout of a fretboard grid.
///
/// # Errors
///
/// Returns [`FretboardError::InvalidLayout`] when there are fewer than two
/// strings or fewer than two fret lines, or when the style leaves no room for
/// the grid.
///
/// # Examples
///
/// ```
/// # use fretboard::{FretRange, Orientation, Style, compute_layout};
/// let layout = compute_layout(
///     FretRange::new(0, 4),
///     6,
///     Style::default_borrowed(),
///     false,
///     Orientation::Portrait,
/// )
/// .unwrap();
///
/// assert_eq!(layout.x(), 30.0);
/// assert_eq!(layout.string_space(), 48.0);
/// ```
pub fn compute_layout(
    frets: FretRange,
    string_count: usize,
    style: &Style,
    has_title: bool,
    orientation: Orientation,
) -> Result<Layout, FretboardError> {
    let padded_count = frets.padded_count();
    if string_count < 2 {
        return Err(FretboardError::InvalidLayout(format!(
            "a fretboard needs at least 2 strings, got {string_count}"
        )));
    }
    if padded_count < 2 {
        return Err(FretboardError::InvalidLayout(format!(
            "fret range {frets} renders {padded_count} fret line(s), at least 2 are needed"
        )));
    }

    let drawing = &style.drawing;
    let spacing = drawing.spacing;
    if !(spacing > 0.0) {
        return Err(FretboardError::InvalidLayout(format!(
            "spacing must be positive, got {spacing}"
        )));
    }

    let mut y = spacing;
    if has_title {
        y += spacing + style.title.font_size;
    }

    let nut_size = style.nut.size;
    let (x, width, height, canvas) = match orientation {
        Orientation::Portrait => {
            let x = spacing;
            let mut width = drawing.width - x - spacing;
            // Room on the right for the fret number.
            if !frets.starts_at_nut() {
                width -= spacing;
            }
            let height = drawing.height - y - spacing;
            (x, width, height, Size::new(drawing.width, drawing.height))
        }
        Orientation::Landscape => {
            let x = spacing + style.string.label_font_size;
            let width = drawing.height - x - spacing;
            let height = drawing.width - y - spacing;
            (x, width, height, Size::new(drawing.height, drawing.width))
        }
    };

    let (string_extent, fret_extent) = match orientation {
        Orientation::Portrait => (width, height),
        Orientation::Landscape => (height, width),
    };
    let fret_lines_extent = fret_extent - 2.0 * nut_size;
    if !(string_extent > 0.0) || !(fret_lines_extent > 0.0) {
        return Err(FretboardError::InvalidLayout(format!(
            "a {}x{} drawing leaves no room for the grid",
            drawing.width, drawing.height
        )));
    }

    let string_space = string_extent / (string_count - 1) as f32;
    let fret_space = fret_lines_extent / (padded_count - 1) as f32;

    let layout = Layout {
        x,
        y,
        width,
        height,
        string_space,
        fret_space,
        marker_radius: 0.3 * fret_space.min(string_space),
        nut_size,
        orientation,
        string_count,
        padded_first: frets.padded_first(),
        padded_count,
        canvas,
    };

    debug!(
        orientation:? = orientation,
        x = layout.x,
        y = layout.y,
        width = layout.width,
        height = layout.height,
        string_space = layout.string_space,
        fret_space = layout.fret_space,
        marker_radius = layout.marker_radius;
        "Layout computed"
    );

    Ok(layout)
}

impl Layout {
    /// Horizontal position of the grid's top left corner.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Vertical position of the grid's top left corner.
    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn string_space(&self) -> f32 {
        self.string_space
    }

    pub fn fret_space(&self) -> f32 {
        self.fret_space
    }

    pub fn marker_radius(&self) -> f32 {
        self.marker_radius
    }

    pub fn nut_size(&self) -> f32 {
        self.nut_size
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn string_count(&self) -> usize {
        self.string_count
    }

    pub fn padded_first(&self) -> u32 {
        self.padded_first
    }

    pub fn padded_count(&self) -> usize {
        self.padded_count
    }

    /// Size of the emitted document.
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Length of the grid along the string axis.
    pub fn string_axis_extent(&self) -> f32 {
        match self.orientation {
            Orientation::Portrait => self.width,
            Orientation::Landscape => self.height,
        }
    }

    /// Length of the grid along the fret axis, i.e. the length of a string.
    pub fn fret_axis_extent(&self) -> f32 {
        match self.orientation {
            Orientation::Portrait => self.height,
            Orientation::Landscape => self.width,
        }
    }

    /// Position of a string on the string axis, counted from the grid edge.
    pub fn display_index(&self, string: usize) -> usize {
        match self.orientation {
            Orientation::Portrait => string,
            Orientation::Landscape => self.string_count - string - 1,
        }
    }

    pub fn string_offset(&self, string: usize) -> f32 {
        self.string_space * self.display_index(string) as f32
    }

    /// Offset of the `index`-th fret line of the rendered window.
    pub fn fret_line_offset(&self, index: usize) -> f32 {
        self.nut_size + self.fret_space * index as f32
    }

    /// Offset of the middle of `fret`, between its line and the previous one.
    pub fn fret_center_offset(&self, fret: u32) -> f32 {
        let relative = fret as f32 - self.padded_first as f32;
        self.nut_size + self.fret_space * relative - self.fret_space / 2.0
    }

    /// Maps a string-axis offset and a fret-axis offset to a canvas point.
    pub fn point(&self, string_offset: f32, fret_offset: f32) -> Point {
        let local = Point::new(string_offset, fret_offset);
        let local = match self.orientation {
            Orientation::Portrait => local,
            Orientation::Landscape => local.transpose(),
        };
        local.offset(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::style::StyleOverride;

    fn layout(frets: FretRange, strings: usize, title: bool, orientation: Orientation) -> Layout {
        compute_layout(frets, strings, Style::default_borrowed(), title, orientation).unwrap()
    }

    #[test]
    fn test_portrait_from_nut() {
        let layout = layout(FretRange::new(0, 4), 6, false, Orientation::Portrait);

        assert_approx_eq!(f32, layout.x(), 30.0);
        assert_approx_eq!(f32, layout.y(), 30.0);
        assert_approx_eq!(f32, layout.width(), 240.0);
        assert_approx_eq!(f32, layout.height(), 340.0);
        assert_approx_eq!(f32, layout.string_space(), 48.0);
        assert_approx_eq!(f32, layout.fret_space(), 80.0);
        assert_approx_eq!(f32, layout.marker_radius(), 14.4);
        assert_eq!(layout.canvas(), Size::new(300.0, 400.0));
    }

    #[test]
    fn test_portrait_above_nut_reserves_fret_label_room() {
        let layout = layout(FretRange::new(5, 9), 6, false, Orientation::Portrait);

        assert_eq!(layout.padded_first(), 4);
        assert_eq!(layout.padded_count(), 6);
        assert_approx_eq!(f32, layout.width(), 210.0);
        assert_approx_eq!(f32, layout.string_space(), 42.0);
        assert_approx_eq!(f32, layout.fret_space(), 64.0);
    }

    #[test]
    fn test_title_pushes_grid_down() {
        let layout = layout(FretRange::new(0, 4), 6, true, Orientation::Portrait);

        assert_approx_eq!(f32, layout.y(), 90.0);
        assert_approx_eq!(f32, layout.height(), 280.0);
    }

    #[test]
    fn test_landscape_swaps_axes() {
        let layout = layout(FretRange::new(5, 8), 6, false, Orientation::Landscape);

        assert_approx_eq!(f32, layout.x(), 38.0);
        assert_approx_eq!(f32, layout.width(), 332.0);
        assert_approx_eq!(f32, layout.height(), 240.0);
        assert_approx_eq!(f32, layout.string_space(), 48.0);
        assert_approx_eq!(f32, layout.fret_space(), 78.0);
        assert_eq!(layout.canvas(), Size::new(400.0, 300.0));
    }

    #[test]
    fn test_landscape_reverses_strings() {
        let layout = layout(FretRange::new(0, 4), 4, false, Orientation::Landscape);

        assert_eq!(layout.display_index(0), 3);
        assert_eq!(layout.display_index(3), 0);
        assert_approx_eq!(f32, layout.string_offset(0), layout.string_axis_extent());

        let point = layout.point(layout.string_offset(0), 0.0);
        assert_approx_eq!(f32, point.x(), layout.x());
        assert_approx_eq!(f32, point.y(), layout.y() + layout.height());
    }

    #[test]
    fn test_fret_offsets() {
        let layout = layout(FretRange::new(5, 9), 6, false, Orientation::Portrait);

        assert_approx_eq!(f32, layout.fret_line_offset(0), 10.0);
        assert_approx_eq!(f32, layout.fret_line_offset(1), 74.0);
        // Fret 5 sits between lines 0 (fret 4) and 1 (fret 5).
        assert_approx_eq!(f32, layout.fret_center_offset(5), 42.0);
        assert_approx_eq!(f32, layout.fret_center_offset(9), 298.0);
    }

    #[test]
    fn test_rejects_single_string() {
        let err = compute_layout(
            FretRange::default(),
            1,
            Style::default_borrowed(),
            false,
            Orientation::Portrait,
        )
        .unwrap_err();
        assert!(matches!(err, FretboardError::InvalidLayout(_)));
    }

    #[test]
    fn test_rejects_single_fret_line() {
        let err = compute_layout(
            FretRange::new(0, 0),
            6,
            Style::default_borrowed(),
            false,
            Orientation::Portrait,
        )
        .unwrap_err();
        assert!(matches!(err, FretboardError::InvalidLayout(_)));
    }

    #[test]
    fn test_rejects_drawing_without_room() {
        let overrides: StyleOverride = toml::from_str("[drawing]\nwidth = 50\n").unwrap();
        let style = Style::default_borrowed().merged(&overrides).unwrap();

        let err = compute_layout(
            FretRange::new(3, 7),
            6,
            &style,
            false,
            Orientation::Portrait,
        )
        .unwrap_err();
        assert!(matches!(err, FretboardError::InvalidLayout(_)));
    }

    #[test]
    fn test_rejects_zero_spacing() {
        let mut style = Style::default();
        style.drawing.spacing = 0.0;

        let err = compute_layout(FretRange::default(), 6, &style, false, Orientation::Portrait)
            .unwrap_err();
        assert!(matches!(err, FretboardError::InvalidLayout(_)));
    }
}
