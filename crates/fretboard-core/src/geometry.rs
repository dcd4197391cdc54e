//! Points and sizes in SVG user units.
//!
//! The origin is the top-left corner of the document; `x` grows to the right
//! and `y` grows downwards. Diagrams are drawn in a local frame where one axis
//! runs across the strings and the other along them. [`Point::transpose`] and
//! [`Size::transpose`] switch between the portrait and landscape frames.

/// A position in document coordinates.
///
/// ```
/// # use fretboard_core::geometry::Point;
/// // 48 units across the strings, 80 along them, from a grid origin at (30, 30)
/// let local = Point::new(48.0, 80.0);
/// assert_eq!(local.offset(30.0, 30.0), Point::new(78.0, 110.0));
/// assert_eq!(local.transpose(), Point::new(80.0, 48.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// Moves the point by `dx`, `dy`.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Swaps the two coordinates.
    pub fn transpose(self) -> Self {
        Self::new(self.y, self.x)
    }
}

/// Width and height of a canvas or shape.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Swaps width and height, turning a portrait canvas into a landscape one.
    ///
    /// ```
    /// # use fretboard_core::geometry::Size;
    /// let landscape = Size::new(300.0, 400.0).transpose();
    /// assert_eq!((landscape.width(), landscape.height()), (400.0, 300.0));
    /// ```
    pub fn transpose(self) -> Self {
        Self::new(self.height, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_default() {
        assert_eq!(Point::default(), Point::new(0.0, 0.0));
        assert_eq!(Size::default(), Size::new(0.0, 0.0));
    }

    #[test]
    fn test_offset_accumulates() {
        let nut_end = Point::new(0.0, 5.0).offset(30.0, 30.0).offset(240.0, 0.0);
        assert_eq!(nut_end.x(), 270.0);
        assert_eq!(nut_end.y(), 35.0);
    }

    #[test]
    fn test_transpose_twice_is_identity() {
        let point = Point::new(12.5, 90.0);
        let size = Size::new(120.0, 80.0);
        assert_eq!(point.transpose().transpose(), point);
        assert_eq!(size.transpose().transpose(), size);
    }
}
