use serde::Serialize;

/// A screen rectangle (e.g. the taskbar's bounds).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from Win32-style edges.
    ///
    /// Swapped edges are normalized so `right() >= x` and
    /// `bottom() >= y` always hold.
    pub fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        let (l, r) = if right < left { (right, left) } else { (left, right) };
        let (t, b) = if bottom < top { (bottom, top) } else { (top, bottom) };
        Self::new(l, t, r.saturating_sub(l), b.saturating_sub(t))
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Returns whether the rectangle has no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Width and height in screen units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ltrb_computes_size() {
        // Act
        let rect = Rect::from_ltrb(0, 1040, 1920, 1080);

        // Assert
        assert_eq!(rect, Rect::new(0, 1040, 1920, 40));
        assert_eq!(rect.right(), 1920);
        assert_eq!(rect.bottom(), 1080);
    }

    #[test]
    fn from_ltrb_normalizes_swapped_edges() {
        // Act
        let rect = Rect::from_ltrb(100, 50, 20, 10);

        // Assert
        assert_eq!(rect, Rect::new(20, 10, 80, 40));
        assert!(rect.right() >= rect.x);
        assert!(rect.bottom() >= rect.y);
    }

    #[test]
    fn from_ltrb_saturates_extreme_spans() {
        // Act
        let rect = Rect::from_ltrb(i32::MIN, 0, i32::MAX, 10);

        // Assert
        assert_eq!(rect.x, i32::MIN);
        assert_eq!(rect.width, i32::MAX);
        assert_eq!(rect.height, 10);
    }

    #[test]
    fn zero_rect_is_empty() {
        assert!(Rect::default().is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }
}
