use geo::{BoundingRect, Geometry, Rect};
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box.
///
/// Fields follow the engine's `(min_x, max_x, min_y, max_y)` order.
/// Equality is exact floating-point comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Envelope {
    /// Create an envelope; swapped bounds are reordered.
    ///
    /// # Examples
    ///
    /// ```
    /// use geospark_shape::Envelope;
    ///
    /// let env = Envelope::new(10.0, 0.0, -1.0, 1.0);
    /// assert_eq!(env.min_x(), 0.0);
    /// assert_eq!(env.max_x(), 10.0);
    /// ```
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x: min_x.min(max_x),
            max_x: min_x.max(max_x),
            min_y: min_y.min(max_y),
            max_y: min_y.max(max_y),
        }
    }

    /// Envelope of a geometry, or `None` when it has no coordinates.
    pub fn of(geometry: &Geometry<f64>) -> Option<Self> {
        geometry.bounding_rect().map(Self::from_rect)
    }

    /// Create an envelope from a `geo::Rect`.
    pub fn from_rect(rect: Rect<f64>) -> Self {
        Self::new(rect.min().x, rect.max().x, rect.min().y, rect.max().y)
    }

    /// Convert into a `geo::Rect`.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            geo::coord! { x: self.min_x, y: self.min_y },
            geo::coord! { x: self.max_x, y: self.max_y },
        )
    }

    /// Get the minimum x coordinate.
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Get the maximum x coordinate.
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Get the minimum y coordinate.
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Get the maximum y coordinate.
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Check if this envelope intersects another. Touching edges count.
    pub fn intersects(&self, other: &Envelope) -> bool {
        !(self.max_x < other.min_x
            || self.min_x > other.max_x
            || self.max_y < other.min_y
            || self.min_y > other.max_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{LineString, MultiPoint};

    #[test]
    fn test_envelope_of_line() {
        let line = LineString::from(vec![(1.0, 5.0), (-2.0, 3.0), (4.0, -1.0)]);
        let env = Envelope::of(&Geometry::LineString(line)).unwrap();

        assert_eq!(env, Envelope::new(-2.0, 4.0, -1.0, 5.0));
        assert_eq!(env.min_x(), -2.0);
        assert_eq!(env.max_y(), 5.0);
    }

    #[test]
    fn test_empty_geometry_has_no_envelope() {
        let empty = Geometry::MultiPoint(MultiPoint::<f64>::new(vec![]));
        assert!(Envelope::of(&empty).is_none());
    }

    #[test]
    fn test_intersects() {
        let a = Envelope::new(0.0, 10.0, 0.0, 10.0);
        let b = Envelope::new(10.0, 20.0, 5.0, 6.0);
        let c = Envelope::new(11.0, 20.0, 5.0, 6.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_rect_conversion() {
        let env = Envelope::new(-74.0479, -73.9067, 40.6829, 40.8820);
        assert_eq!(Envelope::from_rect(env.to_rect()), env);
    }
}
