//! GeoJSON conversion for decoded geometries.

use crate::error::{Result, ShapeError};
use geo::Geometry;

/// Render a geometry as a GeoJSON geometry object.
///
/// ```
/// use geospark_shape::geojson::to_geojson;
/// use geo::{Geometry, Point};
///
/// let json = to_geojson(&Geometry::Point(Point::new(1.0, 2.0)))?;
/// assert!(json.contains("Point"));
/// # Ok::<(), geospark_shape::ShapeError>(())
/// ```
pub fn to_geojson(geometry: &Geometry<f64>) -> Result<String> {
    let value = ::geojson::Value::from(geometry);
    Ok(serde_json::to_string(&::geojson::Geometry::new(value))?)
}

/// Parse a GeoJSON geometry object.
pub fn from_geojson(json: &str) -> Result<Geometry<f64>> {
    let geometry: ::geojson::Geometry = serde_json::from_str(json)?;
    Geometry::<f64>::try_from(geometry)
        .map_err(|e| ShapeError::InvalidGeometry(format!("GeoJSON conversion failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{deserialize_geometry, serialize_geometry};
    use geo::{LineString, MultiLineString};

    #[test]
    fn test_decoded_record_to_geojson() {
        let lines = Geometry::MultiLineString(MultiLineString::new(vec![
            LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]),
            LineString::from(vec![(2.0, 2.0), (3.0, 3.0)]),
        ]));
        let bytes = serialize_geometry(&lines).unwrap();
        let decoded = deserialize_geometry(&bytes).unwrap();

        let json = to_geojson(&decoded).unwrap();
        assert!(json.contains("MultiLineString"));
        assert_eq!(from_geojson(&json).unwrap(), lines);
    }

    #[test]
    fn test_invalid_geojson() {
        assert!(from_geojson("{\"type\": \"Nope\"}").is_err());
    }
}
