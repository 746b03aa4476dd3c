use super::{ShapeCodec, from_count, read_coordinates};
use crate::binary::{BinaryBuffer, BinaryParser};
use crate::error::{Operation, Result, ShapeError};
use crate::offsets::OffsetsReader;
use crate::types::{BBOX_PLACEHOLDER_DOUBLES, ShapeType};
use geo::{Geometry, LineString, MultiPolygon, Polygon, Winding};

/// Rings shorter than this are dropped before classification.
const MIN_RING_POINTS: usize = 3;

/// Read-only polygon codec.
///
/// Rings arrive as one flat stream, grouped shell, holes, next shell, ...
/// The first kept ring fixes the shell winding; a ring wound the other way
/// is a hole of the current shell, a ring wound the same way starts the next
/// polygon. Ring nesting is not checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolygonCodec;

struct PendingPolygon {
    shell: LineString<f64>,
    shell_ccw: bool,
    holes: Vec<LineString<f64>>,
}

impl PendingPolygon {
    fn finish(self) -> Polygon<f64> {
        Polygon::new(self.shell, self.holes)
    }
}

impl ShapeCodec for PolygonCodec {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Polygon
    }

    /// Polygons can be read from the engine but never written back.
    fn serialize(&self, _geometry: &Geometry<f64>, _buffer: &mut BinaryBuffer) -> Result<()> {
        Err(ShapeError::Unsupported {
            kind: ShapeType::Polygon,
            operation: Operation::Serialize,
        })
    }

    fn deserialize(&self, parser: &mut BinaryParser<'_>) -> Result<Geometry<f64>> {
        parser.skip_doubles(BBOX_PLACEHOLDER_DOUBLES)?;
        let num_rings = parser.read_int()?;
        let num_points = parser.read_int()?;
        from_count(num_rings, "ring count")?;
        from_count(num_points, "point count")?;

        let offsets = OffsetsReader::read_offsets(parser, num_rings, num_points)?;

        let mut polygons = Vec::new();
        let mut pending: Option<PendingPolygon> = None;

        for i in 0..num_rings as usize {
            let coords = read_coordinates(parser, OffsetsReader::part_len(&offsets, i))?;
            if coords.len() < MIN_RING_POINTS {
                log::debug!("Dropping degenerate ring {} with {} points", i, coords.len());
                continue;
            }

            let mut ring = LineString::new(coords);
            ring.close();
            let ring_ccw = ring.is_ccw();

            pending = match pending.take() {
                None => Some(PendingPolygon {
                    shell: ring,
                    shell_ccw: ring_ccw,
                    holes: Vec::new(),
                }),
                Some(mut current) if current.shell_ccw != ring_ccw => {
                    current.holes.push(ring);
                    Some(current)
                }
                Some(current) => {
                    polygons.push(current.finish());
                    Some(PendingPolygon {
                        shell: ring,
                        shell_ccw: ring_ccw,
                        holes: Vec::new(),
                    })
                }
            };
        }

        if let Some(current) = pending {
            polygons.push(current.finish());
        }

        if polygons.len() == 1 {
            Ok(Geometry::Polygon(polygons.remove(0)))
        } else {
            Ok(Geometry::MultiPolygon(MultiPolygon::new(polygons)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::write_bbox_placeholder;
    use geo::Coord;

    fn ccw_square(x: f64, y: f64, size: f64) -> Vec<(f64, f64)> {
        vec![
            (x, y),
            (x + size, y),
            (x + size, y + size),
            (x, y + size),
            (x, y),
        ]
    }

    fn cw_square(x: f64, y: f64, size: f64) -> Vec<(f64, f64)> {
        let mut ring = ccw_square(x, y, size);
        ring.reverse();
        ring
    }

    fn encode_rings(rings: &[Vec<(f64, f64)>]) -> bytes::Bytes {
        let mut buffer = BinaryBuffer::new();
        write_bbox_placeholder(&mut buffer);
        buffer.put_int(rings.len() as i32);
        buffer.put_int(rings.iter().map(|r| r.len() as i32).sum());
        let mut offset = 0;
        for ring in rings {
            buffer.put_int(offset);
            offset += ring.len() as i32;
        }
        for ring in rings {
            for (x, y) in ring {
                buffer.put_double(*x);
                buffer.put_double(*y);
            }
        }
        buffer.byte_array()
    }

    fn decode(rings: &[Vec<(f64, f64)>]) -> Geometry<f64> {
        let bytes = encode_rings(rings);
        let mut parser = BinaryParser::new(&bytes);
        let geometry = PolygonCodec.deserialize(&mut parser).unwrap();
        assert!(parser.is_empty());
        geometry
    }

    #[test]
    fn test_single_square_has_no_holes() {
        let square = vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        let Geometry::Polygon(polygon) = decode(&[square]) else {
            panic!("expected a polygon");
        };

        assert!(polygon.interiors().is_empty());
        assert_eq!(polygon.exterior().0.len(), 5);
        assert_eq!(polygon.exterior().0[2], Coord { x: 1.0, y: 1.0 });
    }

    #[test]
    fn test_winding_groups_rings_into_polygons() {
        let rings = vec![
            ccw_square(0.0, 0.0, 10.0),
            cw_square(1.0, 1.0, 2.0),
            cw_square(5.0, 5.0, 2.0),
            ccw_square(20.0, 0.0, 10.0),
            cw_square(21.0, 1.0, 2.0),
        ];
        let Geometry::MultiPolygon(multi) = decode(&rings) else {
            panic!("expected a multipolygon");
        };

        assert_eq!(multi.0.len(), 2);
        assert_eq!(multi.0[0].interiors().len(), 2);
        assert_eq!(multi.0[1].interiors().len(), 1);
        assert_eq!(multi.0[1].exterior().0[0], Coord { x: 20.0, y: 0.0 });
    }

    #[test]
    fn test_clockwise_shells_are_accepted() {
        let rings = vec![cw_square(0.0, 0.0, 10.0), ccw_square(1.0, 1.0, 2.0)];
        let Geometry::Polygon(polygon) = decode(&rings) else {
            panic!("expected a polygon");
        };
        assert_eq!(polygon.interiors().len(), 1);
    }

    #[test]
    fn test_degenerate_rings_dropped() {
        let rings = vec![
            vec![(0.0, 0.0), (1.0, 1.0)],
            ccw_square(0.0, 0.0, 10.0),
            vec![(3.0, 3.0)],
            cw_square(1.0, 1.0, 2.0),
        ];
        let Geometry::Polygon(polygon) = decode(&rings) else {
            panic!("expected a polygon");
        };

        assert_eq!(polygon.exterior().0[1], Coord { x: 10.0, y: 0.0 });
        assert_eq!(polygon.interiors().len(), 1);
        for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors()) {
            assert!(ring.0.len() >= 3);
        }
    }

    #[test]
    fn test_only_degenerate_rings_yield_empty_multipolygon() {
        let rings = vec![vec![(0.0, 0.0), (1.0, 1.0)]];
        assert_eq!(
            decode(&rings),
            Geometry::MultiPolygon(MultiPolygon::new(vec![]))
        );
    }

    fn decode_header(num_rings: i32, num_points: i32, offsets: &[i32]) -> Result<Geometry<f64>> {
        let mut buffer = BinaryBuffer::new();
        write_bbox_placeholder(&mut buffer);
        buffer.put_int(num_rings);
        buffer.put_int(num_points);
        for offset in offsets {
            buffer.put_int(*offset);
        }
        buffer.put_double(0.0);
        buffer.put_double(0.0);
        let bytes = buffer.byte_array();

        let mut parser = BinaryParser::new(&bytes);
        PolygonCodec.deserialize(&mut parser)
    }

    #[test]
    fn test_zero_rings_yield_empty_multipolygon() {
        assert_eq!(
            decode_header(0, 0, &[]).unwrap(),
            Geometry::MultiPolygon(MultiPolygon::new(vec![]))
        );
    }

    #[test]
    fn test_negative_counts_are_invalid() {
        assert!(matches!(
            decode_header(-1, 4, &[0]),
            Err(ShapeError::InvalidGeometry(_))
        ));
        assert!(matches!(
            decode_header(1, -4, &[0]),
            Err(ShapeError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_negative_ring_offset_is_invalid() {
        assert!(matches!(
            decode_header(1, 1, &[i32::MIN]),
            Err(ShapeError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_serialize_unsupported() {
        let exterior = LineString::from(ccw_square(0.0, 0.0, 1.0));
        let polygon = Geometry::Polygon(Polygon::new(exterior, vec![]));
        let mut buffer = BinaryBuffer::new();
        let err = PolygonCodec.serialize(&polygon, &mut buffer).unwrap_err();
        assert!(err.is_unsupported());
        assert!(buffer.is_empty());
    }
}
