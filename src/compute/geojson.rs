//! GeoJSON conversion for quads.
//!
//! A quad becomes a `Feature` whose geometry is its bounds polygon and whose
//! properties carry its name, zoom and value.

use crate::error::{Result, ZQuadError};
use crate::quad::ZQuad;
use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde_json::Map;

fn bounds_geometry(quad: &ZQuad) -> Geometry {
    let bounds = quad.bounds();
    let (min, max) = (bounds.min(), bounds.max());
    let ring = vec![
        vec![min.x, max.y],
        vec![max.x, max.y],
        vec![max.x, min.y],
        vec![min.x, min.y],
        vec![min.x, max.y],
    ];
    Geometry::new(Value::Polygon(vec![ring]))
}

/// Converts a quad to a GeoJSON Feature.
pub fn quad_to_feature(quad: &ZQuad) -> Feature {
    let mut props = Map::new();
    props.insert("name".to_string(), quad.name().into());
    props.insert("zoom".to_string(), quad.zoom().into());
    props.insert("value".to_string(), quad.value().into());

    Feature {
        bbox: None,
        geometry: Some(bounds_geometry(quad)),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

/// Converts a quad to a GeoJSON Feature string.
pub fn quad_to_geojson(quad: &ZQuad) -> Result<String> {
    serde_json::to_string(&quad_to_feature(quad)).map_err(|e| {
        ZQuadError::SerializationError(format!("Failed to serialize feature: {}", e))
    })
}

/// Converts multiple quads to a GeoJSON FeatureCollection string.
pub fn quads_to_feature_collection(quads: &[ZQuad]) -> Result<String> {
    let collection = FeatureCollection {
        bbox: None,
        features: quads.iter().map(quad_to_feature).collect(),
        foreign_members: None,
    };

    serde_json::to_string(&collection).map_err(|e| {
        ZQuadError::SerializationError(format!(
            "Failed to serialize feature collection: {}",
            e
        ))
    })
}

/// Parses a GeoJSON Feature produced by [`quad_to_geojson`] back into its
/// quad, from the `value` property.
pub fn quad_from_geojson(geojson: &str) -> Result<ZQuad> {
    let feature: Feature = serde_json::from_str(geojson)
        .map_err(|e| ZQuadError::InvalidInput(format!("Failed to parse GeoJSON: {}", e)))?;

    let value = feature
        .property("value")
        .and_then(serde_json::Value::as_u64)
        .ok_or_else(|| {
            ZQuadError::InvalidInput("Feature has no integer \"value\" property".to_string())
        })?;
    let quad = ZQuad::from_value(value)?;

    if let Some(zoom) = feature.property("zoom").and_then(serde_json::Value::as_u64)
        && zoom != quad.zoom() as u64
    {
        return Err(ZQuadError::InvalidInput(format!(
            "Feature zoom {} does not match quad {}",
            zoom, value
        )));
    }

    Ok(quad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_to_geojson() {
        let quad = ZQuad::from_value(4).unwrap();
        let json = quad_to_geojson(&quad).unwrap();

        assert!(json.contains("Feature"));
        assert!(json.contains("Polygon"));
        assert!(json.contains(&format!("\"name\":\"{}\"", quad.name())));
        assert!(json.contains("\"zoom\":1"));
    }

    #[test]
    fn test_bounds_ring_is_closed() {
        let quad = ZQuad::from_value(1).unwrap();
        let feature = quad_to_feature(&quad);
        let Some(Value::Polygon(rings)) = feature.geometry.map(|g| g.value) else {
            panic!("expected a polygon");
        };
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].first(), rings[0].last());
        assert_eq!(rings[0][0], vec![-180.0, 90.0]);
        assert_eq!(rings[0][2], vec![0.0, 0.0]);
    }

    #[test]
    fn test_roundtrip() {
        let quad = ZQuad::from_wgs84(48.8566, 2.3522).unwrap().to_zoom(15).unwrap();
        let json = quad_to_geojson(&quad).unwrap();
        assert_eq!(quad_from_geojson(&json).unwrap(), quad);
    }

    #[test]
    fn test_from_geojson_rejects_bad_input() {
        assert!(quad_from_geojson("not json").is_err());
        let no_value = r#"{"type":"Feature","geometry":null,"properties":{}}"#;
        assert!(quad_from_geojson(no_value).is_err());
        let mismatch = r#"{"type":"Feature","geometry":null,"properties":{"value":5,"zoom":1}}"#;
        assert!(quad_from_geojson(mismatch).is_err());
    }

    #[test]
    fn test_feature_collection() {
        let quads = ZQuad::ROOT.children().unwrap();
        let json = quads_to_feature_collection(&quads).unwrap();

        assert!(json.contains("FeatureCollection"));
        assert_eq!(json.matches("\"type\":\"Feature\"").count(), 4);
    }
}
