//! GeoJSON output for the map renderer

use geojson::{Feature, FeatureCollection};
use serde_json::{Value as JsonValue, json};

use crate::Error;
use crate::model::{LatLon, PathSegment};

fn line_coordinates(points: &[LatLon]) -> JsonValue {
    points
        .iter()
        .map(|p| json!([p.longitude, p.latitude]))
        .collect()
}

fn to_feature(value: JsonValue) -> Result<Feature, Error> {
    Feature::from_json_value(value).map_err(|e| Error::InvalidData(e.to_string()))
}

/// Route polyline as a `LineString` feature
pub fn route_feature(path: &[LatLon], distance_meters: Option<f64>) -> Result<Feature, Error> {
    to_feature(json!({
        "type": "Feature",
        "geometry": {
            "type": "LineString",
            "coordinates": line_coordinates(path),
        },
        "properties": {
            "kind": "route",
            "points": path.len(),
            "distance_meters": distance_meters,
        }
    }))
}

/// Surveyed path segments with their rendering flags
pub fn segments_feature_collection(segments: &[PathSegment]) -> Result<FeatureCollection, Error> {
    let features = segments
        .iter()
        .enumerate()
        .map(|(idx, segment)| {
            to_feature(json!({
                "type": "Feature",
                "geometry": {
                    "type": "LineString",
                    "coordinates": line_coordinates(&segment.points),
                },
                "properties": {
                    "kind": "segment",
                    "segment_index": idx,
                    "is_road": segment.is_road,
                    "is_underground": segment.is_underground,
                    "is_arrow": segment.is_arrow,
                }
            }))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    })
}
