use serde::Deserialize;

use crate::Error;
use crate::model::LatLon;

/// Parse a `"lat, lon"` pair as used in building outlines
pub fn parse_lat_lon(value: &str) -> Result<LatLon, Error> {
    let mut parts = value.split(',');
    let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(Error::InvalidData(format!(
            "Expected \"lat, lon\" coordinate, got {value:?}"
        )));
    };

    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| Error::InvalidData(format!("Invalid coordinate {value:?}")))
    };

    Ok(LatLon::new(parse(lat)?, parse(lon)?))
}

/// Building outlines arrive as a string holding a JSON array of `"lat, lon"` strings
pub(super) fn deserialize_outline<'de, D>(deserializer: D) -> Result<Vec<LatLon>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let pairs: Vec<String> = serde_json::from_str(&raw).map_err(serde::de::Error::custom)?;
    pairs
        .iter()
        .map(|pair| parse_lat_lon(pair))
        .collect::<Result<Vec<_>, _>>()
        .map_err(serde::de::Error::custom)
}

/// Segment points are `[lat, lon]` arrays
pub(super) fn deserialize_points<'de, D>(deserializer: D) -> Result<Vec<LatLon>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Vec::<[f64; 2]>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|[lat, lon]| LatLon::new(lat, lon))
        .collect())
}
