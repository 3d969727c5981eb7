use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{info, warn};

use super::raw_types::RawSnapshot;
use crate::Error;
use crate::model::{LocationFix, MapDataSnapshot};

fn open(path: &Path) -> Result<File, Error> {
    File::open(path).map_err(|e| {
        Error::IoError(std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        ))
    })
}

/// Parse a map data snapshot from its JSON representation
pub fn parse_snapshot(json: &str) -> Result<MapDataSnapshot, Error> {
    let raw: RawSnapshot = serde_json::from_str(json)?;
    Ok(raw.into())
}

/// Read a map data snapshot from a JSON file
pub fn read_snapshot(path: &Path) -> Result<MapDataSnapshot, Error> {
    let raw: RawSnapshot = serde_json::from_reader(BufReader::new(open(path)?))?;
    let snapshot = MapDataSnapshot::from(raw);
    info!(
        "Loaded map snapshot with {} nodes, {} buildings and {} segments from {}",
        snapshot.nodes.len(),
        snapshot.buildings.len(),
        snapshot.segments.len(),
        path.display()
    );
    Ok(snapshot)
}

/// Read recorded location fixes from CSV with a `latitude,longitude,timestamp` header.
///
/// Rows that fail to parse are skipped with a warning.
pub fn trace_from_reader<R: Read>(reader: R) -> Result<Vec<LocationFix>, Error> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut fixes = Vec::new();

    for (row, record) in reader.deserialize::<LocationFix>().enumerate() {
        match record {
            Ok(fix) => fixes.push(fix),
            Err(e) => warn!("Skipping location fix in row {}: {e}", row + 1),
        }
    }

    Ok(fixes)
}

/// Read recorded location fixes from a CSV file
pub fn read_trace(path: &Path) -> Result<Vec<LocationFix>, Error> {
    trace_from_reader(open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LatLon;

    const SNAPSHOT: &str = r#"{
        "nodes": [
            {"nodeID": 1, "latitude": 60.1, "longitude": 24.8},
            {"nodeID": 2, "latitude": 60.101, "longitude": 24.8, "description": ""},
            {"nodeID": 120, "latitude": 60.1005, "longitude": 24.803, "description": "Sauna"}
        ],
        "buildings": [
            {"buildingID": 5, "coordinates": "[\"60.1, 24.8\", \"60.1, 24.81\", \"60.11, 24.81\"]", "entrances": [2]}
        ],
        "apartments": [{"apartmentID": 51, "buildingID": 5}],
        "segments": [
            {"points": [[60.1, 24.8], [60.101, 24.8]], "isRoad": true}
        ]
    }"#;

    #[test]
    fn parses_snapshot_formats() {
        let snapshot = parse_snapshot(SNAPSHOT).unwrap();

        assert_eq!(snapshot.nodes.len(), 3);
        assert_eq!(snapshot.nodes[1].description, None);
        assert_eq!(snapshot.nodes[2].description.as_deref(), Some("Sauna"));

        let building = &snapshot.buildings[0];
        assert_eq!(building.polygon.len(), 3);
        assert_eq!(building.polygon[1], LatLon::new(60.1, 24.81));
        assert_eq!(building.entrance(), Some(2));

        assert_eq!(snapshot.apartments[0].building_id, 5);
        assert!(snapshot.segments[0].is_road);
        assert!(!snapshot.segments[0].is_arrow);
        assert_eq!(snapshot.segments[0].points[1], LatLon::new(60.101, 24.8));
    }

    #[test]
    fn malformed_outline_is_rejected() {
        let json = r#"{
            "nodes": [],
            "buildings": [{"buildingID": 5, "coordinates": "[\"60.1 24.8\"]"}]
        }"#;
        assert!(matches!(parse_snapshot(json), Err(Error::Json(_))));
    }

    #[test]
    fn reads_trace_and_skips_bad_rows() {
        let csv = "latitude,longitude,timestamp\n\
                   60.1,24.8,2026-05-01T10:00:00Z\n\
                   oops,24.8,2026-05-01T10:00:05Z\n\
                   60.1001, 24.8001, 2026-05-01T10:00:10Z\n";
        let fixes = trace_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(fixes.len(), 2);
        assert_eq!(fixes[1].position(), LatLon::new(60.1001, 24.8001));
        assert_eq!(
            (fixes[1].timestamp - fixes[0].timestamp).num_seconds(),
            10
        );
    }
}
