use std::path::Path;

use log::debug;
use serde_json::Value as JsonValue;

use super::model::{BoundaryDocument, BoundaryFeature, VolcanoRecord};
use crate::error::MapError;

/// Property on each boundary feature holding the population count.
const POPULATION_PROPERTY: &str = "POP2005";

// ---------------------------------------------------------------------------
// Volcano file (CSV) loader
// ---------------------------------------------------------------------------

/// Load volcano records from a comma-delimited file.
///
/// Layout: one header row naming columns, then one record per row. The
/// required columns `LAT`, `LON` and `ELEV` are matched case-insensitively;
/// any other columns are ignored. Records are yielded in file order.
///
/// The loader has no partial-row recovery: a missing required column or a
/// non-numeric field aborts the whole load.
pub fn load_volcanoes(path: &Path) -> Result<Vec<VolcanoRecord>, MapError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| match e.into_kind() {
        csv::ErrorKind::Io(io) => MapError::from_io(path, io),
        other => MapError::Malformed {
            file: path.to_path_buf(),
            reason: format!("{other:?}"),
        },
    })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| MapError::Malformed {
            file: path.to_path_buf(),
            reason: format!("unreadable header row: {e}"),
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let lat_idx = find_column(&headers, "LAT", path)?;
    let lon_idx = find_column(&headers, "LON", path)?;
    let elev_idx = find_column(&headers, "ELEV", path)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        // 1-based data-row numbering in diagnostics, header excluded.
        let row = row_no + 1;
        let record = result.map_err(|e| MapError::Malformed {
            file: path.to_path_buf(),
            reason: format!("row {row}: {e}"),
        })?;

        records.push(VolcanoRecord {
            latitude: parse_field(&record, lat_idx, &headers[lat_idx], row, path)?,
            longitude: parse_field(&record, lon_idx, &headers[lon_idx], row, path)?,
            elevation: parse_field(&record, elev_idx, &headers[elev_idx], row, path)?,
        });
    }

    debug!("loaded {} volcano records from {}", records.len(), path.display());
    Ok(records)
}

fn find_column(headers: &[String], name: &str, path: &Path) -> Result<usize, MapError> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| MapError::MissingColumn {
            file: path.to_path_buf(),
            column: name.to_string(),
        })
}

fn parse_field(
    record: &csv::StringRecord,
    idx: usize,
    column: &str,
    row: usize,
    path: &Path,
) -> Result<f64, MapError> {
    let raw = record.get(idx).unwrap_or("").trim();
    // Non-finite values must never reach the classifier, so NaN/inf strings
    // are rejected here alongside plain parse failures.
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(MapError::ValueParse {
            file: path.to_path_buf(),
            row,
            column: column.to_string(),
            value: raw.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Boundary document (GeoJSON) loader
// ---------------------------------------------------------------------------

/// Load the world boundary document.
///
/// Expects a GeoJSON FeatureCollection where every feature carries a numeric
/// `POP2005` property. The geometry of each feature is kept verbatim; only
/// the population (and the optional `NAME`) are interpreted. The canonical
/// source file starts with a UTF-8 BOM, which is tolerated.
pub fn load_boundaries(path: &Path) -> Result<BoundaryDocument, MapError> {
    let text = std::fs::read_to_string(path).map_err(|e| MapError::from_io(path, e))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let root: JsonValue = serde_json::from_str(text).map_err(|e| MapError::Json {
        file: path.to_path_buf(),
        source: e,
    })?;

    let raw_features = root
        .get("features")
        .and_then(JsonValue::as_array)
        .ok_or_else(|| MapError::Malformed {
            file: path.to_path_buf(),
            reason: "missing top-level 'features' array".to_string(),
        })?;

    let mut features = Vec::with_capacity(raw_features.len());

    for (index, feature) in raw_features.iter().enumerate() {
        let properties = feature.get("properties");

        let population = properties
            .and_then(|p| p.get(POPULATION_PROPERTY))
            .and_then(JsonValue::as_f64)
            .ok_or_else(|| MapError::MissingProperty {
                file: path.to_path_buf(),
                index,
                property: POPULATION_PROPERTY.to_string(),
            })?;

        let name = properties
            .and_then(|p| p.get("NAME"))
            .and_then(JsonValue::as_str)
            .map(str::to_string);

        features.push(BoundaryFeature {
            name,
            population,
            geometry: feature.get("geometry").cloned().unwrap_or(JsonValue::Null),
        });
    }

    debug!("loaded {} boundary features from {}", features.len(), path.display());
    Ok(BoundaryDocument { features })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{contents}").unwrap();
        path
    }

    #[test]
    fn single_row_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "v.txt", "LAT,LON,ELEV\n38.58,-99.09,500\n");

        let records = load_volcanoes(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            VolcanoRecord { latitude: 38.58, longitude: -99.09, elevation: 500.0 }
        );
    }

    #[test]
    fn header_match_is_case_insensitive_and_extra_columns_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "v.txt",
            "NAME,lat,Lon,elev\nShasta,41.4,-122.2,4317\n",
        );

        let records = load_volcanoes(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].elevation, 4317.0);
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "v.txt", "LAT,LON\n38.58,-99.09\n");

        match load_volcanoes(&path) {
            Err(MapError::MissingColumn { column, .. }) => assert_eq!(column, "ELEV"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_field_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "v.txt", "LAT,LON,ELEV\n38.58,-99.09,abc\n");

        match load_volcanoes(&path) {
            Err(MapError::ValueParse { row, column, value, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "ELEV");
                assert_eq!(value, "abc");
            }
            other => panic!("expected ValueParse, got {other:?}"),
        }
    }

    #[test]
    fn nan_field_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "v.txt", "LAT,LON,ELEV\n38.58,-99.09,NaN\n");
        assert!(matches!(load_volcanoes(&path), Err(MapError::ValueParse { .. })));
    }

    #[test]
    fn missing_file_is_reported_as_such() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        assert!(matches!(load_volcanoes(&path), Err(MapError::FileNotFound { .. })));
    }

    #[test]
    fn file_order_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "v.txt",
            "LAT,LON,ELEV\n1.0,1.0,100\n2.0,2.0,200\n3.0,3.0,300\n",
        );

        let records = load_volcanoes(&path).unwrap();
        let elevations: Vec<f64> = records.iter().map(|r| r.elevation).collect();
        assert_eq!(elevations, vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn loading_twice_is_structurally_equal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "v.txt",
            "LAT,LON,ELEV\n38.58,-99.09,500\n41.4,-122.2,4317\n",
        );

        assert_eq!(load_volcanoes(&path).unwrap(), load_volcanoes(&path).unwrap());
    }

    #[test]
    fn boundaries_parse_with_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "world.json",
            "\u{feff}{\"type\":\"FeatureCollection\",\"features\":[\
             {\"type\":\"Feature\",\
              \"properties\":{\"NAME\":\"Iceland\",\"POP2005\":296793},\
              \"geometry\":{\"type\":\"Polygon\",\"coordinates\":[]}}]}",
        );

        let doc = load_boundaries(&path).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.features[0].name.as_deref(), Some("Iceland"));
        assert_eq!(doc.features[0].population, 296793.0);
    }

    #[test]
    fn boundary_without_population_property_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "world.json",
            "{\"type\":\"FeatureCollection\",\"features\":[\
             {\"type\":\"Feature\",\"properties\":{\"NAME\":\"Atlantis\"},\
              \"geometry\":null}]}",
        );

        match load_boundaries(&path) {
            Err(MapError::MissingProperty { index, property, .. }) => {
                assert_eq!(index, 0);
                assert_eq!(property, "POP2005");
            }
            other => panic!("expected MissingProperty, got {other:?}"),
        }
    }

    #[test]
    fn boundary_without_features_array_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "world.json", "{\"type\":\"FeatureCollection\"}");
        assert!(matches!(load_boundaries(&path), Err(MapError::Malformed { .. })));
    }
}
