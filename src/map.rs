use serde_json::json;

use crate::color::{self, ThresholdScale};
use crate::data::model::{BoundaryDocument, VolcanoRecord};
use crate::render::document::{FILL_COLOR_PROPERTY, MapDocument};
use crate::render::MarkerSpec;

const MARKER_RADIUS: f64 = 6.0;
const MARKER_FILL_OPACITY: f64 = 0.7;

// ---------------------------------------------------------------------------
// VolcanoMap – assembles the two overlays into one document
// ---------------------------------------------------------------------------

/// Map assembly: initial view plus the two named overlay groups.
///
/// Holds no record data itself; [`build`](Self::build) is a pure function
/// from loaded inputs to a finished [`MapDocument`].
#[derive(Debug)]
pub struct VolcanoMap {
    center: [f64; 2],
    zoom: u8,
    volcano_overlay: String,
    population_overlay: String,
    elevation_scale: ThresholdScale,
    population_scale: ThresholdScale,
}

impl VolcanoMap {
    pub fn new(center: [f64; 2], zoom: u8) -> Self {
        VolcanoMap {
            center,
            zoom,
            volcano_overlay: "Volcanoes".to_string(),
            population_overlay: "Population".to_string(),
            elevation_scale: color::elevation_scale(),
            population_scale: color::population_scale(),
        }
    }

    /// Attribute every record and feature with its classified colour and
    /// assemble the map document.
    pub fn build(&self, records: &[VolcanoRecord], boundaries: &BoundaryDocument) -> MapDocument {
        let markers = records.iter().map(|r| self.marker_for(r)).collect();
        let polygons = self.styled_features(boundaries);

        MapDocument::new(
            self.center,
            self.zoom,
            &self.volcano_overlay,
            markers,
            &self.population_overlay,
            polygons,
        )
    }

    /// Marker spec for one volcano: position, elevation popup, fill colour
    /// keyed to elevation, neutral border.
    fn marker_for(&self, record: &VolcanoRecord) -> MarkerSpec {
        MarkerSpec {
            lat: record.latitude,
            lon: record.longitude,
            radius: MARKER_RADIUS,
            label: format!("{}m", record.elevation),
            fill_color: color::css_hex(self.elevation_scale.color_for(record.elevation)),
            border_color: color::css_hex(color::marker_border()),
            fill_opacity: MARKER_FILL_OPACITY,
        }
    }

    /// Rebuild the boundary FeatureCollection with each feature's fill
    /// colour (keyed to population) injected as a property. Feature order
    /// and geometry are carried through unchanged.
    fn styled_features(&self, boundaries: &BoundaryDocument) -> serde_json::Value {
        let features: Vec<serde_json::Value> = boundaries
            .features
            .iter()
            .map(|f| {
                let mut properties = serde_json::Map::new();
                properties.insert("NAME".to_string(), json!(f.name));
                properties.insert("POP2005".to_string(), json!(f.population));
                properties.insert(
                    FILL_COLOR_PROPERTY.to_string(),
                    json!(color::css_hex(self.population_scale.color_for(f.population))),
                );
                json!({
                    "type": "Feature",
                    "properties": properties,
                    "geometry": f.geometry,
                })
            })
            .collect();

        json!({ "type": "FeatureCollection", "features": features })
    }
}
