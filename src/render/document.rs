use std::path::Path;

use log::debug;
use serde_json::Value as JsonValue;

use super::MarkerSpec;
use crate::error::MapError;

/// Property the embedded style function reads off each polygon feature.
/// The fill colour is computed in Rust and injected here, so the script
/// side is a one-line lookup rather than threshold logic.
pub const FILL_COLOR_PROPERTY: &str = "fillColor";

// ---------------------------------------------------------------------------
// MapDocument – a fully assembled, serializable map
// ---------------------------------------------------------------------------

/// A self-contained interactive map: one marker overlay, one polygon
/// overlay, each toggleable through a layer control.
#[derive(Debug)]
pub struct MapDocument {
    center: [f64; 2],
    zoom: u8,
    marker_overlay: String,
    markers: Vec<MarkerSpec>,
    polygon_overlay: String,
    /// GeoJSON FeatureCollection with per-feature fill colours injected.
    polygons: JsonValue,
}

impl MapDocument {
    pub fn new(
        center: [f64; 2],
        zoom: u8,
        marker_overlay: &str,
        markers: Vec<MarkerSpec>,
        polygon_overlay: &str,
        polygons: JsonValue,
    ) -> Self {
        MapDocument {
            center,
            zoom,
            marker_overlay: marker_overlay.to_string(),
            markers,
            polygon_overlay: polygon_overlay.to_string(),
            polygons,
        }
    }

    /// Render the document to a single HTML page.
    pub fn to_html(&self) -> String {
        let marker_data =
            serde_json::to_string(&self.markers).unwrap_or_else(|_| "[]".to_string());
        let polygon_data =
            serde_json::to_string(&self.polygons).unwrap_or_else(|_| "null".to_string());

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Volcano map</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
var map = L.map("map").setView([{lat}, {lon}], {zoom});
L.tileLayer("https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png", {{
    attribution: "&copy; OpenStreetMap contributors"
}}).addTo(map);

var markerData = {marker_data};
var markerLayer = L.featureGroup();
markerData.forEach(function (m) {{
    L.circleMarker([m.lat, m.lon], {{
        radius: m.radius,
        color: m.border_color,
        fillColor: m.fill_color,
        fillOpacity: m.fill_opacity
    }}).bindPopup(m.label).addTo(markerLayer);
}});
markerLayer.addTo(map);

var polygonData = {polygon_data};
var polygonLayer = L.geoJSON(polygonData, {{
    style: function (feature) {{
        return {{ fillColor: feature.properties.{fill_prop}, fillOpacity: 0.6, weight: 1 }};
    }}
}});
polygonLayer.addTo(map);

L.control.layers(null, {{
    {marker_name}: markerLayer,
    {polygon_name}: polygonLayer
}}).addTo(map);
</script>
</body>
</html>
"#,
            lat = self.center[0],
            lon = self.center[1],
            zoom = self.zoom,
            marker_data = marker_data,
            polygon_data = polygon_data,
            fill_prop = FILL_COLOR_PROPERTY,
            marker_name = js_string(&self.marker_overlay),
            polygon_name = js_string(&self.polygon_overlay),
        )
    }

    /// Serialize the document to `path` in one write.
    ///
    /// The page is assembled in memory first; if the write itself fails, a
    /// partial artifact is removed before the error propagates.
    pub fn save(&self, path: &Path) -> Result<(), MapError> {
        let html = self.to_html();
        debug!("writing {} bytes to {}", html.len(), path.display());
        std::fs::write(path, html).map_err(|e| {
            let _ = std::fs::remove_file(path);
            MapError::RenderExport { file: path.to_path_buf(), source: e }
        })
    }
}

/// Quote a string for embedding in the script block.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}
