/// Rendering layer: turns attributed records into a browsable map document.
///
/// All geometry, projection and tiling is Leaflet's business; this layer
/// only assembles the document that hands Leaflet its data.
pub mod document;

use serde::Serialize;

// ---------------------------------------------------------------------------
// MarkerSpec – rendering attributes of one volcano
// ---------------------------------------------------------------------------

/// Everything the map document needs to draw one circle marker.
/// Field names match the keys the embedded script reads.
#[derive(Debug, Clone, Serialize)]
pub struct MarkerSpec {
    pub lat: f64,
    pub lon: f64,
    pub radius: f64,
    /// Popup text, e.g. `"1345m"`.
    pub label: String,
    /// CSS hex fill, e.g. `"#008000"`.
    pub fill_color: String,
    /// CSS hex border colour.
    pub border_color: String,
    pub fill_opacity: f64,
}
