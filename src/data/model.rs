use serde_json::Value as JsonValue;

// ---------------------------------------------------------------------------
// VolcanoRecord – one row of the volcano file
// ---------------------------------------------------------------------------

/// A single volcano: position in degrees, elevation in meters.
///
/// Elevation may be zero or negative (below sea level); the source performs
/// no range validation and none is assumed here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolcanoRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

// ---------------------------------------------------------------------------
// BoundaryFeature / BoundaryDocument – the world population file
// ---------------------------------------------------------------------------

/// One country polygon from the boundary document.
///
/// The geometry is opaque to this crate: it is carried verbatim as JSON and
/// handed to the map document untouched. Only the population property is
/// interpreted, to pick a fill colour.
#[derive(Debug, Clone)]
pub struct BoundaryFeature {
    /// Country name, when the document provides one (`NAME` property).
    pub name: Option<String>,
    /// `POP2005` population count.
    pub population: f64,
    /// The feature's `geometry` member, verbatim.
    pub geometry: JsonValue,
}

/// The parsed boundary document: all features in document order.
#[derive(Debug, Clone)]
pub struct BoundaryDocument {
    pub features: Vec<BoundaryFeature>,
}

impl BoundaryDocument {
    /// Number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the document has no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
