use palette::Srgb;

// ---------------------------------------------------------------------------
// Bucket – three-way classification outcome
// ---------------------------------------------------------------------------

/// Ordered outcome of a two-threshold classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Low,
    Mid,
    High,
}

// ---------------------------------------------------------------------------
// ThresholdScale – numeric value → bucket → colour
// ---------------------------------------------------------------------------

/// A pure two-threshold classifier with a colour per bucket.
///
/// Intervals are half-open: `[-inf, low)`, `[low, high)`, `[high, +inf)`,
/// so a value sitting exactly on a threshold lands in the higher bucket.
#[derive(Debug, Clone)]
pub struct ThresholdScale {
    low: f64,
    high: f64,
    colors: [Srgb<u8>; 3],
}

impl ThresholdScale {
    /// Build a scale from ascending thresholds and per-bucket colours
    /// (low, mid, high order).
    pub fn new(low: f64, high: f64, colors: [Srgb<u8>; 3]) -> Self {
        debug_assert!(low < high, "thresholds must be ascending");
        ThresholdScale { low, high, colors }
    }

    /// Classify a finite value into its bucket. NaN must not reach this
    /// point; numeric parse failures are rejected by the loader.
    pub fn classify(&self, value: f64) -> Bucket {
        if value < self.low {
            Bucket::Low
        } else if value < self.high {
            Bucket::Mid
        } else {
            Bucket::High
        }
    }

    /// Colour for a value, composing [`classify`](Self::classify) with the
    /// bucket colour table. Recomputed on demand; never cached.
    pub fn color_for(&self, value: f64) -> Srgb<u8> {
        self.colors[match self.classify(value) {
            Bucket::Low => 0,
            Bucket::Mid => 1,
            Bucket::High => 2,
        }]
    }
}

// ---------------------------------------------------------------------------
// Named instantiations
// ---------------------------------------------------------------------------

/// Volcano elevation in meters: green below 1000, orange to 3000, red above.
pub fn elevation_scale() -> ThresholdScale {
    ThresholdScale::new(
        1000.0,
        3000.0,
        [palette::named::GREEN, palette::named::ORANGE, palette::named::RED],
    )
}

/// Country population: green below 10M, orange to 20M, red above.
pub fn population_scale() -> ThresholdScale {
    ThresholdScale::new(
        10_000_000.0,
        20_000_000.0,
        [palette::named::GREEN, palette::named::ORANGE, palette::named::RED],
    )
}

/// Neutral marker border colour.
pub fn marker_border() -> Srgb<u8> {
    palette::named::GREY
}

/// CSS hex rendering (`#rrggbb`) for the HTML output.
pub fn css_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevation_buckets() {
        let scale = elevation_scale();
        assert_eq!(scale.classify(0.0), Bucket::Low);
        assert_eq!(scale.classify(-120.0), Bucket::Low);
        assert_eq!(scale.classify(999.9), Bucket::Low);
        assert_eq!(scale.classify(1500.0), Bucket::Mid);
        assert_eq!(scale.classify(2999.9), Bucket::Mid);
        assert_eq!(scale.classify(4000.0), Bucket::High);
    }

    #[test]
    fn elevation_boundaries_land_high() {
        let scale = elevation_scale();
        assert_eq!(scale.classify(1000.0), Bucket::Mid);
        assert_eq!(scale.classify(3000.0), Bucket::High);
    }

    #[test]
    fn population_buckets() {
        let scale = population_scale();
        assert_eq!(scale.classify(9_999_999.0), Bucket::Low);
        assert_eq!(scale.classify(10_000_000.0), Bucket::Mid);
        assert_eq!(scale.classify(19_999_999.0), Bucket::Mid);
        assert_eq!(scale.classify(20_000_000.0), Bucket::High);
        assert_eq!(scale.classify(1_300_000_000.0), Bucket::High);
    }

    #[test]
    fn colors_follow_buckets() {
        let scale = elevation_scale();
        assert_eq!(scale.color_for(500.0), palette::named::GREEN);
        assert_eq!(scale.color_for(1000.0), palette::named::ORANGE);
        assert_eq!(scale.color_for(3000.0), palette::named::RED);
    }

    #[test]
    fn hex_rendering() {
        assert_eq!(css_hex(palette::named::GREEN), "#008000");
        assert_eq!(css_hex(palette::named::ORANGE), "#ffa500");
        assert_eq!(css_hex(palette::named::RED), "#ff0000");
    }
}
